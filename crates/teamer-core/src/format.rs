//! Display-time formatting helpers.

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Percentage with the shortest decimal representation, e.g. `98.5%`.
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}

/// Milliseconds, e.g. `45ms`.
pub fn millis(value: u32) -> String {
    format!("{}ms", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("monitoring"), "Monitoring");
        assert_eq!(capitalize("Resolved"), "Resolved");
        assert_eq!(capitalize("in progress"), "In progress");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_percent_drops_trailing_zeros() {
        assert_eq!(percent(98.50), "98.5%");
        assert_eq!(percent(99.99), "99.99%");
        assert_eq!(percent(100.0), "100%");
    }

    #[test]
    fn test_millis() {
        assert_eq!(millis(45), "45ms");
    }
}
