//! Incident records and lookup.

pub mod model;

pub use model::{ImpactLevel, Incident, IncidentStatus, TimelineUpdate};

/// Find an incident by identifier. Exact, case-sensitive match.
pub fn find<'a>(incidents: &'a [Incident], id: &str) -> Option<&'a Incident> {
    let found = incidents.iter().find(|i| i.id == id);
    if found.is_none() {
        tracing::debug!(incident_id = id, "incident lookup missed");
    }
    found
}

/// Number of incidents that are not resolved.
pub fn active_count(incidents: &[Incident]) -> usize {
    incidents.iter().filter(|i| i.is_active()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(id: &str, status: IncidentStatus) -> Incident {
        Incident {
            id: id.to_string(),
            title: format!("Incident {}", id),
            status,
            date: "2024-03-21".to_string(),
            description: String::new(),
            updates: vec![
                TimelineUpdate::new("10:00 UTC", "newest"),
                TimelineUpdate::new("09:00 UTC", "oldest"),
            ],
            affected_services: vec!["Chat Service".to_string(), "Search Engine".to_string()],
            impact: ImpactLevel::Medium,
            resolution: "In Progress".to_string(),
        }
    }

    #[test]
    fn test_find_exact_match() {
        let incidents = vec![
            incident("1", IncidentStatus::Monitoring),
            incident("2", IncidentStatus::Resolved),
        ];
        assert_eq!(find(&incidents, "2").map(|i| i.title.as_str()), Some("Incident 2"));
        assert!(find(&incidents, "3").is_none());
        assert!(find(&incidents, " 1").is_none());
        assert!(find(&incidents, "").is_none());
    }

    #[test]
    fn test_active_count() {
        let incidents = vec![
            incident("1", IncidentStatus::Investigating),
            incident("2", IncidentStatus::Resolved),
            incident("3", IncidentStatus::Identified),
        ];
        assert_eq!(active_count(&incidents), 2);
    }

    #[test]
    fn test_latest_update_is_first() {
        let i = incident("1", IncidentStatus::Monitoring);
        assert_eq!(i.latest_update().map(|u| u.message.as_str()), Some("newest"));
        assert_eq!(i.affected_services_line(), "Chat Service, Search Engine");
    }

    #[test]
    fn test_status_labels() {
        let labels: Vec<String> = IncidentStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Investigating", "Identified", "Monitoring", "Resolved"]);
        assert_eq!(ImpactLevel::Medium.label(), "Medium");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("RESOLVED".parse::<IncidentStatus>().unwrap(), IncidentStatus::Resolved);
        let err = "closed".parse::<IncidentStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown incident status: 'closed'");
    }
}
