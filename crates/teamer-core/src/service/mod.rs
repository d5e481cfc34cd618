//! Service health records.

pub mod model;

pub use model::{Service, ServiceIcon, ServiceStatus};

/// Integer mean of the services' response times, `0` for an empty slice.
pub fn average_response_time(services: &[Service]) -> u32 {
    if services.is_empty() {
        return 0;
    }
    let total: u64 = services.iter().map(|s| u64::from(s.response_time_ms)).sum();
    (total / services.len() as u64) as u32
}

/// Services whose status is anything other than operational.
pub fn unhealthy(services: &[Service]) -> impl Iterator<Item = &Service> {
    services
        .iter()
        .filter(|s| s.status != ServiceStatus::Operational)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc(name: &str, status: ServiceStatus, ms: u32) -> Service {
        Service::new(name, status, 99.0, ms, ServiceIcon::Chat)
    }

    #[test]
    fn test_average_response_time() {
        let services = vec![
            svc("a", ServiceStatus::Operational, 45),
            svc("b", ServiceStatus::Operational, 120),
            svc("c", ServiceStatus::Degraded, 86),
        ];
        assert_eq!(average_response_time(&services), 83);
        assert_eq!(average_response_time(&[]), 0);
    }

    #[test]
    fn test_unhealthy_filters_operational() {
        let services = vec![
            svc("a", ServiceStatus::Operational, 1),
            svc("b", ServiceStatus::Degraded, 1),
            svc("c", ServiceStatus::Outage, 1),
        ];
        let names: Vec<&str> = unhealthy(&services).map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("operational".parse::<ServiceStatus>().unwrap(), ServiceStatus::Operational);
        assert_eq!("Degraded".parse::<ServiceStatus>().unwrap(), ServiceStatus::Degraded);
        assert!("down".parse::<ServiceStatus>().is_err());
        for status in ServiceStatus::ALL {
            assert_eq!(status.as_str().parse::<ServiceStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ServiceStatus::Outage).unwrap();
        assert_eq!(json, "\"outage\"");
    }
}
