//! The fixed data set behind every page.

use serde::Serialize;

use crate::incident::{self, ImpactLevel, Incident, IncidentStatus, TimelineUpdate};
use crate::service::{Service, ServiceIcon, ServiceStatus};

/// Copy shown on the overview that is stored rather than derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageCopy {
    pub headline: String,
    /// Uptime figure quoted in the banner and metric card.
    pub reported_uptime: f64,
    pub response_trend: String,
    pub uptime_trend: String,
    pub incidents_note: String,
}

impl Default for PageCopy {
    fn default() -> Self {
        Self {
            headline: "All Systems Operational".to_string(),
            reported_uptime: 99.95,
            response_trend: "↓ 12% from last week".to_string(),
            uptime_trend: "↑ 0.03% from last month".to_string(),
            incidents_note: "All other systems operational".to_string(),
        }
    }
}

/// Services, incidents and page copy. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub incidents: Vec<Incident>,
    pub page: PageCopy,
}

impl Catalog {
    pub fn new(services: Vec<Service>, incidents: Vec<Incident>, page: PageCopy) -> Self {
        Self {
            services,
            incidents,
            page,
        }
    }

    /// The data set the site ships with.
    pub fn builtin() -> Self {
        Self::new(builtin_services(), builtin_incidents(), PageCopy::default())
    }

    /// Look up an incident by identifier.
    pub fn incident(&self, id: &str) -> Option<&Incident> {
        incident::find(&self.incidents, id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_services() -> Vec<Service> {
    vec![
        Service::new("Chat Service", ServiceStatus::Operational, 99.99, 45, ServiceIcon::Chat),
        Service::new("File Storage", ServiceStatus::Operational, 99.95, 120, ServiceIcon::Files),
        Service::new("Search Engine", ServiceStatus::Operational, 99.99, 85, ServiceIcon::Search),
        Service::new("Authentication", ServiceStatus::Degraded, 98.50, 250, ServiceIcon::Key),
        Service::new("Video Calls", ServiceStatus::Operational, 99.90, 150, ServiceIcon::Video),
    ]
}

fn builtin_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "1".to_string(),
            title: "Authentication Service Degraded Performance".to_string(),
            status: IncidentStatus::Monitoring,
            date: "2024-03-21".to_string(),
            description: "We are experiencing increased latency in our authentication services."
                .to_string(),
            updates: vec![
                TimelineUpdate::new(
                    "09:45 UTC",
                    "Our team has identified the root cause and implemented initial fixes.",
                ),
                TimelineUpdate::new(
                    "08:30 UTC",
                    "Investigation revealed increased load on authentication servers.",
                ),
            ],
            affected_services: vec!["Authentication".to_string(), "Chat Service".to_string()],
            impact: ImpactLevel::Medium,
            resolution: "In Progress".to_string(),
        },
        Incident {
            id: "2".to_string(),
            title: "Scheduled Platform Maintenance".to_string(),
            status: IncidentStatus::Resolved,
            date: "2024-03-20".to_string(),
            description: "Completed scheduled maintenance and performance improvements.".to_string(),
            updates: vec![TimelineUpdate::new(
                "04:00 UTC",
                "Maintenance completed successfully. All systems operational.",
            )],
            affected_services: vec!["All Services".to_string()],
            impact: ImpactLevel::Low,
            resolution: "Completed".to_string(),
        },
    ]
}
