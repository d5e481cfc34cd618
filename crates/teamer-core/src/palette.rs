//! Status-to-color mapping for the views.
//!
//! The typed methods cover the closed enumerations. The `*_class` free
//! functions accept raw strings and fall back to a neutral gray.

use crate::incident::IncidentStatus;
use crate::service::ServiceStatus;

/// Neutral dot class for unrecognized service statuses.
pub const NEUTRAL_DOT: &str = "bg-gray-400";

/// Neutral badge class for unrecognized incident statuses.
pub const NEUTRAL_BADGE: &str = "text-gray-400 bg-gray-400/10";

impl ServiceStatus {
    /// Class for the small status dot on a service card.
    pub fn dot_class(&self) -> &'static str {
        match self {
            Self::Operational => "bg-green-400",
            Self::Degraded => "bg-yellow-400",
            Self::Outage => "bg-red-400",
        }
    }
}

impl IncidentStatus {
    /// Classes for the pill badge next to an incident title.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Investigating => "text-red-400 bg-red-400/10",
            Self::Identified => "text-yellow-400 bg-yellow-400/10",
            Self::Monitoring => "text-blue-400 bg-blue-400/10",
            Self::Resolved => "text-green-400 bg-green-400/10",
        }
    }
}

/// Dot class for a raw service status string.
pub fn service_dot_class(raw: &str) -> &'static str {
    raw.parse::<ServiceStatus>()
        .map(|s| s.dot_class())
        .unwrap_or(NEUTRAL_DOT)
}

/// Badge class for a raw incident status string.
pub fn incident_badge_class(raw: &str) -> &'static str {
    raw.parse::<IncidentStatus>()
        .map(|s| s.badge_class())
        .unwrap_or(NEUTRAL_BADGE)
}
