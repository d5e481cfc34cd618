//! Service health models for the status overview.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TeamerError;

/// A monitored subsystem as shown on the status page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub status: ServiceStatus,
    /// Uptime percentage, e.g. `99.95`.
    pub uptime: f64,
    pub response_time_ms: u32,
    pub icon: ServiceIcon,
}

impl Service {
    pub fn new(
        name: impl Into<String>,
        status: ServiceStatus,
        uptime: f64,
        response_time_ms: u32,
        icon: ServiceIcon,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            uptime,
            response_time_ms,
            icon,
        }
    }
}

/// Service health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Operational,
    Degraded,
    Outage,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 3] = [Self::Operational, Self::Degraded, Self::Outage];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Degraded => "degraded",
            Self::Outage => "outage",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceStatus {
    type Err = TeamerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operational" => Ok(Self::Operational),
            "degraded" => Ok(Self::Degraded),
            "outage" => Ok(Self::Outage),
            _ => Err(TeamerError::unknown_status("service", s)),
        }
    }
}

/// Icon shown next to a service name. Opaque to everything but the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Chat,
    Files,
    Search,
    Key,
    Video,
}

impl ServiceIcon {
    /// Stable slug used as a CSS hook (`icon-<slug>`).
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Chat => "message-square",
            Self::Files => "file-box",
            Self::Search => "search",
            Self::Key => "key",
            Self::Video => "video",
        }
    }
}
