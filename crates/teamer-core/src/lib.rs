//! TeamerHQ Core Library
//!
//! Domain models, built-in data and display helpers for the TeamerHQ
//! landing page and status dashboard.

pub mod catalog;
pub mod error;
pub mod format;
pub mod incident;
pub mod palette;
pub mod service;
pub mod summary;

pub use catalog::{Catalog, PageCopy};
pub use error::{TeamerError, TeamerResult};
pub use incident::{ImpactLevel, Incident, IncidentStatus, TimelineUpdate};
pub use service::{Service, ServiceIcon, ServiceStatus};
pub use summary::Summary;
