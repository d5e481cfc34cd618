//! Status overview handler.

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Response};
use chrono::{DateTime, Utc};

use crate::state::AppState;
use teamer_core::{format, Catalog, Incident, Service, Summary, TimelineUpdate};

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    pub nav_home: &'static str,
    pub last_updated: String,
    pub summary: Summary,
    pub reported_uptime: String,
    pub average_response: String,
    pub services: Vec<ServiceView>,
    pub incidents: Vec<IncidentSummaryView>,
}

/// View model for a service card.
pub struct ServiceView {
    pub name: String,
    pub status: &'static str,
    pub dot_class: &'static str,
    pub icon: &'static str,
    pub response_time: String,
    pub uptime: String,
}

/// View model for an incident entry on the overview.
pub struct IncidentSummaryView {
    pub id: String,
    pub title: String,
    pub status_label: String,
    pub badge_class: &'static str,
    pub date: String,
    pub description: String,
    /// At most one entry: the latest update.
    pub latest: Vec<TimelineUpdate>,
}

impl ServiceView {
    fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            status: service.status.as_str(),
            dot_class: service.status.dot_class(),
            icon: service.icon.slug(),
            response_time: format::millis(service.response_time_ms),
            uptime: format::percent(service.uptime),
        }
    }
}

impl IncidentSummaryView {
    fn from_incident(incident: &Incident) -> Self {
        Self {
            id: incident.id.clone(),
            title: incident.title.clone(),
            status_label: incident.status.label(),
            badge_class: incident.status.badge_class(),
            date: incident.date.clone(),
            description: incident.description.clone(),
            latest: incident.latest_update().cloned().into_iter().collect(),
        }
    }
}

impl StatusTemplate {
    pub fn from_catalog(catalog: &Catalog, last_updated: impl Into<String>) -> Self {
        let summary = Summary::from_catalog(catalog);
        Self {
            nav_home: "/",
            last_updated: last_updated.into(),
            reported_uptime: format::percent(summary.reported_uptime),
            average_response: format::millis(summary.average_response_ms),
            summary,
            services: catalog.services.iter().map(ServiceView::from_service).collect(),
            incidents: catalog
                .incidents
                .iter()
                .map(IncidentSummaryView::from_incident)
                .collect(),
        }
    }
}

// ============================================================
// HANDLERS
// ============================================================

/// `HH:MM:SS` label shown in the nav bar.
pub fn last_updated_label(now: DateTime<Utc>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// GET /status - Render the status overview.
pub async fn overview(State(state): State<AppState>) -> Response {
    let last_updated = last_updated_label(Utc::now());
    let template = StatusTemplate::from_catalog(&state.catalog, last_updated);
    super::render(&template, StatusCode::OK)
}
