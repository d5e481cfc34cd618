//! Incident detail handler.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::state::AppState;
use teamer_core::{Incident, TimelineUpdate};

#[derive(Template)]
#[template(path = "incident.html")]
pub struct IncidentTemplate {
    pub nav_home: &'static str,
    /// Always empty: the detail page hides the nav timestamp.
    pub last_updated: String,
    pub incident: IncidentView,
}

#[derive(Template)]
#[template(path = "incident_not_found.html")]
pub struct IncidentNotFoundTemplate {
    pub back_href: &'static str,
}

impl Default for IncidentNotFoundTemplate {
    fn default() -> Self {
        Self { back_href: "/status" }
    }
}

/// View model for the detail page.
pub struct IncidentView {
    pub title: String,
    pub status_label: String,
    pub badge_class: &'static str,
    pub date: String,
    pub affected_services: String,
    pub impact: String,
    pub resolution: String,
    pub updates: Vec<TimelineUpdate>,
}

impl IncidentView {
    fn from_incident(incident: &Incident) -> Self {
        Self {
            title: incident.title.clone(),
            status_label: incident.status.label(),
            badge_class: incident.status.badge_class(),
            date: incident.date.clone(),
            affected_services: incident.affected_services_line(),
            impact: incident.impact.label(),
            resolution: incident.resolution.clone(),
            updates: incident.updates.clone(),
        }
    }
}

impl IncidentTemplate {
    pub fn new(incident: &Incident) -> Self {
        Self {
            nav_home: "/status",
            last_updated: String::new(),
            incident: IncidentView::from_incident(incident),
        }
    }
}

/// GET /status/incidents/{id} - Render one incident, or the not-found page.
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.incident(&id) {
        Some(incident) => super::render(&IncidentTemplate::new(incident), StatusCode::OK),
        None => super::render(&IncidentNotFoundTemplate::default(), StatusCode::NOT_FOUND),
    }
}
