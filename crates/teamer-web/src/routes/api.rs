//! Read-only JSON mirror of the status data.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;
use teamer_core::{Incident, Service, Summary, TeamerError};

#[derive(Serialize)]
pub struct StatusResponse {
    pub summary: Summary,
    pub services: Vec<Service>,
    pub incidents: Vec<Incident>,
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let catalog = &state.catalog;
    Json(StatusResponse {
        summary: Summary::from_catalog(catalog),
        services: catalog.services.clone(),
        incidents: catalog.incidents.clone(),
    })
}

pub async fn get_incident(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Incident>, (StatusCode, Json<Value>)> {
    state
        .catalog
        .incident(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": TeamerError::IncidentNotFound(id).to_string() })),
            )
        })
}
