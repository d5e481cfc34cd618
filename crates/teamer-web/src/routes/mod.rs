//! Route handlers.

pub mod api;
pub mod incidents;
pub mod landing;
pub mod not_found;
pub mod status;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use teamer_core::{TeamerError, TeamerResult};

/// Render a template to a string.
pub(crate) fn render_html<T: Template>(template: &T) -> TeamerResult<String> {
    template
        .render()
        .map_err(|e| TeamerError::Template(e.to_string()))
}

/// Render a template into an HTML response with the given status.
///
/// Template failures become a 500 with a plain message.
pub(crate) fn render<T: Template>(template: &T, status: StatusCode) -> Response {
    match render_html(template) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(e.to_string())).into_response()
        }
    }
}
