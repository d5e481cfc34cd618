//! Fallback for unknown paths.

use askama::Template;
use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

/// Any unmatched path - render a 404 page linking home.
pub async fn fallback(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "no route matched");
    let template = NotFoundTemplate {
        path: uri.path().to_string(),
    };
    super::render(&template, StatusCode::NOT_FOUND)
}
