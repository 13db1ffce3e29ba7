//! HTTP request handlers

use axum::{http::header, response::IntoResponse};

/// Health check handler
pub async fn health() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        crate::tools::health(),
    )
}
