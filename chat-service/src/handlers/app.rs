use crate::startup::AppState;
use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use service_core::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub short_name: String,
    pub full_name: String,
}

/// Landing page with the chat form.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let profile = state.resolver.profile();
    IndexTemplate {
        short_name: profile.short_name.clone(),
        full_name: profile.full_name.clone(),
    }
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "chat-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check: the text provider must accept our credentials.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let provider = state.resolver.provider();
    provider.health_check().await.map_err(|e| {
        tracing::warn!(provider = provider.name(), error = %e, "Readiness check failed");
        AppError::ServiceUnavailable
    })?;
    Ok(StatusCode::OK)
}

/// Prometheus scrape endpoint.
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::services::metrics::get_metrics(),
    )
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("No such route"))
}
