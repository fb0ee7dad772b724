//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        DefaultBodyLimit, Query, State,
    },
    http::{header::X_CONTENT_TYPE_OPTIONS, HeaderMap, HeaderValue},
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::error::ApiError;
use crate::models::{AppConfig, RenderParams};
use crate::services::RenderService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub renderer: Arc<RenderService>,
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let renderer = Arc::new(RenderService::new(&config));
    AppState {
        config: Arc::new(config),
        renderer,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Request
/// bodies are capped at the configured upload limit.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.limits.max_upload_bytes;

    Router::new()
        .route("/api/render", post(handle_render))
        .route("/api/grid", post(handle_grid))
        .route("/api/patterns", get(api::handle_patterns))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        // Rendered bytes are served as attachments; never let a browser sniff them.
        .layer(SetResponseHeaderLayer::overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_render(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<RenderParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    api::handle_render(
        State(state.config),
        State(state.renderer),
        headers,
        query,
        body,
    )
    .await
}

async fn handle_grid(
    State(state): State<AppState>,
    query: Result<Query<RenderParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<api::GridResponse>, ApiError> {
    api::handle_grid(State(state.config), State(state.renderer), query, body).await
}
