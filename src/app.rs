// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router
//! directly without starting the full binary.

use crate::models::inspection::{ErrorResponse, InspectRequest};
use crate::models::report::SeoReport;
use crate::services::inspector::inspect;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::warn;

/// Default bound for probe requests; the page fetch carries its own tighter
/// per-request bound.
const CLIENT_DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state injected into every route handler via
/// `State<AppState>`. The reqwest client is the only shared piece and is
/// reused across inspections for its connection pool; inspections share no
/// other state.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(CLIENT_DEFAULT_TIMEOUT)
            .user_agent(concat!("seo-inspector/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

/// Inspect one URL and return its SEO report.
///
/// Every failure kind maps to 400 with a single `error` field; the caller
/// always receives exactly one of a report or an error body.
async fn check_seo_handler(
    State(state): State<AppState>,
    Json(payload): Json<InspectRequest>,
) -> Result<Json<SeoReport>, (StatusCode, Json<ErrorResponse>)> {
    inspect(&state.http, &payload.url).await.map(Json).map_err(|e| {
        warn!(url = %payload.url, error = %e, "inspection failed");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

/// Build the application router. Cross-origin requests are allowed from any
/// origin so browser-based frontends can call the API directly.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/check_seo", post(check_seo_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
