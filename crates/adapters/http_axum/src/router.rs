//! Axum router assembly.

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use geostore_app::ports::{PointRepository, PolygonRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the resource routes at `/`, redirects the bare root to `/points`,
/// and includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR, AR>(state: AppState<PR, AR>) -> Router
where
    PR: PointRepository + Send + Sync + 'static,
    AR: PolygonRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_redirect() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/points")]).into_response()
}

async fn health_check() -> &'static str {
    "OK"
}
