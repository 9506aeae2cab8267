//! Axum router wiring for the exporter surface.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .route("/status", get(ops::status))
        .route("/ml-metrics", get(ops::ml_metrics))
        .route("/healthz", get(ops::healthz))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            ops::request_timeout,
        ))
        .with_state(state)
}
