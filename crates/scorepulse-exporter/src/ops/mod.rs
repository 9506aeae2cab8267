//! Operational HTTP endpoints.
//!
//! - `/healthz`    : liveness
//! - `/metrics`    : Prometheus text format
//! - `/status`     : compact JSON pipeline/model status
//! - `/ml-metrics` : detailed JSON with raw samples

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use scorepulse_core::registry::Snapshot;
use scorepulse_core::{contract, exposition};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Bound every request by `exporter.request_timeout_ms`; a slow response is
/// answered with 408 and the collector retries on its own poll interval.
pub async fn request_timeout(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let limit = Duration::from_millis(state.cfg().exporter.request_timeout_ms);
    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(resp) => resp,
        Err(_) => (StatusCode::REQUEST_TIMEOUT, "request timed out").into_response(),
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = exposition::render(&state.registry().snapshot());

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, exposition::CONTENT_TYPE)],
        body,
    )
        .into_response()
}

/// SUCCESS/FAILED wording for a 0/1 stage gauge.
fn stage_word(snap: &Snapshot, name: &str) -> &'static str {
    if snap.value(name).unwrap_or(0.0) == 1.0 {
        "SUCCESS"
    } else {
        "FAILED"
    }
}

pub async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let snap = state.registry().snapshot();
    let val = |n: &str| snap.value(n).unwrap_or(0.0);

    Json(json!({
        "pipeline_status": if val(contract::PIPELINE_SUCCESS) == 1.0 { "HEALTHY" } else { "FAILED" },
        "model_accuracy": format!("{:.2}%", val(contract::MODEL_R2_SCORE) * 100.0),
        "model_r2_score": val(contract::MODEL_R2_SCORE),
        "model_rmse": val(contract::MODEL_RMSE),
        "model_mae": val(contract::MODEL_MAE),
        "data_ingestion": stage_word(&snap, contract::DATA_INGESTION_SUCCESS),
        "data_validation": stage_word(&snap, contract::DATA_VALIDATION_SUCCESS),
        "last_run_timestamp": val(contract::PIPELINE_LAST_RUN_TIMESTAMP),
        "timestamp": snap.taken_at,
    }))
}

pub async fn ml_metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    let snap = state.registry().snapshot();
    let val = |n: &str| snap.value(n).unwrap_or(0.0);
    let r2 = val(contract::MODEL_R2_SCORE);
    let samples: Vec<_> = snap.samples().collect();

    Json(json!({
        "model_performance": {
            "r2_score": format!("{:.4} ({:.2}%)", r2, r2 * 100.0),
            "rmse": format!("{:.4}", val(contract::MODEL_RMSE)),
            "mae": format!("{:.4}", val(contract::MODEL_MAE)),
        },
        "pipeline_status": {
            "overall_success": stage_word(&snap, contract::PIPELINE_SUCCESS),
            "data_ingestion": stage_word(&snap, contract::DATA_INGESTION_SUCCESS),
            "data_validation": stage_word(&snap, contract::DATA_VALIDATION_SUCCESS),
        },
        "timing": {
            "last_run_timestamp": val(contract::PIPELINE_LAST_RUN_TIMESTAMP),
            "duration_seconds": val(contract::PIPELINE_DURATION_SECONDS),
            "total_runs": val(contract::PIPELINE_RUNS_TOTAL),
        },
        "raw_samples": samples,
    }))
}
