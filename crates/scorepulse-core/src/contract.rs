//! Metric name contract shared with the external alert rules.
//!
//! These names are evaluated by threshold rules outside this process, so they
//! must match exactly. All of them are registered at startup; a registration
//! conflict here is fatal.

use crate::error::Result;
use crate::metric::MetricKind;
use crate::registry::Registry;

pub const MODEL_R2_SCORE: &str = "model_r2_score";
pub const MODEL_RMSE: &str = "model_rmse";
pub const MODEL_MAE: &str = "model_mae";
pub const PIPELINE_SUCCESS: &str = "pipeline_success";
pub const PIPELINE_DURATION_SECONDS: &str = "pipeline_duration_seconds";
pub const DATA_INGESTION_SUCCESS: &str = "data_ingestion_success";
pub const DATA_VALIDATION_SUCCESS: &str = "data_validation_success";
pub const PIPELINE_LAST_RUN_TIMESTAMP: &str = "pipeline_last_run_timestamp";
pub const PIPELINE_RUNS_TOTAL: &str = "pipeline_runs_total";

/// `(name, kind, help)` for every contract metric.
pub const ALL: &[(&str, MetricKind, &str)] = &[
    (
        MODEL_R2_SCORE,
        MetricKind::Gauge,
        "R² score of the model on the evaluation split",
    ),
    (
        MODEL_RMSE,
        MetricKind::Gauge,
        "Root mean squared error on the evaluation split",
    ),
    (
        MODEL_MAE,
        MetricKind::Gauge,
        "Mean absolute error on the evaluation split",
    ),
    (
        PIPELINE_SUCCESS,
        MetricKind::Gauge,
        "1 when the last pipeline run completed, 0 otherwise",
    ),
    (
        PIPELINE_DURATION_SECONDS,
        MetricKind::Gauge,
        "Wall-clock duration of the last pipeline run in seconds",
    ),
    (
        DATA_INGESTION_SUCCESS,
        MetricKind::Gauge,
        "1 when the data ingestion stage succeeded, 0 otherwise",
    ),
    (
        DATA_VALIDATION_SUCCESS,
        MetricKind::Gauge,
        "1 when the data validation stage succeeded, 0 otherwise",
    ),
    (
        PIPELINE_LAST_RUN_TIMESTAMP,
        MetricKind::Gauge,
        "Unix timestamp of the last pipeline run start",
    ),
    (
        PIPELINE_RUNS_TOTAL,
        MetricKind::Counter,
        "Total pipeline runs since exporter start",
    ),
];

/// Register every contract metric. Errors only on a kind conflict, which
/// callers must treat as fatal at process init.
pub fn register_all(registry: &Registry) -> Result<()> {
    for (name, kind, help) in ALL {
        registry.register(name, *kind, help)?;
    }
    Ok(())
}
