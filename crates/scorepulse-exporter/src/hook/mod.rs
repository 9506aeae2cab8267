//! Pipeline hook: fire-and-forget metric recording.
//!
//! The monitored pipeline calls these methods at its lifecycle points. A
//! failed update must never abort the pipeline, so every registry error is
//! logged with its stable code and dropped here instead of propagating.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use scorepulse_core::contract;
use scorepulse_core::error::Result;
use scorepulse_core::registry::Registry;

/// Pipeline stages with a `<stage>_success` gauge in the metric contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DataIngestion,
    DataValidation,
}

impl Stage {
    /// Contract gauge for this stage.
    pub fn metric(self) -> &'static str {
        match self {
            Stage::DataIngestion => contract::DATA_INGESTION_SUCCESS,
            Stage::DataValidation => contract::DATA_VALIDATION_SUCCESS,
        }
    }
}

/// Recorder handed to the monitored pipeline.
#[derive(Clone)]
pub struct PipelineHook {
    registry: Arc<Registry>,
}

impl PipelineHook {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// A pipeline run started: stamp the run and count it.
    pub fn run_started(&self) {
        self.record(
            self.registry
                .set(contract::PIPELINE_LAST_RUN_TIMESTAMP, &[], unix_now()),
        );
        self.record(self.registry.increment(contract::PIPELINE_RUNS_TOTAL, &[], 1.0));
    }

    /// A stage finished, successfully or not.
    pub fn stage_finished(&self, stage: Stage, ok: bool) {
        self.record(self.registry.set(stage.metric(), &[], flag(ok)));
    }

    /// Model evaluation produced fresh quality scores.
    pub fn evaluation_recorded(&self, r2: f64, rmse: f64, mae: f64) {
        self.record(self.registry.set(contract::MODEL_R2_SCORE, &[], r2));
        self.record(self.registry.set(contract::MODEL_RMSE, &[], rmse));
        self.record(self.registry.set(contract::MODEL_MAE, &[], mae));
    }

    /// The run ended.
    pub fn run_finished(&self, ok: bool, elapsed: Duration) {
        self.record(self.registry.set(contract::PIPELINE_SUCCESS, &[], flag(ok)));
        self.record(self.registry.set(
            contract::PIPELINE_DURATION_SECONDS,
            &[],
            elapsed.as_secs_f64(),
        ));
    }

    fn record(&self, res: Result<()>) {
        if let Err(e) = res {
            tracing::warn!(code = e.code().as_str(), error = %e, "metric update dropped");
        }
    }
}

fn flag(ok: bool) -> f64 {
    if ok {
        1.0
    } else {
        0.0
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
