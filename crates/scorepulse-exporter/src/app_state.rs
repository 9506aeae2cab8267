//! Shared application state for the scorepulse exporter.
//!
//! The registry is constructed here and handed by reference to both the HTTP
//! handlers and the pipeline hook; there is no ambient global.

use std::sync::Arc;

use scorepulse_core::contract;
use scorepulse_core::error::Result;
use scorepulse_core::registry::Registry;

use crate::config::ExporterConfig;
use crate::hook::PipelineHook;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Arc<Registry>,
}

impl AppState {
    /// Build application state and register the metric contract.
    /// A registration conflict here is a startup bug and aborts init.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let registry = Arc::new(Registry::new());
        contract::register_all(&registry)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, registry }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.inner.registry)
    }

    /// Recorder handed to the monitored pipeline.
    pub fn hook(&self) -> PipelineHook {
        PipelineHook::new(self.registry())
    }
}
