//! scorepulse core: metric data model, registry, and exposition encoding.
//!
//! This crate defines the metric contract and error surface shared by the
//! exporter, the pipeline hook, and tooling. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ScorePulseError`/`Result` so the
//! exporter process does not crash on a bad update from the pipeline.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod contract;
pub mod error;
pub mod exposition;
pub mod metric;
pub mod registry;

/// Shared result type.
pub use error::{Result, ScorePulseError};
pub use metric::{MetricKind, Sample};
pub use registry::{Registry, Snapshot};
