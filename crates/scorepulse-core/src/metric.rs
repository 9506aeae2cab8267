//! Metric data model.
//!
//! A metric is a named numeric series with a fixed kind. The registry stores
//! the current value per label set; history belongs to the external collector.

use std::fmt;

use serde::Serialize;

/// Metric kind, fixed at first registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Arbitrary settable value (e.g. current R² score).
    Gauge,
    /// Monotonically increasing value (e.g. total pipeline runs).
    Counter,
}

impl MetricKind {
    /// Name used on `# TYPE` lines.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned label pairs, sorted by key for deterministic rendering.
pub type LabelSet = Vec<(String, String)>;

/// Normalize caller labels: owned pairs sorted by key.
pub fn normalize_labels(labels: &[(&str, &str)]) -> LabelSet {
    let mut out: LabelSet = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    out.sort();
    out
}

/// One scrape-time observation of a single series.
///
/// Immutable once produced; the `timestamp` is the scrape instant in unix
/// seconds, shared by every sample of the same snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub name: String,
    pub labels: LabelSet,
    pub value: f64,
    pub timestamp: f64,
}
