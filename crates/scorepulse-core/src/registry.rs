//! Process-wide metric registry.
//!
//! One mutex guards the whole store; every operation holds it only for the
//! in-memory update or read, never across I/O. Families are kept in a
//! `BTreeMap` so snapshots come out ordered by metric name; series within a
//! family stay in label-set insertion order.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Result, ScorePulseError};
use crate::metric::{normalize_labels, LabelSet, MetricKind, Sample};

struct Series {
    labels: LabelSet,
    value: f64,
}

struct MetricEntry {
    kind: MetricKind,
    help: String,
    series: Vec<Series>,
}

/// Thread-safe store of current metric values.
///
/// Created once at process start, shared by the pipeline hook (writer) and
/// the HTTP handlers (readers), discarded at shutdown. Values reset on
/// restart; durable history lives in the external collector.
#[derive(Default)]
pub struct Registry {
    inner: Mutex<BTreeMap<String, MetricEntry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, MetricEntry>> {
        // A poisoned lock only means a panic elsewhere; the data is still
        // a valid map, so keep serving rather than propagating the poison.
        match self.inner.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Register a metric. Idempotent for a matching kind; the first `help`
    /// text wins. A kind mismatch is a `Conflict` and must abort startup.
    pub fn register(&self, name: &str, kind: MetricKind, help: &str) -> Result<()> {
        let mut map = self.lock();
        if let Some(existing) = map.get(name) {
            if existing.kind != kind {
                return Err(ScorePulseError::Conflict {
                    name: name.to_string(),
                    existing: existing.kind,
                    requested: kind,
                });
            }
            return Ok(());
        }
        tracing::debug!(name, kind = kind.as_str(), "metric registered");
        map.insert(
            name.to_string(),
            MetricEntry {
                kind,
                help: help.to_string(),
                series: Vec::new(),
            },
        );
        Ok(())
    }

    /// Overwrite the current value of a gauge series.
    pub fn set(&self, name: &str, labels: &[(&str, &str)], value: f64) -> Result<()> {
        let mut map = self.lock();
        let entry = map
            .get_mut(name)
            .ok_or_else(|| ScorePulseError::UnknownMetric(name.to_string()))?;
        if entry.kind != MetricKind::Gauge {
            return Err(ScorePulseError::InvalidValue(format!(
                "set on {} {name}",
                entry.kind
            )));
        }
        upsert(&mut entry.series, normalize_labels(labels), |v| *v = value);
        Ok(())
    }

    /// Add a non-negative delta to a counter series.
    pub fn increment(&self, name: &str, labels: &[(&str, &str)], delta: f64) -> Result<()> {
        if delta < 0.0 {
            return Err(ScorePulseError::InvalidValue(format!(
                "negative counter delta {delta} for {name}"
            )));
        }
        let mut map = self.lock();
        let entry = map
            .get_mut(name)
            .ok_or_else(|| ScorePulseError::UnknownMetric(name.to_string()))?;
        if entry.kind != MetricKind::Counter {
            return Err(ScorePulseError::InvalidValue(format!(
                "increment on {} {name}",
                entry.kind
            )));
        }
        upsert(&mut entry.series, normalize_labels(labels), |v| *v += delta);
        Ok(())
    }

    /// Ordered, immutable view of the current values.
    ///
    /// Families ordered by name, series in insertion order. The lock is held
    /// for O(metric count) copying only; concurrent updates may land between
    /// two snapshots but never inside one.
    pub fn snapshot(&self) -> Snapshot {
        let taken_at = unix_now();
        let map = self.lock();
        let families = map
            .iter()
            .map(|(name, entry)| MetricFamily {
                name: name.clone(),
                kind: entry.kind,
                help: entry.help.clone(),
                samples: entry
                    .series
                    .iter()
                    .map(|s| Sample {
                        name: name.clone(),
                        labels: s.labels.clone(),
                        value: s.value,
                        timestamp: taken_at,
                    })
                    .collect(),
            })
            .collect();
        Snapshot { taken_at, families }
    }
}

fn upsert(series: &mut Vec<Series>, labels: LabelSet, apply: impl FnOnce(&mut f64)) {
    match series.iter_mut().find(|s| s.labels == labels) {
        Some(s) => apply(&mut s.value),
        None => {
            let mut value = 0.0;
            apply(&mut value);
            series.push(Series { labels, value });
        }
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// One metric family within a snapshot.
#[derive(Debug, Clone)]
pub struct MetricFamily {
    pub name: String,
    pub kind: MetricKind,
    pub help: String,
    pub samples: Vec<Sample>,
}

/// Point-in-time view returned by [`Registry::snapshot`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Scrape instant, unix seconds.
    pub taken_at: f64,
    /// Families ordered by metric name.
    pub families: Vec<MetricFamily>,
}

impl Snapshot {
    /// Flat sample view: family order, then series insertion order.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.families.iter().flat_map(|f| f.samples.iter())
    }

    /// Current value of the unlabeled (first) series of `name`, if sampled.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.families
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.samples.first())
            .map(|s| s.value)
    }
}
