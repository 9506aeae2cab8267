//! Prometheus text exposition encoding (version 0.0.4).
//!
//! Serialization is total over a well-formed snapshot: there is no error
//! path, and an empty registry renders as an empty body.

use std::fmt::Write;

use crate::metric::Sample;
use crate::registry::Snapshot;

/// Content type for `/metrics` responses.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Escape a label value per the exposition grammar.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Escape `# HELP` text: backslash and newline only, quotes stay literal.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format a sample value. Integral floats drop the fraction (`1`, not `1.0`);
/// non-finite values use the spellings the grammar expects.
fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "+Inf" } else { "-Inf" }.to_string()
    } else {
        // `Display` for f64 already prints 1.0 as "1" and 42.5 as "42.5".
        format!("{v}")
    }
}

fn render_sample(sample: &Sample, out: &mut String) {
    if sample.labels.is_empty() {
        let _ = writeln!(out, "{} {}", sample.name, fmt_value(sample.value));
        return;
    }
    let label_str = sample
        .labels
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",");
    let _ = writeln!(out, "{}{{{}}} {}", sample.name, label_str, fmt_value(sample.value));
}

/// Render a snapshot in exposition format: `# HELP`, `# TYPE`, then one line
/// per sample, families already ordered by name.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for family in &snapshot.families {
        let _ = writeln!(out, "# HELP {} {}", family.name, escape_help(&family.help));
        let _ = writeln!(out, "# TYPE {} {}", family.name, family.kind);
        for sample in &family.samples {
            render_sample(sample, &mut out);
        }
    }
    out
}
