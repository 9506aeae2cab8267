//! Exposition format tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use scorepulse_core::exposition;
use scorepulse_core::metric::MetricKind;
use scorepulse_core::registry::Registry;

#[test]
fn empty_registry_renders_empty_body() {
    let reg = Registry::new();
    assert_eq!(exposition::render(&reg.snapshot()), "");
}

#[test]
fn gauge_with_help_and_type_headers() {
    let reg = Registry::new();
    reg.register("pipeline_success", MetricKind::Gauge, "1 when the last run completed")
        .unwrap();
    reg.register("pipeline_duration_seconds", MetricKind::Gauge, "last run duration")
        .unwrap();
    reg.set("pipeline_success", &[], 1.0).unwrap();
    reg.set("pipeline_duration_seconds", &[], 42.5).unwrap();

    let body = exposition::render(&reg.snapshot());
    assert!(body.contains("# HELP pipeline_success 1 when the last run completed\n"));
    assert!(body.contains("# TYPE pipeline_success gauge\n"));

    // Exactly one sample line per metric, integral floats without fraction.
    let success_lines: Vec<&str> =
        body.lines().filter(|l| *l == "pipeline_success 1").collect();
    assert_eq!(success_lines.len(), 1);
    let duration_lines: Vec<&str> = body
        .lines()
        .filter(|l| *l == "pipeline_duration_seconds 42.5")
        .collect();
    assert_eq!(duration_lines.len(), 1);
}

#[test]
fn counter_type_line() {
    let reg = Registry::new();
    reg.register("pipeline_runs_total", MetricKind::Counter, "total runs").unwrap();
    reg.increment("pipeline_runs_total", &[], 2.0).unwrap();

    let body = exposition::render(&reg.snapshot());
    assert!(body.contains("# TYPE pipeline_runs_total counter\n"));
    assert!(body.contains("pipeline_runs_total 2\n"));
}

#[test]
fn labels_are_rendered_and_escaped() {
    let reg = Registry::new();
    reg.register("stage_duration_seconds", MetricKind::Gauge, "per stage").unwrap();
    reg.set("stage_duration_seconds", &[("stage", "inge\"st\\ion")], 1.5).unwrap();

    let body = exposition::render(&reg.snapshot());
    assert!(body.contains(r#"stage_duration_seconds{stage="inge\"st\\ion"} 1.5"#));
}

#[test]
fn help_text_is_escaped() {
    let reg = Registry::new();
    reg.register("g", MetricKind::Gauge, "line one\nline \\ two").unwrap();

    let body = exposition::render(&reg.snapshot());
    assert!(body.contains("# HELP g line one\\nline \\\\ two\n"));
    // The newline must not split the help comment into a bogus line.
    assert_eq!(body.lines().filter(|l| !l.starts_with('#')).count(), 0);
}

#[test]
fn registered_but_never_set_renders_headers_only() {
    let reg = Registry::new();
    reg.register("model_r2_score", MetricKind::Gauge, "r2").unwrap();

    let body = exposition::render(&reg.snapshot());
    assert!(body.contains("# TYPE model_r2_score gauge\n"));
    assert!(!body.lines().any(|l| l.starts_with("model_r2_score ")));
}

#[test]
fn non_finite_values_use_grammar_spellings() {
    let reg = Registry::new();
    reg.register("g", MetricKind::Gauge, "g").unwrap();
    reg.set("g", &[], f64::INFINITY).unwrap();
    assert!(exposition::render(&reg.snapshot()).contains("g +Inf\n"));

    reg.set("g", &[], f64::NEG_INFINITY).unwrap();
    assert!(exposition::render(&reg.snapshot()).contains("g -Inf\n"));
}

#[test]
fn families_render_in_name_order() {
    let reg = Registry::new();
    for (name, kind, help) in scorepulse_core::contract::ALL {
        reg.register(name, *kind, help).unwrap();
    }

    let body = exposition::render(&reg.snapshot());
    let type_lines: Vec<&str> = body
        .lines()
        .filter(|l| l.starts_with("# TYPE "))
        .collect();
    let mut sorted = type_lines.clone();
    sorted.sort();
    assert_eq!(type_lines, sorted);
}
