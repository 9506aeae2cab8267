#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use scorepulse_exporter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
exporter:
  listn: "0.0.0.0:8001" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.exporter.listen, "0.0.0.0:8001");
}

#[test]
fn reject_unsupported_version() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn request_timeout_in_range_accepted() {
    let ok = r#"
version: 1
exporter:
  request_timeout_ms: 5000
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.exporter.request_timeout_ms, 5000);
}

#[test]
fn default_request_timeout_applies() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.exporter.request_timeout_ms, 5000);
}

#[test]
fn reject_request_timeout_out_of_range() {
    for bad_ms in ["4999", "120001"] {
        let bad = format!(
            "version: 1\nexporter:\n  request_timeout_ms: {bad_ms}\n"
        );
        let err = config::load_from_str(&bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_REQUEST");
    }
}

#[test]
fn reject_bad_listen_address() {
    let bad = r#"
version: 1
exporter:
  listen: "not-an-address"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}
