//! scorepulse exporter binary.
//!
//! Serves the pull side of the monitoring stack:
//! - /metrics for the external collector (15s poll by default, collector-side)
//! - /status and /ml-metrics for humans and scripts
//! - /healthz for liveness probes
//!
//! The monitored pipeline records through `AppState::hook()`; values reset on
//! restart, durable history belongs to the collector.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use scorepulse_exporter::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("scorepulse.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .exporter
        .listen
        .parse()
        .expect("exporter.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("metric registration failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "scorepulse-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
