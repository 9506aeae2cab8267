//! scorepulse exporter library entry.
//!
//! This crate wires the config, shared state, pipeline hook, and HTTP
//! handlers into the exporter process. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod hook;
pub mod ops;
pub mod router;
