//! Top-level facade crate for scorepulse.
//!
//! Re-exports the core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use scorepulse_core::*;
}

pub mod exporter {
    pub use scorepulse_exporter::*;
}
