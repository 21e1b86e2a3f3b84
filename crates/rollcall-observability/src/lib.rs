//! # rollcall-observability
//!
//! Tracing subscriber setup, span macros for validation runs, and an
//! in-memory aggregate of validation outcomes.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::ValidationMetrics;
pub use tracing_setup::init_tracing;
