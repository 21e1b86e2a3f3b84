//! # rollcall-core
//!
//! Foundation crate for the Rollcall response validator.
//! Defines the result models, traits, errors, config, and constants
//! shared by the validation engine and its integrations.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RollcallConfig;
pub use errors::{RollcallError, RollcallResult};
pub use models::{IssueLevel, Mention, ValidationIssue, ValidationResult, ValidationSummary};
