pub mod defaults;

mod confidence_config;
mod extraction_config;
mod observability_config;
mod validation_config;

pub use confidence_config::ConfidenceConfig;
pub use extraction_config::ExtractionConfig;
pub use observability_config::ObservabilityConfig;
pub use validation_config::ValidationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::RollcallResult;

/// Top-level configuration, one section per subsystem.
///
/// Every section falls back to its defaults, so an empty TOML document
/// is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RollcallConfig {
    pub extraction: ExtractionConfig,
    pub validation: ValidationConfig,
    pub confidence: ConfidenceConfig,
    pub observability: ObservabilityConfig,
}

impl RollcallConfig {
    /// Parse a configuration from TOML, filling unset keys with defaults.
    pub fn from_toml(input: &str) -> RollcallResult<Self> {
        Ok(toml::from_str(input)?)
    }
}
