//! Tracing setup — structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use rollcall_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV_VAR: &str = "ROLLCALL_LOG";

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// `ROLLCALL_LOG` takes precedence over `config.log_level`. Calling this more
/// than once is a no-op, and an already-installed global subscriber is left
/// in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(&config.log_level);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        let installed = if config.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if let Err(e) = installed {
            tracing::debug!(error = %e, "tracing subscriber already installed");
        }
    });
}

/// Filter from `ROLLCALL_LOG`, falling back to `level`, then to `info`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
