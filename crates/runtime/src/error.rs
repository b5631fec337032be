//! Error types surfaced by the runtime API.
//!
//! A running session never fails; only building one can.

use brawl_core::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid game config")]
    InvalidConfig(#[from] ConfigError),

    #[error("{field} must be positive and finite (got {value})")]
    InvalidSetting { field: &'static str, value: f32 },

    #[error("environment variable {var} has unparsable value {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("failed to load tuning from {path}")]
    Content {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}
