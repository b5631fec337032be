//! Error types for brawl-core.
//!
//! The simulation has no recoverable failures: health, positions and timers are
//! clamped and invalid transitions are silent no-ops. The only fallible surface
//! is configuration, which is checked once before a session starts.

/// A tuning value that would break a simulation invariant.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive, finite duration (got {value})")]
    NonPositiveDuration { field: &'static str, value: f32 },

    #[error("{field} must lie in its allowed range (got {value})")]
    FactorOutOfRange { field: &'static str, value: f32 },

    #[error("{field} has an empty or inverted range [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("level requests up to {requested} platforms but at most {limit} are supported")]
    TooManyPlatforms { requested: usize, limit: usize },
}

impl ConfigError {
    /// Name of the offending config field, for diagnostics.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveDuration { field, .. }
            | Self::FactorOutOfRange { field, .. }
            | Self::InvalidRange { field, .. } => field,
            Self::TooManyPlatforms { .. } => "level.max_platforms",
        }
    }
}
