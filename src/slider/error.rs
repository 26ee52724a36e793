//! Error type for slider configuration and preset I/O.

use thiserror::Error;

/// Errors raised while configuring a slider or loading a preset.
///
/// Geometry and input handling never fail; only configuration entry points
/// return these.
#[derive(Debug, Error)]
pub enum SliderError {
    /// The value range is empty or inverted.
    #[error("Invalid value range: min {min} must be less than max {max}")]
    InvalidRange { min: i32, max: i32 },
    /// Sliding interval must be strictly positive.
    #[error("Invalid sliding interval {0}: must be greater than zero")]
    InvalidSlidingInterval(i32),
    /// A color string could not be parsed.
    #[error("Invalid color '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
    /// File I/O error.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// Preset written by a newer format version.
    #[error("Incompatible preset version: found {found}, expected <= {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },
}
