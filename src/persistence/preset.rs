//! Slider preset serialization.
//!
//! A preset is a named [`SliderConfig`] stored as JSON, so a slider can be
//! seeded from a file the same way a host would seed it from attributes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::slider::{SliderConfig, SliderError};

/// Current preset format version.
/// Increment this when making breaking changes to the format.
pub const PRESET_VERSION: u32 = 1;

/// A named slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderPreset {
    /// Human-readable name for the preset.
    pub name: String,
    /// Format version for future compatibility.
    pub version: u32,
    /// Attributes applied to the slider.
    pub config: SliderConfig,
}

impl SliderPreset {
    pub fn new(name: impl Into<String>, config: SliderConfig) -> Self {
        Self {
            name: name.into(),
            version: PRESET_VERSION,
            config,
        }
    }

    /// Check if this preset version is compatible with the current format.
    pub fn is_compatible(&self) -> bool {
        self.version <= PRESET_VERSION
    }
}

/// Save a preset to a JSON file.
pub fn save_to_file(preset: &SliderPreset, path: &Path) -> Result<(), SliderError> {
    let json = serde_json::to_string_pretty(preset)?;
    std::fs::write(path, json)?;
    log::debug!("Saved slider preset '{}' to {}", preset.name, path.display());
    Ok(())
}

/// Load a preset from a JSON file, rejecting newer format versions.
pub fn load_from_file(path: &Path) -> Result<SliderPreset, SliderError> {
    let json = std::fs::read_to_string(path)?;
    let preset: SliderPreset = serde_json::from_str(&json)?;

    if !preset.is_compatible() {
        return Err(SliderError::IncompatibleVersion {
            found: preset.version,
            expected: PRESET_VERSION,
        });
    }

    Ok(preset)
}
