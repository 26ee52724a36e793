//! Persistence module
//!
//! Slider preset save/load functionality using serde and JSON.

pub mod preset;

pub use preset::{load_from_file, save_to_file, SliderPreset, PRESET_VERSION};
