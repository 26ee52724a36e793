//! Widgets module
//!
//! egui adapters for the toolkit-independent controls in [`crate::slider`].

pub mod labeled_slider;

pub use labeled_slider::{EguiMeasurer, LabeledSlider};
