//! Labeled Slider Library
//!
//! A custom-drawn labeled range slider: value bubble, limit handling,
//! unit formatting and haptic feedback, with an egui adapter.

pub mod app;
pub mod persistence;
pub mod slider;
pub mod widgets;
