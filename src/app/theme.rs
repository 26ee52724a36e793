//! Theme definitions for the slider demo
//!
//! Provides the slider's default palette and a light theme for the demo
//! window, matching the fintech look the slider was designed for.

use eframe::egui::{self, Color32, Rounding, Stroke, Vec2};

/// Default slider palette
pub use crate::slider::palette as slider;

/// Background colors
pub mod background {
    use super::Color32;

    /// Main window background
    pub const MAIN: Color32 = Color32::from_rgb(250, 250, 250);

    /// Card behind each slider
    pub const CARD: Color32 = Color32::WHITE;

    /// Card border
    pub const CARD_STROKE: Color32 = Color32::from_rgb(232, 232, 232);
}

/// Text colors
pub mod text {
    use super::Color32;

    /// Primary text
    pub const PRIMARY: Color32 = Color32::from_rgb(26, 26, 26);

    /// Secondary text
    pub const SECONDARY: Color32 = Color32::from_rgb(159, 167, 173);
}

/// UI accent colors
pub mod accent {
    use super::Color32;

    /// Primary accent, shared with the active track
    pub const PRIMARY: Color32 = super::slider::ACTIVE_TRACK;

    /// Error
    pub const ERROR: Color32 = Color32::from_rgb(239, 83, 80);
}

/// Rounding of the demo cards
pub const CARD_ROUNDING: Rounding = Rounding {
    nw: 8.0,
    ne: 8.0,
    sw: 8.0,
    se: 8.0,
};

/// Apply the light demo theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let visuals = &mut style.visuals;
    visuals.dark_mode = false;
    visuals.panel_fill = background::MAIN;
    visuals.window_fill = background::CARD;
    visuals.window_stroke = Stroke::new(1.0, background::CARD_STROKE);
    visuals.override_text_color = Some(text::PRIMARY);
    visuals.selection.bg_fill = accent::PRIMARY.gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent::PRIMARY);

    style.spacing.item_spacing = Vec2::new(8.0, 12.0);
    style.spacing.window_margin = egui::Margin::same(16.0);

    ctx.set_style(style);
}
