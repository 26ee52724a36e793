//! Visual style of the labeled slider: colors, fonts, labels and toggles.

use egui::{Color32, FontFamily, FontId};
use serde::{Deserialize, Serialize};

use super::error::SliderError;
use super::palette;

/// Where the unit string goes relative to the number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitPosition {
    /// `"12%"`: unit written directly after the number.
    Front,
    /// `"12 kg"`: unit separated by a space.
    #[default]
    Back,
}

impl UnitPosition {
    /// Format `value` with `unit` according to this position.
    pub fn format(self, value: i32, unit: &str) -> String {
        if unit.is_empty() {
            return value.to_string();
        }
        match self {
            UnitPosition::Front => format!("{}{}", value, unit),
            UnitPosition::Back => format!("{} {}", value, unit),
        }
    }
}

/// Colors, fonts and label text for one slider.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    pub active_track_color: Color32,
    pub inactive_track_color: Color32,
    pub thumb_color: Color32,
    pub thumb_shadow_color: Color32,
    pub bubble_outline_color: Color32,
    pub bubble_text_color: Color32,
    pub title_text_color: Color32,
    pub range_text_color: Color32,
    pub bubble_font: FontId,
    pub title_font: FontId,
    pub range_font: FontId,
    /// Title drawn between the bubble and the track.
    pub title: String,
    /// Unit appended to every displayed number.
    pub unit: String,
    pub unit_position: UnitPosition,
    /// Prefix shown in the bubble while the limit is reached.
    pub limit_value_indicator: String,
    pub bubble_hidden: bool,
    pub range_indication_hidden: bool,
    /// Rejects input and renders in grayscale.
    pub disabled: bool,
    pub vibrate_on_limit_reached: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            active_track_color: palette::ACTIVE_TRACK,
            inactive_track_color: palette::INACTIVE_TRACK,
            thumb_color: palette::THUMB,
            thumb_shadow_color: palette::THUMB_SHADOW,
            bubble_outline_color: palette::BUBBLE_OUTLINE,
            bubble_text_color: palette::BUBBLE_TEXT,
            title_text_color: palette::LABEL_TEXT,
            range_text_color: palette::LABEL_TEXT,
            bubble_font: FontId::new(14.0, FontFamily::Proportional),
            title_font: FontId::new(12.0, FontFamily::Proportional),
            range_font: FontId::new(12.0, FontFamily::Proportional),
            title: String::new(),
            unit: String::new(),
            unit_position: UnitPosition::Back,
            limit_value_indicator: "Max".to_string(),
            bubble_hidden: false,
            range_indication_hidden: false,
            disabled: false,
            vibrate_on_limit_reached: true,
        }
    }
}

impl StyleConfig {
    /// Format a value with this style's unit.
    pub fn format_value(&self, value: i32) -> String {
        self.unit_position.format(value, &self.unit)
    }

    /// Bubble text shown while the limit is reached.
    pub fn format_limit(&self, limit: i32) -> String {
        format!("{} {}", self.limit_value_indicator, self.format_value(limit))
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the unit and its position.
    pub fn with_unit(mut self, unit: impl Into<String>, position: UnitPosition) -> Self {
        self.unit = unit.into();
        self.unit_position = position;
        self
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB` into a color.
pub fn parse_color(text: &str) -> Result<Color32, SliderError> {
    let invalid = || SliderError::InvalidColor(text.to_string());
    let hex = text.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Color32::from_rgba_unmultiplied(
            byte(2)?,
            byte(4)?,
            byte(6)?,
            byte(0)?,
        )),
        _ => Err(invalid()),
    }
}
