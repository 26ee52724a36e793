//! Configuration surface: the attribute bag and single-option setters.

use egui::Color32;
use serde::{Deserialize, Serialize};

use super::error::SliderError;
use super::style::{parse_color, UnitPosition};
use super::value_model::Limit;

/// One configurable property of a slider.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderOption {
    MinValue(i32),
    MaxValue(i32),
    /// Both bounds at once.
    Range(i32, i32),
    DefaultValue(i32),
    Limit(Limit),
    LimitValueIndicator(String),
    AllowLimitBypass(bool),
    VibrateOnLimitReached(bool),
    Title(String),
    Unit(String),
    UnitPosition(UnitPosition),
    Disabled(bool),
    SlidingInterval(i32),
    ValuesToSkip(Vec<i32>),
    BubbleHidden(bool),
    RangeIndicationHidden(bool),
    ActiveTrackColor(Color32),
    InactiveTrackColor(Color32),
    ThumbColor(Color32),
    BubbleOutlineColor(Color32),
    BubbleTextColor(Color32),
    TitleTextColor(Color32),
    RangeTextColor(Color32),
    BubbleTextSize(f32),
    TitleTextSize(f32),
    RangeTextSize(f32),
    TrackHeight(f32),
    ThumbRadius(f32),
    SidePadding(f32),
}

impl SliderOption {
    /// Whether changing this option alters what is drawn.
    pub fn affects_drawing(&self) -> bool {
        !matches!(
            self,
            SliderOption::VibrateOnLimitReached(_)
                | SliderOption::SlidingInterval(_)
                | SliderOption::ValuesToSkip(_)
        )
    }
}

/// Serializable attribute bag. Absent fields leave the slider unchanged.
///
/// Colors are `#RRGGBB` or `#AARRGGBB` strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub default_value: Option<i32>,
    pub limit_value: Option<i32>,
    pub limit_value_indicator: Option<String>,
    pub allow_limit_value_bypass: Option<bool>,
    pub vibrate_on_limit_reached: Option<bool>,
    pub title: Option<String>,
    pub unit: Option<String>,
    pub unit_position: Option<UnitPosition>,
    pub is_disabled: Option<bool>,
    pub sliding_interval: Option<i32>,
    pub values_to_skip: Option<Vec<i32>>,
    pub hide_bubble: Option<bool>,
    pub hide_range_indicators: Option<bool>,
    pub active_track_color: Option<String>,
    pub inactive_track_color: Option<String>,
    pub thumb_slider_background_color: Option<String>,
    pub bubble_outline_color: Option<String>,
    pub bubble_value_text_color: Option<String>,
    pub title_text_color: Option<String>,
    pub range_value_text_color: Option<String>,
    pub bubble_value_text_size: Option<f32>,
    pub title_text_size: Option<f32>,
    pub range_value_text_size: Option<f32>,
    pub track_height: Option<f32>,
    pub thumb_slider_radius: Option<f32>,
    pub side_padding: Option<f32>,
}

impl SliderConfig {
    /// Check the fields that would leave the slider in an unusable state,
    /// given the bounds it currently has.
    pub fn validate(&self, current_min: i32, current_max: i32) -> Result<(), SliderError> {
        let min = self.min_value.unwrap_or(current_min);
        let max = self.max_value.unwrap_or(current_max);
        if min >= max {
            return Err(SliderError::InvalidRange { min, max });
        }
        if let Some(interval) = self.sliding_interval {
            if interval <= 0 {
                return Err(SliderError::InvalidSlidingInterval(interval));
            }
        }
        Ok(())
    }

    /// Convert into options, in the order they should be applied.
    ///
    /// The range comes first so that default and limit clamp against the new
    /// bounds.
    pub fn to_options(&self) -> Result<Vec<SliderOption>, SliderError> {
        let mut options = Vec::new();

        match (self.min_value, self.max_value) {
            (Some(min), Some(max)) => options.push(SliderOption::Range(min, max)),
            (Some(min), None) => options.push(SliderOption::MinValue(min)),
            (None, Some(max)) => options.push(SliderOption::MaxValue(max)),
            (None, None) => {}
        }
        if let Some(v) = self.sliding_interval {
            options.push(SliderOption::SlidingInterval(v));
        }
        if let Some(v) = self.allow_limit_value_bypass {
            options.push(SliderOption::AllowLimitBypass(v));
        }
        if let Some(v) = self.limit_value {
            options.push(SliderOption::Limit(Limit::Value(v)));
        }
        if let Some(v) = self.default_value {
            options.push(SliderOption::DefaultValue(v));
        }
        if let Some(v) = &self.values_to_skip {
            options.push(SliderOption::ValuesToSkip(v.clone()));
        }
        if let Some(v) = self.vibrate_on_limit_reached {
            options.push(SliderOption::VibrateOnLimitReached(v));
        }
        if let Some(v) = &self.limit_value_indicator {
            options.push(SliderOption::LimitValueIndicator(v.clone()));
        }
        if let Some(v) = &self.title {
            options.push(SliderOption::Title(v.clone()));
        }
        if let Some(v) = &self.unit {
            options.push(SliderOption::Unit(v.clone()));
        }
        if let Some(v) = self.unit_position {
            options.push(SliderOption::UnitPosition(v));
        }
        if let Some(v) = self.is_disabled {
            options.push(SliderOption::Disabled(v));
        }
        if let Some(v) = self.hide_bubble {
            options.push(SliderOption::BubbleHidden(v));
        }
        if let Some(v) = self.hide_range_indicators {
            options.push(SliderOption::RangeIndicationHidden(v));
        }

        let colors: [(&Option<String>, fn(Color32) -> SliderOption); 7] = [
            (&self.active_track_color, SliderOption::ActiveTrackColor),
            (&self.inactive_track_color, SliderOption::InactiveTrackColor),
            (&self.thumb_slider_background_color, SliderOption::ThumbColor),
            (&self.bubble_outline_color, SliderOption::BubbleOutlineColor),
            (&self.bubble_value_text_color, SliderOption::BubbleTextColor),
            (&self.title_text_color, SliderOption::TitleTextColor),
            (&self.range_value_text_color, SliderOption::RangeTextColor),
        ];
        for (text, option) in colors {
            if let Some(text) = text {
                options.push(option(parse_color(text)?));
            }
        }

        let sizes: [(Option<f32>, fn(f32) -> SliderOption); 6] = [
            (self.bubble_value_text_size, SliderOption::BubbleTextSize),
            (self.title_text_size, SliderOption::TitleTextSize),
            (self.range_value_text_size, SliderOption::RangeTextSize),
            (self.track_height, SliderOption::TrackHeight),
            (self.thumb_slider_radius, SliderOption::ThumbRadius),
            (self.side_padding, SliderOption::SidePadding),
        ];
        for (size, option) in sizes {
            if let Some(size) = size {
                options.push(option(size));
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_has_no_options() {
        let config = SliderConfig::default();
        assert!(config.to_options().unwrap().is_empty());
        assert!(config.validate(0, 100).is_ok());
    }

    #[test]
    fn test_range_comes_first() {
        let config = SliderConfig {
            default_value: Some(30),
            max_value: Some(500),
            min_value: Some(200),
            ..Default::default()
        };
        let options = config.to_options().unwrap();
        assert_eq!(options[0], SliderOption::Range(200, 500));
        assert_eq!(options[1], SliderOption::DefaultValue(30));
    }

    #[test]
    fn test_validate_uses_current_bounds() {
        let config = SliderConfig {
            min_value: Some(100),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(0, 100),
            Err(SliderError::InvalidRange { min: 100, max: 100 })
        ));
        assert!(config.validate(0, 200).is_ok());
    }

    #[test]
    fn test_validate_interval() {
        let config = SliderConfig {
            sliding_interval: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(0, 100),
            Err(SliderError::InvalidSlidingInterval(0))
        ));
    }

    #[test]
    fn test_bad_color_rejected() {
        let config = SliderConfig {
            active_track_color: Some("red".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.to_options(), Err(SliderError::InvalidColor(_))));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let json = r#"{ "min_value": 0, "max_value": 1000, "unit": "€", "unit_position": "FRONT" }"#;
        let config: SliderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_value, Some(1000));
        assert_eq!(config.unit_position, Some(UnitPosition::Front));
        assert_eq!(config.title, None);
    }

    #[test]
    fn test_non_drawing_options() {
        assert!(!SliderOption::SlidingInterval(5).affects_drawing());
        assert!(SliderOption::Title("x".into()).affects_drawing());
        assert!(SliderOption::AllowLimitBypass(false).affects_drawing());
    }
}
