//! Toolkit-independent slider: value model, style, input and notification
//! wired together behind one configuration and per-frame entry point.

use egui::Vec2;

use super::config::{SliderConfig, SliderOption};
use super::error::SliderError;
use super::geometry::{SliderGeometry, SliderMetrics};
use super::input::{InputController, PointerEvent};
use super::notifier::{ChangeNotifier, Haptics, Notification, ValueChanged};
use super::render::{render, DrawCommand, RenderFrame, TextMeasurer};
use super::style::StyleConfig;
use super::value_model::ValueModel;

/// A complete labeled slider, minus the host toolkit.
#[derive(Default)]
pub struct SliderState {
    model: ValueModel,
    style: StyleConfig,
    metrics: SliderMetrics,
    input: InputController,
    notifier: ChangeNotifier,
}

/// Result of drawing one frame.
#[derive(Debug)]
pub struct FrameOutput {
    pub commands: Vec<DrawCommand>,
    pub notification: Notification,
}

impl SliderState {
    pub fn new(model: ValueModel) -> Self {
        Self {
            model,
            ..Default::default()
        }
    }

    /// Build a slider from an attribute bag on top of the defaults.
    pub fn from_config(config: &SliderConfig) -> Result<Self, SliderError> {
        let mut state = Self::default();
        state.apply_config(config)?;
        Ok(state)
    }

    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn metrics(&self) -> &SliderMetrics {
        &self.metrics
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Last value reported through the value-changed callback.
    pub fn current_value(&self) -> i32 {
        self.model.current_value()
    }

    pub fn is_disabled(&self) -> bool {
        self.style.disabled
    }

    /// Text currently shown in the bubble.
    pub fn bubble_text(&self) -> &str {
        self.notifier.bubble_text()
    }

    pub fn set_on_value_changed(&mut self, callback: impl FnMut(i32) + 'static) {
        let callback: ValueChanged = Box::new(callback);
        self.notifier.set_on_value_changed(Some(callback));
    }

    pub fn clear_on_value_changed(&mut self) {
        self.notifier.set_on_value_changed(None);
    }

    /// Replace the style wholesale.
    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    pub fn set_metrics(&mut self, metrics: SliderMetrics) {
        self.metrics = metrics;
        self.input.reset_position();
    }

    /// Apply a single option. Returns whether a redraw is needed.
    pub fn set_option(&mut self, option: SliderOption) -> Result<bool, SliderError> {
        let redraw = option.affects_drawing();
        match option {
            SliderOption::MinValue(v) => {
                if self.model.set_min(v)? {
                    self.input.reset_position();
                }
            }
            SliderOption::MaxValue(v) => {
                if self.model.set_max(v)? {
                    self.input.reset_position();
                }
            }
            SliderOption::Range(min, max) => {
                if self.model.set_range(min, max)? {
                    self.input.reset_position();
                }
            }
            SliderOption::DefaultValue(v) => {
                self.model.set_default(v);
                self.input.reset_position();
            }
            SliderOption::Limit(limit) => {
                if self.model.limit() != limit {
                    self.input.reset_position();
                }
                self.model.set_limit(limit);
            }
            SliderOption::LimitValueIndicator(v) => self.style.limit_value_indicator = v,
            SliderOption::AllowLimitBypass(v) => {
                if self.model.set_allow_limit_bypass(v) {
                    self.input.reset_position();
                }
            }
            SliderOption::VibrateOnLimitReached(v) => self.style.vibrate_on_limit_reached = v,
            SliderOption::Title(v) => self.style.title = v,
            SliderOption::Unit(v) => self.style.unit = v,
            SliderOption::UnitPosition(v) => self.style.unit_position = v,
            SliderOption::Disabled(v) => self.style.disabled = v,
            SliderOption::SlidingInterval(v) => self.model.set_sliding_interval(v)?,
            SliderOption::ValuesToSkip(v) => self.model.set_values_to_skip(v),
            SliderOption::BubbleHidden(v) => self.style.bubble_hidden = v,
            SliderOption::RangeIndicationHidden(v) => self.style.range_indication_hidden = v,
            SliderOption::ActiveTrackColor(c) => self.style.active_track_color = c,
            SliderOption::InactiveTrackColor(c) => self.style.inactive_track_color = c,
            SliderOption::ThumbColor(c) => self.style.thumb_color = c,
            SliderOption::BubbleOutlineColor(c) => self.style.bubble_outline_color = c,
            SliderOption::BubbleTextColor(c) => self.style.bubble_text_color = c,
            SliderOption::TitleTextColor(c) => self.style.title_text_color = c,
            SliderOption::RangeTextColor(c) => self.style.range_text_color = c,
            SliderOption::BubbleTextSize(s) => self.style.bubble_font.size = s,
            SliderOption::TitleTextSize(s) => self.style.title_font.size = s,
            SliderOption::RangeTextSize(s) => self.style.range_font.size = s,
            SliderOption::TrackHeight(h) => self.metrics.track_height = h,
            SliderOption::ThumbRadius(r) => {
                self.metrics.thumb_radius = r;
                self.input.reset_position();
            }
            SliderOption::SidePadding(p) => {
                self.metrics.side_padding = p;
                self.input.reset_position();
            }
        }
        Ok(redraw)
    }

    /// Apply every field present in `config`. The config is validated first,
    /// so a rejected config leaves the slider untouched.
    pub fn apply_config(&mut self, config: &SliderConfig) -> Result<bool, SliderError> {
        config.validate(self.model.min_value(), self.model.max_value())?;
        let options = config.to_options()?;
        let mut redraw = false;
        for option in options {
            redraw |= self.set_option(option)?;
        }
        Ok(redraw)
    }

    /// Height the slider wants when the host does not impose one.
    pub fn desired_height(&self) -> f32 {
        self.metrics
            .desired_height(self.style.bubble_hidden, self.style.range_indication_hidden)
    }

    /// Geometry for a widget `width` points wide.
    pub fn geometry(&self, width: f32, measurer: &dyn TextMeasurer) -> SliderGeometry {
        let title_height = if self.style.title.is_empty() {
            0.0
        } else {
            measurer.measure(&self.style.title, &self.style.title_font).y
        };
        SliderGeometry::new(
            self.metrics,
            width,
            self.model.min_value(),
            self.model.max_value(),
        )
        .with_title_height(title_height)
        .with_compact(self.style.bubble_hidden && self.style.range_indication_hidden)
    }

    /// Forward a pointer event. Returns whether it was handled.
    pub fn handle_pointer(&mut self, event: PointerEvent, width: f32) -> bool {
        let geometry = SliderGeometry::new(
            self.metrics,
            width,
            self.model.min_value(),
            self.model.max_value(),
        );
        self.input
            .handle(event, self.style.disabled, &geometry, &mut self.model)
    }

    /// Run notification for the current value and produce the draw commands.
    pub fn frame(
        &mut self,
        width: f32,
        measurer: &dyn TextMeasurer,
        haptics: &mut dyn Haptics,
    ) -> FrameOutput {
        let notification = self.notifier.update(&mut self.model, &self.style, haptics);
        let geometry = self.geometry(width, measurer);
        let frame = RenderFrame {
            geometry: &geometry,
            model: &self.model,
            style: &self.style,
            bubble_text: self.notifier.bubble_text(),
            thumb_x: self.input.thumb_x(&geometry, &self.model),
        };
        FrameOutput {
            commands: render(&frame, measurer),
            notification,
        }
    }

    /// Size the slider asks for at a given width.
    pub fn desired_size(&self, width: f32) -> Vec2 {
        Vec2::new(width, self.desired_height())
    }
}
