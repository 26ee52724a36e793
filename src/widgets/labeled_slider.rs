//! Labeled range slider widget for egui.
//!
//! Thin adapter over [`SliderState`]: measures text with egui's fonts,
//! forwards pointer presses as drag events, and paints the draw commands
//! produced by the slider renderer.

use egui::{self, Align2, Color32, FontId, Rect, Response, Sense, Shape, Ui, Vec2};

use crate::slider::{
    DrawCommand, Haptics, LogHaptics, PointerEvent, SliderConfig, SliderError, SliderState,
    TextMeasurer,
};

/// Measures single-line text with the context's fonts.
pub struct EguiMeasurer<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiMeasurer<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl TextMeasurer for EguiMeasurer<'_> {
    fn measure(&self, text: &str, font: &FontId) -> Vec2 {
        self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), font.clone(), Color32::PLACEHOLDER)
                .size()
        })
    }
}

/// A labeled slider that keeps its state across frames.
///
/// # Example
/// ```ignore
/// let mut slider = LabeledSlider::from_config(&SliderConfig {
///     title: Some("Amount".into()),
///     unit: Some("€".into()),
///     ..Default::default()
/// })?;
/// slider.state_mut().set_on_value_changed(|v| log::info!("value: {}", v));
/// ui.add(&mut slider);
/// ```
pub struct LabeledSlider {
    state: SliderState,
    haptics: Box<dyn Haptics>,
}

impl LabeledSlider {
    pub fn new(state: SliderState) -> Self {
        Self {
            state,
            haptics: Box::new(LogHaptics),
        }
    }

    /// Build a slider from an attribute bag.
    pub fn from_config(config: &SliderConfig) -> Result<Self, SliderError> {
        Ok(Self::new(SliderState::from_config(config)?))
    }

    /// Use a host haptic primitive instead of logging pulses.
    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SliderState {
        &mut self.state
    }

    pub fn current_value(&self) -> i32 {
        self.state.current_value()
    }

    /// Lay out, handle input and paint the slider.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let width = ui.available_width();
        let sense = if self.state.is_disabled() {
            Sense::hover()
        } else {
            Sense::click_and_drag()
        };
        let (rect, mut response) = ui.allocate_exact_size(self.state.desired_size(width), sense);

        if let Some(event) = self.pointer_event(ui, &response, rect) {
            self.state.handle_pointer(event, rect.width());
        }

        let ctx = ui.ctx().clone();
        let measurer = EguiMeasurer::new(&ctx);
        let output = self
            .state
            .frame(rect.width(), &measurer, self.haptics.as_mut());
        if output.notification.value_changed {
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            paint(ui.painter(), rect, output.commands);
        }

        response
    }

    /// Translate this frame's pointer state into a drag event.
    fn pointer_event(&self, ui: &Ui, response: &Response, rect: Rect) -> Option<PointerEvent> {
        let pointer_x = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.latest_pos()))
            .map(|pos| pos.x - rect.left());
        let pressed = response.is_pointer_button_down_on();
        let dragging = self.state.input().is_dragging();

        match (pressed, dragging, pointer_x) {
            (true, false, Some(x)) => Some(PointerEvent::Down(x)),
            (true, true, Some(x)) => Some(PointerEvent::Move(x)),
            (false, true, Some(x)) => Some(PointerEvent::Up(x)),
            (_, true, None) => Some(PointerEvent::Cancel),
            _ => None,
        }
    }
}

impl egui::Widget for &mut LabeledSlider {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

/// Paint widget-local draw commands into `rect`.
fn paint(painter: &egui::Painter, rect: Rect, commands: Vec<DrawCommand>) {
    let offset = rect.min.to_vec2();
    for command in commands {
        match command {
            DrawCommand::Text {
                pos,
                text,
                font,
                color,
            } => {
                painter.text(pos + offset, Align2::LEFT_TOP, text, font, color);
            }
            DrawCommand::Outline { points, stroke } => {
                let points = points.into_iter().map(|p| p + offset).collect();
                painter.add(Shape::closed_line(points, stroke));
            }
            DrawCommand::RoundedRect {
                rect: r,
                rounding,
                fill,
            } => {
                painter.rect_filled(r.translate(offset), rounding, fill);
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => {
                painter.circle_filled(center + offset, radius, fill);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::Limit;

    #[test]
    fn test_from_config() {
        let config = SliderConfig {
            min_value: Some(0),
            max_value: Some(1000),
            default_value: Some(250),
            ..Default::default()
        };
        let slider = LabeledSlider::from_config(&config).unwrap();
        assert_eq!(slider.state().model().raw_value(), 250);
    }

    #[test]
    fn test_from_bad_config() {
        let config = SliderConfig {
            min_value: Some(5),
            max_value: Some(1),
            ..Default::default()
        };
        assert!(LabeledSlider::from_config(&config).is_err());
    }

    #[test]
    fn test_egui_measurer_measures_text() {
        let ctx = egui::Context::default();
        let measurer = EguiMeasurer::new(&ctx);
        let font = FontId::proportional(14.0);
        let _ = ctx.run(Default::default(), |_| {});
        let short = measurer.measure("1", &font);
        let long = measurer.measure("1000000", &font);
        assert!(long.x > short.x);
        assert!(short.y > 0.0);
    }

    #[test]
    fn test_show_in_headless_context() {
        let ctx = egui::Context::default();
        let mut slider = LabeledSlider::new(SliderState::default());
        slider
            .state_mut()
            .set_option(crate::slider::SliderOption::Limit(Limit::Value(80)))
            .unwrap();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.add(&mut slider);
                assert!(response.rect.height() > 0.0);
            });
        });
        assert_eq!(slider.current_value(), 50);
        assert_eq!(slider.state().bubble_text(), "50");
    }
}
