//! Pointer handling: maps drag positions to slider values.

use super::geometry::SliderGeometry;
use super::value_model::ValueModel;

/// Pointer events forwarded by the host toolkit, in widget-local x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(f32),
    Move(f32),
    Up(f32),
    Cancel,
}

/// Drag state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Turns pointer events into raw value updates.
///
/// Dragging starts on pointer-down anywhere along the control, not only on
/// the thumb. Moves while idle are ignored.
#[derive(Clone, Debug, Default)]
pub struct InputController {
    state: DragState,
    /// Visual x of the thumb from the last drag, if still valid.
    drag_x: Option<f32>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Cached visual x of the thumb, if a drag placed it.
    pub fn drag_x(&self) -> Option<f32> {
        self.drag_x
    }

    /// Forget the cached thumb position so it is re-derived from the value.
    pub fn reset_position(&mut self) {
        self.drag_x = None;
    }

    /// Thumb x for this frame: the drag position, or the value's position.
    pub fn thumb_x(&self, geometry: &SliderGeometry, model: &ValueModel) -> f32 {
        self.drag_x
            .unwrap_or_else(|| geometry.value_to_x(model.raw_value()))
    }

    /// Handle one pointer event. Returns whether it was consumed, which is
    /// also the signal that a redraw is needed.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        disabled: bool,
        geometry: &SliderGeometry,
        model: &mut ValueModel,
    ) -> bool {
        if disabled {
            self.state = DragState::Idle;
            return false;
        }
        match event {
            PointerEvent::Down(x) => {
                self.state = DragState::Dragging;
                self.slide_to(x, geometry, model);
                true
            }
            PointerEvent::Move(x) => {
                if !self.is_dragging() {
                    return false;
                }
                self.slide_to(x, geometry, model);
                true
            }
            PointerEvent::Up(x) => {
                if !self.is_dragging() {
                    return false;
                }
                self.slide_to(x, geometry, model);
                self.state = DragState::Idle;
                true
            }
            PointerEvent::Cancel => {
                let was_dragging = self.is_dragging();
                self.state = DragState::Idle;
                was_dragging
            }
        }
    }

    fn slide_to(&mut self, x: f32, geometry: &SliderGeometry, model: &mut ValueModel) {
        let (low, high) = geometry.drag_bounds();
        let x = x.clamp(low, high);
        let candidate = geometry.x_to_value(x);
        model.set_raw_value(model.clamp_to_limit(candidate));

        self.drag_x = match model.active_limit() {
            Some(limit) if candidate > limit => Some(geometry.value_to_x(limit)),
            _ => Some(x),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::geometry::SliderMetrics;
    use crate::slider::value_model::Limit;

    fn setup() -> (SliderGeometry, ValueModel) {
        // Sliding width of exactly 300 points.
        let geometry = SliderGeometry::new(SliderMetrics::default(), 312.0, 0, 100);
        (geometry, ValueModel::default())
    }

    #[test]
    fn test_down_starts_drag_anywhere() {
        let (g, mut model) = setup();
        let mut input = InputController::new();
        assert!(input.handle(PointerEvent::Down(30.0), false, &g, &mut model));
        assert!(input.is_dragging());
        assert_eq!(model.raw_value(), 10);
        assert_eq!(input.drag_x(), Some(30.0));
    }

    #[test]
    fn test_move_while_idle_ignored() {
        let (g, mut model) = setup();
        let mut input = InputController::new();
        assert!(!input.handle(PointerEvent::Move(30.0), false, &g, &mut model));
        assert_eq!(model.raw_value(), 50);
        assert_eq!(input.drag_x(), None);
    }

    #[test]
    fn test_up_applies_and_ends_drag() {
        let (g, mut model) = setup();
        let mut input = InputController::new();
        input.handle(PointerEvent::Down(30.0), false, &g, &mut model);
        assert!(input.handle(PointerEvent::Up(60.0), false, &g, &mut model));
        assert_eq!(model.raw_value(), 20);
        assert_eq!(input.state(), DragState::Idle);
    }

    #[test]
    fn test_cancel_ends_drag() {
        let (g, mut model) = setup();
        let mut input = InputController::new();
        input.handle(PointerEvent::Down(30.0), false, &g, &mut model);
        assert!(input.handle(PointerEvent::Cancel, false, &g, &mut model));
        assert!(!input.handle(PointerEvent::Cancel, false, &g, &mut model));
        assert_eq!(model.raw_value(), 10);
    }

    #[test]
    fn test_disabled_rejects_everything() {
        let (g, mut model) = setup();
        let mut input = InputController::new();
        assert!(!input.handle(PointerEvent::Down(30.0), true, &g, &mut model));
        assert!(!input.is_dragging());
        assert_eq!(model.raw_value(), 50);
    }

    #[test]
    fn test_drag_clamps_to_bounds() {
        let (g, mut model) = setup();
        let mut input = InputController::new();
        input.handle(PointerEvent::Down(-500.0), false, &g, &mut model);
        assert_eq!(model.raw_value(), 0);
        assert_eq!(input.drag_x(), Some(-12.0));
        input.handle(PointerEvent::Move(5000.0), false, &g, &mut model);
        assert_eq!(model.raw_value(), 100);
        assert_eq!(input.drag_x(), Some(300.0));
    }

    #[test]
    fn test_limit_pins_thumb() {
        let (g, mut model) = setup();
        model.set_limit(Limit::Value(80));
        let mut input = InputController::new();
        input.handle(PointerEvent::Down(285.0), false, &g, &mut model);
        assert_eq!(model.raw_value(), 80);
        assert_eq!(input.drag_x(), Some(g.value_to_x(80)));
    }

    #[test]
    fn test_limit_bypass_follows_pointer() {
        let (g, mut model) = setup();
        model.set_limit(Limit::Value(80));
        model.set_allow_limit_bypass(true);
        let mut input = InputController::new();
        input.handle(PointerEvent::Down(285.0), false, &g, &mut model);
        assert_eq!(model.raw_value(), 95);
        assert_eq!(input.drag_x(), Some(285.0));
    }

    #[test]
    fn test_thumb_x_falls_back_to_value() {
        let (g, model) = setup();
        let mut input = InputController::new();
        assert_eq!(input.thumb_x(&g, &model), 150.0);
        input.drag_x = Some(12.0);
        assert_eq!(input.thumb_x(&g, &model), 12.0);
        input.reset_position();
        assert_eq!(input.thumb_x(&g, &model), 150.0);
    }
}
