//! Value-change notification and limit haptics.

use std::time::Duration;

use super::style::StyleConfig;
use super::value_model::ValueModel;

/// Length of the pulse fired when the limit is reached.
pub const LIMIT_PULSE: Duration = Duration::from_millis(50);

/// Haptic feedback primitive supplied by the host.
pub trait Haptics {
    fn pulse(&mut self, duration: Duration);
}

/// Haptics for hosts without a vibration motor: records the pulse in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn pulse(&mut self, duration: Duration) {
        log::debug!("Haptic pulse: {} ms", duration.as_millis());
    }
}

/// Callback reporting changed values upstream.
pub type ValueChanged = Box<dyn FnMut(i32)>;

/// Outcome of one notification pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    pub value_changed: bool,
    pub pulsed: bool,
}

/// Tracks the last emitted value and bubble text between frames.
#[derive(Default)]
pub struct ChangeNotifier {
    on_value_changed: Option<ValueChanged>,
    /// Last emitted value; `None` until the first frame establishes it.
    last_value: Option<i32>,
    /// Whether the bubble currently shows the limit indicator.
    showing_limit: bool,
    bubble_text: String,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_value_changed(&mut self, callback: Option<ValueChanged>) {
        self.on_value_changed = callback;
    }

    /// Text for the bubble, as of the last update.
    pub fn bubble_text(&self) -> &str {
        &self.bubble_text
    }

    /// Run once per frame against the current model state.
    ///
    /// Skip values leave the bubble and the emitted value untouched. The
    /// callback never fires on the first frame, and the haptic pulse fires
    /// only on a transition into the limit.
    pub fn update(
        &mut self,
        model: &mut ValueModel,
        style: &StyleConfig,
        haptics: &mut dyn Haptics,
    ) -> Notification {
        let mut notification = Notification::default();
        let display = model.display_value();
        if model.is_skipped(display) && self.last_value.is_some() {
            return notification;
        }

        let established = self.last_value.is_some();
        let (value, text, at_limit) = match model.active_limit() {
            Some(limit) if model.is_at_limit() => (limit, style.format_limit(limit), true),
            _ => (display, style.format_value(display), false),
        };

        if at_limit && !self.showing_limit && established && style.vibrate_on_limit_reached {
            haptics.pulse(LIMIT_PULSE);
            notification.pulsed = true;
        }

        if established && self.last_value != Some(value) {
            log::debug!("Slider value changed: {:?} -> {}", self.last_value, value);
            if let Some(callback) = self.on_value_changed.as_mut() {
                callback(value);
            }
            notification.value_changed = true;
        }

        self.showing_limit = at_limit;
        self.last_value = Some(value);
        self.bubble_text = text;
        model.set_current_value(value);
        notification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::value_model::Limit;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingHaptics {
        pulses: Vec<Duration>,
    }

    impl Haptics for RecordingHaptics {
        fn pulse(&mut self, duration: Duration) {
            self.pulses.push(duration);
        }
    }

    fn recording_notifier() -> (ChangeNotifier, Rc<RefCell<Vec<i32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut notifier = ChangeNotifier::new();
        notifier.set_on_value_changed(Some(Box::new(move |v| sink.borrow_mut().push(v))));
        (notifier, seen)
    }

    #[test]
    fn test_first_frame_is_silent() {
        let (mut notifier, seen) = recording_notifier();
        let mut model = ValueModel::default();
        let mut haptics = RecordingHaptics::default();
        let n = notifier.update(&mut model, &StyleConfig::default(), &mut haptics);
        assert!(!n.value_changed);
        assert!(seen.borrow().is_empty());
        assert_eq!(notifier.bubble_text(), "50");
        assert_eq!(model.current_value(), 50);
    }

    #[test]
    fn test_fires_once_per_transition() {
        let (mut notifier, seen) = recording_notifier();
        let mut model = ValueModel::default();
        let style = StyleConfig::default();
        let mut haptics = RecordingHaptics::default();
        notifier.update(&mut model, &style, &mut haptics);
        model.set_raw_value(60);
        notifier.update(&mut model, &style, &mut haptics);
        notifier.update(&mut model, &style, &mut haptics);
        model.set_raw_value(61);
        notifier.update(&mut model, &style, &mut haptics);
        assert_eq!(*seen.borrow(), vec![60, 61]);
    }

    #[test]
    fn test_snapped_value_emitted() {
        let (mut notifier, seen) = recording_notifier();
        let mut model = ValueModel::default();
        model.set_sliding_interval(10).unwrap();
        let style = StyleConfig::default();
        let mut haptics = RecordingHaptics::default();
        notifier.update(&mut model, &style, &mut haptics);
        model.set_raw_value(47);
        notifier.update(&mut model, &style, &mut haptics);
        model.set_raw_value(49);
        notifier.update(&mut model, &style, &mut haptics);
        assert_eq!(*seen.borrow(), vec![40]);
        assert_eq!(model.current_value(), 40);
    }

    #[test]
    fn test_skipped_values_not_emitted() {
        let (mut notifier, seen) = recording_notifier();
        let mut model = ValueModel::new(1, 5).unwrap().with_default(1);
        model.set_values_to_skip([3, 4]);
        let style = StyleConfig::default();
        let mut haptics = RecordingHaptics::default();
        notifier.update(&mut model, &style, &mut haptics);
        for raw in [2, 3, 4, 5] {
            model.set_raw_value(raw);
            notifier.update(&mut model, &style, &mut haptics);
            if raw == 3 || raw == 4 {
                assert_eq!(notifier.bubble_text(), "2");
            }
        }
        assert_eq!(*seen.borrow(), vec![2, 5]);
    }

    #[test]
    fn test_limit_pulse_once() {
        let (mut notifier, seen) = recording_notifier();
        let mut model = ValueModel::default().with_limit(Limit::Value(80));
        let style = StyleConfig::default();
        let mut haptics = RecordingHaptics::default();
        notifier.update(&mut model, &style, &mut haptics);
        model.set_raw_value(80);
        let n = notifier.update(&mut model, &style, &mut haptics);
        assert!(n.pulsed);
        notifier.update(&mut model, &style, &mut haptics);
        notifier.update(&mut model, &style, &mut haptics);
        assert_eq!(haptics.pulses, vec![LIMIT_PULSE]);
        assert_eq!(notifier.bubble_text(), "Max 80");
        assert_eq!(*seen.borrow(), vec![80]);
    }

    #[test]
    fn test_limit_pulse_again_after_leaving() {
        let mut notifier = ChangeNotifier::new();
        let mut model = ValueModel::default().with_limit(Limit::Value(80));
        let style = StyleConfig::default();
        let mut haptics = RecordingHaptics::default();
        notifier.update(&mut model, &style, &mut haptics);
        for raw in [80, 70, 80] {
            model.set_raw_value(raw);
            notifier.update(&mut model, &style, &mut haptics);
        }
        assert_eq!(haptics.pulses.len(), 2);
    }

    #[test]
    fn test_no_pulse_when_vibration_disabled() {
        let mut notifier = ChangeNotifier::new();
        let mut model = ValueModel::default().with_limit(Limit::Value(80));
        let style = StyleConfig {
            vibrate_on_limit_reached: false,
            ..Default::default()
        };
        let mut haptics = RecordingHaptics::default();
        notifier.update(&mut model, &style, &mut haptics);
        model.set_raw_value(80);
        notifier.update(&mut model, &style, &mut haptics);
        assert!(haptics.pulses.is_empty());
        assert_eq!(notifier.bubble_text(), "Max 80");
    }

    #[test]
    fn test_no_pulse_when_starting_at_limit() {
        let mut notifier = ChangeNotifier::new();
        let mut model = ValueModel::default()
            .with_limit(Limit::Value(80))
            .with_default(80);
        let mut haptics = RecordingHaptics::default();
        notifier.update(&mut model, &StyleConfig::default(), &mut haptics);
        assert!(haptics.pulses.is_empty());
        assert_eq!(model.current_value(), 80);
    }
}
