//! Demo application for the labeled slider
//!
//! Contains the DemoApp which implements eframe::App and shows a few
//! differently configured sliders, logging every value change.

use std::cell::Cell;
use std::rc::Rc;

use eframe::egui::{self, Align, Layout, RichText};

use super::theme;
use crate::persistence::SliderPreset;
use crate::slider::{SliderConfig, SliderError, UnitPosition};
use crate::widgets::LabeledSlider;

/// One slider shown in the demo, with the last value it reported.
struct DemoSlider {
    name: String,
    slider: LabeledSlider,
    last_value: Rc<Cell<Option<i32>>>,
}

impl DemoSlider {
    fn new(name: impl Into<String>, config: &SliderConfig) -> Result<Self, SliderError> {
        let name = name.into();
        let mut slider = LabeledSlider::from_config(config)?;
        let last_value = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_value);
        let log_name = name.clone();
        slider.state_mut().set_on_value_changed(move |value| {
            log::info!("{}: current slider value: {}", log_name, value);
            sink.set(Some(value));
        });
        Ok(Self {
            name,
            slider,
            last_value,
        })
    }
}

/// Main application state for the slider demo
pub struct DemoApp {
    sliders: Vec<DemoSlider>,

    /// Configuration errors to display in the status bar
    errors: Vec<String>,

    /// Whether theme has been applied
    theme_applied: bool,
}

impl DemoApp {
    /// Create the demo with the built-in sliders plus any loaded presets.
    pub fn new(presets: Vec<SliderPreset>) -> Self {
        let mut app = Self {
            sliders: Vec::new(),
            errors: Vec::new(),
            theme_applied: false,
        };

        for (name, config) in builtin_configs() {
            app.add_slider(name, &config);
        }
        for preset in presets {
            app.add_slider(preset.name.clone(), &preset.config);
        }

        app
    }

    fn add_slider(&mut self, name: impl Into<String>, config: &SliderConfig) {
        let name = name.into();
        match DemoSlider::new(name.clone(), config) {
            Ok(slider) => self.sliders.push(slider),
            Err(e) => {
                log::warn!("Skipping slider '{}': {}", name, e);
                self.errors.push(format!("{}: {}", name, e));
            }
        }
    }

    /// Draw every slider on its own card
    fn draw_sliders(&mut self, ui: &mut egui::Ui) {
        for demo in &mut self.sliders {
            egui::Frame::none()
                .fill(theme::background::CARD)
                .stroke(egui::Stroke::new(1.0, theme::background::CARD_STROKE))
                .rounding(theme::CARD_ROUNDING)
                .inner_margin(egui::Margin::same(16.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&demo.name).strong());
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let text = match demo.last_value.get() {
                                Some(v) => format!("last emitted: {}", v),
                                None => format!("current: {}", demo.slider.current_value()),
                            };
                            ui.label(RichText::new(text).color(theme::text::SECONDARY).small());
                        });
                    });
                    ui.add(&mut demo.slider);
                });
        }
    }

    /// Draw the bottom status bar
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            if self.errors.is_empty() {
                ui.label(RichText::new("Ready").color(theme::text::SECONDARY).small());
            } else {
                for error in &self.errors {
                    ui.label(RichText::new(format!("⚠ {}", error))
                        .color(theme::accent::ERROR)
                        .small());
                }
            }
        });
    }
}

impl Default for DemoApp {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Sliders showcasing limits, units, snapping, skip values and disabled state.
fn builtin_configs() -> Vec<(&'static str, SliderConfig)> {
    vec![
        (
            "Loan amount",
            SliderConfig {
                min_value: Some(100),
                max_value: Some(5000),
                default_value: Some(1500),
                limit_value: Some(4000),
                title: Some("Amount".to_string()),
                unit: Some("€".to_string()),
                sliding_interval: Some(50),
                ..Default::default()
            },
        ),
        (
            "Limit bypass",
            SliderConfig {
                limit_value: Some(80),
                allow_limit_value_bypass: Some(true),
                title: Some("Percentage".to_string()),
                unit: Some("%".to_string()),
                unit_position: Some(UnitPosition::Front),
                side_padding: Some(16.0),
                ..Default::default()
            },
        ),
        (
            "Skip values",
            SliderConfig {
                min_value: Some(1),
                max_value: Some(5),
                default_value: Some(1),
                values_to_skip: Some(vec![3, 4]),
                title: Some("Rating".to_string()),
                ..Default::default()
            },
        ),
        (
            "Disabled",
            SliderConfig {
                is_disabled: Some(true),
                title: Some("Locked".to_string()),
                ..Default::default()
            },
        ),
        (
            "Compact",
            SliderConfig {
                hide_bubble: Some(true),
                hide_range_indicators: Some(true),
                active_track_color: Some("#2E7D32".to_string()),
                ..Default::default()
            },
        ),
    ]
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme on first frame
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::none()
                .fill(theme::background::MAIN)
                .inner_margin(egui::Margin::symmetric(0.0, 4.0)))
            .show(ctx, |ui| {
                self.draw_status_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.draw_sliders(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_configs_are_valid() {
        let app = DemoApp::default();
        assert!(app.errors.is_empty());
        assert_eq!(app.sliders.len(), builtin_configs().len());
    }

    #[test]
    fn invalid_preset_is_reported() {
        let bad = SliderPreset::new(
            "Broken",
            SliderConfig {
                min_value: Some(10),
                max_value: Some(0),
                ..Default::default()
            },
        );
        let app = DemoApp::new(vec![bad]);
        assert_eq!(app.errors.len(), 1);
        assert!(app.errors[0].starts_with("Broken"));
    }
}
