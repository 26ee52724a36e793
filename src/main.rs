//! Labeled Slider - demo for the custom-drawn range slider
//!
//! Entry point for the application. Any paths given on the command line are
//! loaded as slider presets and shown below the built-in sliders.

use std::path::Path;

use eframe::egui;
use labeled_slider::app::DemoApp;
use labeled_slider::persistence;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presets: Vec<_> = std::env::args()
        .skip(1)
        .filter_map(|arg| match persistence::load_from_file(Path::new(&arg)) {
            Ok(preset) => Some(preset),
            Err(e) => {
                log::warn!("Failed to load preset {}: {}", arg, e);
                None
            }
        })
        .collect();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_title("Labeled Slider"),
        ..Default::default()
    };

    eframe::run_native(
        "Labeled Slider",
        options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(presets)))),
    )
}
