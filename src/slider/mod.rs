//! Labeled slider core
//!
//! Toolkit-independent value model, geometry, input handling, rendering and
//! change notification for the labeled range slider. The egui adapter lives
//! in [`crate::widgets::labeled_slider`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod notifier;
pub mod palette;
pub mod render;
pub mod state;
pub mod style;
pub mod value_model;

pub use config::{SliderConfig, SliderOption};
pub use error::SliderError;
pub use geometry::{BubblePath, SliderGeometry, SliderMetrics};
pub use input::{DragState, InputController, PointerEvent};
pub use notifier::{ChangeNotifier, Haptics, LogHaptics, Notification, LIMIT_PULSE};
pub use render::{grayscale, render, DrawCommand, RenderFrame, TextMeasurer};
pub use state::{FrameOutput, SliderState};
pub use style::{parse_color, StyleConfig, UnitPosition};
pub use value_model::{Limit, ValueModel};
