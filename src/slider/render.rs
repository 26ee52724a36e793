//! Renderer: turns slider state into an ordered list of draw commands.
//!
//! Rendering is a pure function of the model, the style and the geometry, so
//! hosts may call it any number of times per value change.

use egui::{Color32, FontId, Pos2, Rect, Stroke, Vec2};

use super::geometry::SliderGeometry;
use super::style::StyleConfig;
use super::value_model::ValueModel;

/// Per-channel weight of the disabled-state desaturation matrix.
const GRAYSCALE_WEIGHT: f32 = 0.33;
/// Downward offset of the thumb's drop shadow.
const THUMB_SHADOW_OFFSET: f32 = 1.0;
/// How far the drop shadow extends past the thumb.
const THUMB_SHADOW_SPREAD: f32 = 2.0;

/// Measured-text primitive supplied by the host.
pub trait TextMeasurer {
    /// Size of `text` laid out on a single line in `font`.
    fn measure(&self, text: &str, font: &FontId) -> Vec2;
}

/// A single drawing operation, in widget-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Single-line text with its top-left corner at `pos`.
    Text {
        pos: Pos2,
        text: String,
        font: FontId,
        color: Color32,
    },
    /// Stroked closed outline.
    Outline { points: Vec<Pos2>, stroke: Stroke },
    RoundedRect {
        rect: Rect,
        rounding: f32,
        fill: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
    },
}

impl DrawCommand {
    fn map_color(&mut self, f: impl Fn(Color32) -> Color32) {
        match self {
            DrawCommand::Text { color, .. } => *color = f(*color),
            DrawCommand::Outline { stroke, .. } => stroke.color = f(stroke.color),
            DrawCommand::RoundedRect { fill, .. } => *fill = f(*fill),
            DrawCommand::Circle { fill, .. } => *fill = f(*fill),
        }
    }
}

/// Everything the renderer reads for one frame.
pub struct RenderFrame<'a> {
    pub geometry: &'a SliderGeometry,
    pub model: &'a ValueModel,
    pub style: &'a StyleConfig,
    pub bubble_text: &'a str,
    /// Logical thumb x; may lie outside the drawable area.
    pub thumb_x: f32,
}

/// Produce the draw commands for one frame.
///
/// Order: bubble text, bubble outline, title, inactive track, active track,
/// thumb, min label, max label. The bubble outline depends on the measured
/// bubble text, so the text is measured first.
pub fn render(frame: &RenderFrame<'_>, measurer: &dyn TextMeasurer) -> Vec<DrawCommand> {
    let g = frame.geometry;
    let style = frame.style;
    let mut commands = Vec::with_capacity(10);

    if !style.bubble_hidden {
        let text_size = measurer.measure(frame.bubble_text, &style.bubble_font);
        commands.push(DrawCommand::Text {
            pos: g.bubble_text_pos(frame.thumb_x, text_size),
            text: frame.bubble_text.to_string(),
            font: style.bubble_font.clone(),
            color: style.bubble_text_color,
        });
        let path = g.bubble_path(frame.thumb_x, text_size.x);
        commands.push(DrawCommand::Outline {
            points: path.points,
            stroke: Stroke::new(g.metrics.bubble_stroke_width, style.bubble_outline_color),
        });
    }

    if !style.title.is_empty() {
        commands.push(DrawCommand::Text {
            pos: g.title_pos(),
            text: style.title.clone(),
            font: style.title_font.clone(),
            color: style.title_text_color,
        });
    }

    let rounding = g.metrics.track_height / 2.0;
    commands.push(DrawCommand::RoundedRect {
        rect: g.inactive_track_rect(),
        rounding,
        fill: style.inactive_track_color,
    });
    commands.push(DrawCommand::RoundedRect {
        rect: g.active_track_rect(frame.thumb_x),
        rounding,
        fill: style.active_track_color,
    });

    let thumb = g.thumb_center(frame.thumb_x);
    commands.push(DrawCommand::Circle {
        center: thumb + Vec2::new(0.0, THUMB_SHADOW_OFFSET),
        radius: g.metrics.thumb_radius + THUMB_SHADOW_SPREAD / 2.0,
        fill: style.thumb_shadow_color,
    });
    commands.push(DrawCommand::Circle {
        center: thumb,
        radius: g.metrics.thumb_radius,
        fill: style.thumb_color,
    });

    if !style.range_indication_hidden {
        let min_text = style.format_value(frame.model.min_value());
        commands.push(DrawCommand::Text {
            pos: g.min_range_text_pos(),
            text: min_text,
            font: style.range_font.clone(),
            color: style.range_text_color,
        });
        let max_text = style.format_value(frame.model.max_value());
        let max_width = measurer.measure(&max_text, &style.range_font).x;
        commands.push(DrawCommand::Text {
            pos: g.max_range_text_pos(max_width),
            text: max_text,
            font: style.range_font.clone(),
            color: style.range_text_color,
        });
    }

    if style.disabled {
        desaturate(&mut commands);
    }
    commands
}

/// Pass every color of a finished frame through the grayscale matrix.
pub fn desaturate(commands: &mut [DrawCommand]) {
    for command in commands {
        command.map_color(grayscale);
    }
}

/// Equal-weight desaturation; alpha is left untouched.
pub fn grayscale(color: Color32) -> Color32 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let gray = (GRAYSCALE_WEIGHT * (r as f32 + g as f32 + b as f32))
        .round()
        .min(255.0) as u8;
    Color32::from_rgba_unmultiplied(gray, gray, gray, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::geometry::SliderMetrics;

    /// Every glyph is 7 points wide and 16 tall.
    struct FixedMeasurer;

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, text: &str, _font: &FontId) -> Vec2 {
            Vec2::new(text.chars().count() as f32 * 7.0, 16.0)
        }
    }

    fn render_with(style: &StyleConfig) -> Vec<DrawCommand> {
        let model = ValueModel::default();
        let geometry = SliderGeometry::new(SliderMetrics::default(), 312.0, 0, 100);
        let frame = RenderFrame {
            geometry: &geometry,
            model: &model,
            style,
            bubble_text: "50",
            thumb_x: 150.0,
        };
        render(&frame, &FixedMeasurer)
    }

    fn kinds(commands: &[DrawCommand]) -> Vec<&'static str> {
        commands
            .iter()
            .map(|c| match c {
                DrawCommand::Text { .. } => "text",
                DrawCommand::Outline { .. } => "outline",
                DrawCommand::RoundedRect { .. } => "rect",
                DrawCommand::Circle { .. } => "circle",
            })
            .collect()
    }

    #[test]
    fn test_draw_order() {
        let style = StyleConfig::default().with_title("Amount");
        let commands = render_with(&style);
        assert_eq!(
            kinds(&commands),
            vec!["text", "outline", "text", "rect", "rect", "circle", "circle", "text", "text"]
        );
    }

    #[test]
    fn test_hidden_parts_skipped() {
        let style = StyleConfig {
            bubble_hidden: true,
            range_indication_hidden: true,
            ..Default::default()
        };
        let commands = render_with(&style);
        assert_eq!(kinds(&commands), vec!["rect", "rect", "circle", "circle"]);
    }

    #[test]
    fn test_range_labels_use_unit() {
        let style = StyleConfig::default().with_unit("%", crate::slider::UnitPosition::Front);
        let commands = render_with(&style);
        let texts: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["50", "0%", "100%"]);
    }

    #[test]
    fn test_max_label_right_aligned() {
        let commands = render_with(&StyleConfig::default());
        match commands.last() {
            Some(DrawCommand::Text { pos, .. }) => assert_eq!(pos.x, 312.0 - 21.0),
            other => panic!("unexpected last command: {:?}", other),
        }
    }

    #[test]
    fn test_disabled_is_grayscale() {
        let style = StyleConfig {
            disabled: true,
            ..Default::default()
        };
        for command in render_with(&style) {
            let color = match command {
                DrawCommand::Text { color, .. } => color,
                DrawCommand::Outline { stroke, .. } => stroke.color,
                DrawCommand::RoundedRect { fill, .. } => fill,
                DrawCommand::Circle { fill, .. } => fill,
            };
            let [r, g, b, _] = color.to_srgba_unmultiplied();
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_grayscale_weights() {
        let gray = grayscale(Color32::from_rgb(255, 36, 0));
        assert_eq!(gray, Color32::from_rgb(96, 96, 96));
        assert_eq!(grayscale(Color32::WHITE), Color32::from_rgb(252, 252, 252));
    }

    #[test]
    fn test_grayscale_keeps_alpha() {
        let shadow = Color32::from_rgba_unmultiplied(0x44, 0x44, 0x44, 0x44);
        assert_eq!(grayscale(shadow).a(), 0x44);
    }
}
