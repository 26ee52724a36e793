//! Geometry engine for the labeled slider.
//!
//! Every position here is derived from the widget width, the value range and
//! the style metrics. Coordinates are local to the widget: `(0, 0)` is its
//! top-left corner. Nothing is cached between frames.

use egui::{pos2, Pos2, Rect, Vec2};

/// Gap between the bubble and the title, and between the title and the thumb.
const STACK_GAP: f32 = 8.0;
/// Extra space below the bubble before the title starts.
const TITLE_TOP_GAP: f32 = 5.0;
/// Space between the thumb's lower edge and the range labels.
const RANGE_TEXT_GAP: f32 = 2.0;

/// Desired heights when the host lets the slider pick.
const FULL_HEIGHT: f32 = 120.0;
const NO_RANGE_HEIGHT: f32 = 90.0;

/// Fixed size metrics, in logical points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderMetrics {
    pub thumb_radius: f32,
    pub track_height: f32,
    /// Horizontal inset shared by the track, bubble and labels.
    pub side_padding: f32,
    pub top_padding: f32,
    pub bubble_height: f32,
    pub min_bubble_width: f32,
    /// Horizontal space on each side of the bubble text.
    pub bubble_text_padding: f32,
    pub bubble_stroke_width: f32,
    pub tail_half_width: f32,
    pub tail_height: f32,
    /// How far past the thumb radius the tail may lean toward an edge.
    pub tail_edge_allowance: f32,
}

impl Default for SliderMetrics {
    fn default() -> Self {
        Self {
            thumb_radius: 12.0,
            track_height: 4.0,
            side_padding: 0.0,
            top_padding: 2.0,
            bubble_height: 26.0,
            min_bubble_width: 84.0,
            bubble_text_padding: 16.0,
            bubble_stroke_width: 2.0,
            tail_half_width: 3.0,
            tail_height: 4.0,
            tail_edge_allowance: 2.0,
        }
    }
}

impl SliderMetrics {
    /// Height the slider asks for when unconstrained.
    pub fn desired_height(&self, bubble_hidden: bool, range_hidden: bool) -> f32 {
        if bubble_hidden && range_hidden {
            self.thumb_radius * 2.0
        } else if range_hidden {
            NO_RANGE_HEIGHT
        } else {
            FULL_HEIGHT
        }
    }

    /// Largest lateral offset of the tail tip from the bubble center.
    pub fn max_tail_offset(&self) -> f32 {
        self.side_padding / 2.0 + self.thumb_radius + self.tail_edge_allowance
    }
}

/// Outline of the value bubble.
#[derive(Clone, Debug, PartialEq)]
pub struct BubblePath {
    /// Rectangle of the bubble body, already clamped on-screen.
    pub body: Rect,
    /// Point of the tail below the body.
    pub tail_tip: Pos2,
    /// Closed outline, clockwise from the top-left corner.
    pub points: Vec<Pos2>,
}

impl BubblePath {
    /// Horizontal distance from the body center to the tail tip.
    pub fn tail_offset(&self) -> f32 {
        self.tail_tip.x - self.body.center().x
    }
}

/// Per-frame layout of one slider.
#[derive(Clone, Copy, Debug)]
pub struct SliderGeometry {
    pub metrics: SliderMetrics,
    pub width: f32,
    pub min_value: i32,
    pub max_value: i32,
    /// Measured height of the title text.
    pub title_height: f32,
    /// Bubble and range labels are both hidden; only the track is drawn.
    pub compact: bool,
}

impl SliderGeometry {
    pub fn new(metrics: SliderMetrics, width: f32, min_value: i32, max_value: i32) -> Self {
        Self {
            metrics,
            width,
            min_value,
            max_value,
            title_height: 0.0,
            compact: false,
        }
    }

    pub fn with_title_height(mut self, title_height: f32) -> Self {
        self.title_height = title_height;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn half_padding(&self) -> f32 {
        self.metrics.side_padding / 2.0
    }

    /// Width over which the value range is spread.
    pub fn sliding_width(&self) -> f32 {
        self.width - self.metrics.side_padding * 2.0 - self.metrics.thumb_radius
    }

    fn span(&self) -> f64 {
        self.max_value as f64 - self.min_value as f64
    }

    /// Horizontal position of `value` along the track.
    pub fn value_to_x(&self, value: i32) -> f32 {
        let progress = (value as f64 - self.min_value as f64) / self.span();
        self.metrics.side_padding + (self.sliding_width() as f64 * progress) as f32
    }

    /// Value under `x`, rounded to the nearest integer and clamped into range.
    pub fn x_to_value(&self, x: f32) -> i32 {
        let sliding_width = self.sliding_width();
        if sliding_width <= 0.0 {
            return self.min_value;
        }
        let progress = (x - self.metrics.side_padding) as f64 / sliding_width as f64;
        let value = self.min_value as f64 + (self.span() * progress).round();
        value.clamp(self.min_value as f64, self.max_value as f64) as i32
    }

    /// Range a pointer x is clamped into before mapping it to a value.
    pub fn drag_bounds(&self) -> (f32, f32) {
        let low = self.half_padding() - self.metrics.thumb_radius;
        let high = self.width - self.metrics.side_padding - self.metrics.thumb_radius;
        (low, high.max(low))
    }

    /// Bubble width for a given measured text width.
    pub fn bubble_width(&self, text_width: f32) -> f32 {
        self.metrics
            .min_bubble_width
            .max(text_width + self.metrics.bubble_text_padding * 2.0)
    }

    fn bubble_left(&self, center_x: f32, bubble_width: f32) -> (f32, f32) {
        let desired = center_x - bubble_width / 2.0;
        let low = self.half_padding();
        let high = self.width - self.half_padding() - bubble_width;
        let left = if high < low { low } else { desired.clamp(low, high) };
        (desired, left)
    }

    /// Bubble outline for a thumb at `center_x`.
    ///
    /// The body is kept inside the widget while the tail leans toward
    /// `center_x`, at most [`SliderMetrics::max_tail_offset`] from the body
    /// center.
    pub fn bubble_path(&self, center_x: f32, text_width: f32) -> BubblePath {
        let m = &self.metrics;
        let width = self.bubble_width(text_width);
        let (desired_left, left) = self.bubble_left(center_x, width);

        let cap = m.max_tail_offset();
        let tail_offset = (desired_left - left).clamp(-cap, cap);

        let top = m.top_padding;
        let bottom = top + m.bubble_height;
        let right = left + width;
        let tip_x = left + width / 2.0 + tail_offset;

        let points = vec![
            pos2(left, top),
            pos2(right, top),
            pos2(right, bottom),
            pos2(tip_x + m.tail_half_width, bottom),
            pos2(tip_x, bottom + m.tail_height),
            pos2(tip_x - m.tail_half_width, bottom),
            pos2(left, bottom),
        ];

        BubblePath {
            body: Rect::from_min_max(pos2(left, top), pos2(right, bottom)),
            tail_tip: pos2(tip_x, bottom + m.tail_height),
            points,
        }
    }

    /// Top-left corner of the bubble text, centered inside the bubble body.
    pub fn bubble_text_pos(&self, center_x: f32, text_size: Vec2) -> Pos2 {
        let width = self.bubble_width(text_size.x);
        let (_, left) = self.bubble_left(center_x, width);
        pos2(
            left + (width - text_size.x) / 2.0,
            self.metrics.top_padding + (self.metrics.bubble_height - text_size.y) / 2.0,
        )
    }

    pub fn title_pos(&self) -> Pos2 {
        pos2(
            self.half_padding(),
            self.metrics.bubble_height + self.metrics.top_padding + TITLE_TOP_GAP,
        )
    }

    /// Top edge of the track.
    pub fn track_top(&self) -> f32 {
        let m = &self.metrics;
        if self.compact {
            m.thumb_radius - m.track_height / 2.0
        } else {
            m.bubble_height + STACK_GAP + self.title_height + STACK_GAP + m.thumb_radius
        }
    }

    pub fn track_center_y(&self) -> f32 {
        self.track_top() + self.metrics.track_height / 2.0
    }

    /// Full-width background track.
    pub fn inactive_track_rect(&self) -> Rect {
        let top = self.track_top();
        Rect::from_min_max(
            pos2(self.half_padding(), top),
            pos2(self.width - self.half_padding(), top + self.metrics.track_height),
        )
    }

    /// Filled part of the track, ending under the thumb.
    pub fn active_track_rect(&self, x: f32) -> Rect {
        let top = self.track_top();
        Rect::from_min_max(
            pos2(self.half_padding(), top),
            pos2(self.thumb_center_x(x), top + self.metrics.track_height),
        )
    }

    /// Thumb x, clamped so the whole circle stays inside the widget.
    pub fn thumb_center_x(&self, x: f32) -> f32 {
        let low = self.half_padding() + self.metrics.thumb_radius;
        let high = self.width - self.half_padding() - self.metrics.thumb_radius;
        if high < low {
            self.width / 2.0
        } else {
            x.clamp(low, high)
        }
    }

    pub fn thumb_center(&self, x: f32) -> Pos2 {
        pos2(self.thumb_center_x(x), self.track_center_y())
    }

    /// Top edge of the min/max range labels.
    pub fn range_text_top(&self) -> f32 {
        self.track_top() + self.metrics.track_height + self.metrics.thumb_radius + RANGE_TEXT_GAP
    }

    pub fn min_range_text_pos(&self) -> Pos2 {
        pos2(self.half_padding(), self.range_text_top())
    }

    /// Right-aligned position of the max label.
    pub fn max_range_text_pos(&self, text_width: f32) -> Pos2 {
        pos2(
            self.width - self.half_padding() - text_width,
            self.range_text_top(),
        )
    }
}
