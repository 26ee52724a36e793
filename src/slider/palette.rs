//! Default slider palette

use egui::Color32;

/// Filled part of the track - vivid red
pub const ACTIVE_TRACK: Color32 = Color32::from_rgb(0xFF, 0x24, 0x00);

/// Unfilled part of the track - light gray
pub const INACTIVE_TRACK: Color32 = Color32::from_rgb(0xE8, 0xE8, 0xE8);

/// Thumb body
pub const THUMB: Color32 = Color32::WHITE;

/// Soft drop shadow below the thumb
pub const THUMB_SHADOW: Color32 = Color32::from_rgba_premultiplied(0x12, 0x12, 0x12, 0x44);

/// Bubble outline
pub const BUBBLE_OUTLINE: Color32 = Color32::from_rgb(0xE8, 0xE8, 0xE8);

/// Bubble value text - near black
pub const BUBBLE_TEXT: Color32 = Color32::from_rgb(0x1A, 0x1A, 0x1A);

/// Title and range labels - muted gray
pub const LABEL_TEXT: Color32 = Color32::from_rgb(0x9F, 0xA7, 0xAD);
