//! Sizing and styling constants for the picker widgets.

/// Hue slider height, borders included
pub const SLIDER_HEIGHT: f32 = 40.0;

/// Pointer circle radius
pub const POINTER_RADIUS: f64 = 5.0;

/// Pointer circle outline width
pub const POINTER_BORDER: f64 = 2.0;

/// Tick line width on the hue slider pointer
pub const TICK_WIDTH: f64 = 2.0;

/// Corner radius for the track and the square
pub const CORNER_RADIUS: f64 = 10.0;

/// Gap between the square and the slider
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;
