//! Default sizing constants for the toolkit.

use crate::layout::Padding;

/// Default font size for text
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Approximate character width factor (relative to font size), used when no
/// font could be loaded.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height factor (relative to font size)
pub const LINE_HEIGHT_FACTOR: f32 = 1.25;

/// Default spacing between children of rows and columns
pub const DEFAULT_SPACING: f32 = 8.0;

/// Default button padding
pub const BUTTON_PADDING: Padding = Padding {
    top: 6.0,
    right: 12.0,
    bottom: 6.0,
    left: 12.0,
};

/// Amount a custom button background is lightened on hover.
pub const HOVER_LIGHTEN: f32 = 0.1;

/// Amount a custom button background is darkened while pressed.
pub const PRESS_DARKEN: f32 = 0.15;

/// Approximate character width for a given font size.
pub fn char_width(font_size: f32) -> f32 {
    font_size * CHAR_WIDTH_FACTOR
}

/// Line height for a given font size.
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_scale_with_font_size() {
        assert_eq!(char_width(10.0), 6.0);
        assert_eq!(line_height(16.0), 20.0);
        assert!(char_width(DEFAULT_FONT_SIZE) < line_height(DEFAULT_FONT_SIZE));
    }
}
