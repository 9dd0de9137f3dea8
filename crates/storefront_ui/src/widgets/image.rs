//! Image widget with a placeholder for missing sources

use crate::canvas::{Background, Canvas, ImageData};
use crate::color::Color;
use crate::element::Element;
use crate::font::FontWeight;
use crate::layout::{Bounds, Length, Point, Size};
use crate::widget::Widget;

const PLACEHOLDER_TEXT_SIZE: f32 = 13.0;

/// A fixed-height picture that fills the available width.
pub struct Image {
    source: Option<ImageData>,
    height: f32,
    radius: f32,
    placeholder: String,
    placeholder_color: Color,
}

/// Create an image widget; `None` renders the placeholder
pub fn image(source: Option<ImageData>) -> Image {
    Image {
        source,
        height: 180.0,
        radius: 0.0,
        placeholder: String::new(),
        placeholder_color: Color::rgba(0.0, 0.0, 0.0, 0.08),
    }
}

impl Image {
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Caption drawn when there is no source
    pub fn placeholder(mut self, caption: impl Into<String>) -> Self {
        self.placeholder = caption.into();
        self
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }
}

impl<M> Widget<M> for Image {
    fn layout(&mut self, available: Size) -> Size {
        let width = if available.width.is_finite() {
            available.width
        } else {
            // Unbounded: keep the source aspect ratio, or go square.
            match &self.source {
                Some(src) => self.height * src.width() as f32 / src.height() as f32,
                None => self.height,
            }
        };
        Size::new(width, self.height)
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        match &self.source {
            Some(source) => canvas.draw_image(source, bounds, self.radius),
            None => {
                canvas.fill(bounds, self.radius, &Background::Solid(self.placeholder_color));
                if !self.placeholder.is_empty() {
                    let width =
                        crate::font::text_width(&self.placeholder, PLACEHOLDER_TEXT_SIZE, FontWeight::Regular);
                    let height = crate::font::text_line_height(PLACEHOLDER_TEXT_SIZE);
                    let origin = Point::new(
                        bounds.x + (bounds.width - width).max(0.0) / 2.0,
                        bounds.y + (bounds.height - height).max(0.0) / 2.0,
                    );
                    canvas.draw_text(
                        &self.placeholder,
                        origin,
                        PLACEHOLDER_TEXT_SIZE,
                        FontWeight::Regular,
                        Color::rgb(0.45, 0.45, 0.45),
                    );
                }
            }
        }
    }

    fn width(&self) -> Length {
        Length::FILL
    }
}

impl<M: 'static> From<Image> for Element<M> {
    fn from(image: Image) -> Self {
        Element::new(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_fills_width_at_fixed_height() {
        let mut img = image(None).height(180.0);
        let size = Widget::<()>::layout(&mut img, Size::new(320.0, 800.0));
        assert_eq!(size, Size::new(320.0, 180.0));
    }

    #[test]
    fn test_unbounded_width_keeps_aspect_ratio() {
        let data = ImageData::from_rgba8(4, 2, vec![255; 32]).unwrap();
        let mut img = image(Some(data)).height(50.0);
        let size = Widget::<()>::layout(&mut img, Size::new(f32::INFINITY, 800.0));
        assert_eq!(size, Size::new(100.0, 50.0));
    }
}
