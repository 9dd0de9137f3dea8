//! Empty spacer widget

use crate::canvas::Canvas;
use crate::element::Element;
use crate::layout::{Bounds, Length, Size};
use crate::widget::Widget;

/// Fixed-size empty space; width may also fill.
pub struct Space {
    width: Length,
    height: f32,
}

/// Create a spacer of the given logical size
pub fn space(width: f32, height: f32) -> Space {
    Space {
        width: Length::Fixed(width),
        height,
    }
}

impl Space {
    /// Flexible horizontal gap of a fixed height
    pub fn fill(height: f32) -> Self {
        Self {
            width: Length::FILL,
            height,
        }
    }
}

impl<M> Widget<M> for Space {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(self.width.resolve(available.width, 0.0), self.height)
    }

    fn draw(&self, _canvas: &mut Canvas, _bounds: Bounds) {}

    fn width(&self) -> Length {
        self.width
    }
}

impl<M: 'static> From<Space> for Element<M> {
    fn from(space: Space) -> Self {
        Element::new(space)
    }
}
