//! Container widget - padding, background and border around one child

use crate::canvas::{Background, Canvas};
use crate::color::Color;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::runtime::TextNode;
use crate::widget::Widget;

/// Decorates a single child.
pub struct Container<M> {
    content: Element<M>,
    padding: Padding,
    background: Background,
    border: Option<(Color, f32)>,
    radius: f32,
    width: Length,
    height: Option<f32>,
    align_x: Alignment,
    align_y: Alignment,
}

/// Wrap some content in a container
pub fn container<M>(content: impl Into<Element<M>>) -> Container<M> {
    Container::new(content)
}

impl<M> Container<M> {
    pub fn new(content: impl Into<Element<M>>) -> Self {
        Self {
            content: content.into(),
            padding: Padding::ZERO,
            background: Background::None,
            border: None,
            radius: 0.0,
            width: Length::Shrink,
            height: None,
            align_x: Alignment::Start,
            align_y: Alignment::Start,
        }
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.border = Some((color, width));
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Fix the outer height
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn align_x(mut self, align: Alignment) -> Self {
        self.align_x = align;
        self
    }

    pub fn align_y(mut self, align: Alignment) -> Self {
        self.align_y = align;
        self
    }

    fn content_bounds(&self, bounds: Bounds) -> Bounds {
        let inner = bounds.shrink(self.padding);
        let size = self.content.size();
        let width = size.width.min(inner.width);
        let height = size.height.min(inner.height);
        Bounds::new(
            inner.x + self.align_x.offset(inner.width, width),
            inner.y + self.align_y.offset(inner.height, height),
            width,
            height,
        )
    }
}

impl<M> Widget<M> for Container<M> {
    fn layout(&mut self, available: Size) -> Size {
        let outer_width = match self.width {
            Length::Fixed(w) => w,
            _ => available.width,
        };
        let outer_height = self.height.unwrap_or(available.height);
        let inner = Size::new(outer_width, outer_height).shrink(self.padding);
        let content = self.content.layout(inner).expand(self.padding);

        Size::new(
            self.width.resolve(available.width, content.width),
            self.height.unwrap_or(content.height),
        )
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        canvas.fill(bounds, self.radius, &self.background);
        if let Some((color, width)) = self.border {
            canvas.stroke(bounds, self.radius, color, width);
        }
        self.content.draw(canvas, self.content_bounds(bounds));
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let content_bounds = self.content_bounds(bounds);
        self.content.on_event(event, content_bounds)
    }

    fn width(&self) -> Length {
        self.width
    }

    fn collect_text(&self, bounds: Bounds, out: &mut Vec<TextNode>) {
        self.content.collect_text(self.content_bounds(bounds), out);
    }
}

impl<M: 'static> From<Container<M>> for Element<M> {
    fn from(container: Container<M>) -> Self {
        Element::new(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::space;

    #[test]
    fn test_padding_wraps_content() {
        let mut c: Container<()> = container(space(20.0, 10.0)).padding(5.0);
        let size = c.layout(Size::new(100.0, 100.0));
        assert_eq!(size, Size::new(30.0, 20.0));
        assert_eq!(
            c.content_bounds(Bounds::from_size(size)),
            Bounds::new(5.0, 5.0, 20.0, 10.0)
        );
    }

    #[test]
    fn test_fill_and_center() {
        let mut c: Container<()> = container(space(20.0, 10.0))
            .width(Length::FILL)
            .height(50.0)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center);
        let size = c.layout(Size::new(100.0, 100.0));
        assert_eq!(size, Size::new(100.0, 50.0));
        assert_eq!(
            c.content_bounds(Bounds::from_size(size)),
            Bounds::new(40.0, 20.0, 20.0, 10.0)
        );
    }
}
