//! Column layout widget - arranges children vertically

use crate::canvas::Canvas;
use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::runtime::TextNode;
use crate::widget::Widget;

/// A vertical stack of children. Fills the available width by default.
pub struct Column<M> {
    children: Vec<Element<M>>,
    spacing: f32,
    padding: Padding,
    width: Length,
    align_x: Alignment,
}

/// Create an empty column
pub fn column<M>() -> Column<M> {
    Column::new()
}

impl<M> Default for Column<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Column<M> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::FILL,
            align_x: Alignment::Start,
        }
    }

    /// Append a child
    pub fn push(mut self, child: impl Into<Element<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    pub fn align_x(mut self, align: Alignment) -> Self {
        self.align_x = align;
        self
    }

    /// Bounds of each child inside `bounds`, in push order.
    fn child_bounds(&self, bounds: Bounds) -> Vec<Bounds> {
        let inner = bounds.shrink(self.padding);
        let mut y = inner.y;
        self.children
            .iter()
            .map(|child| {
                let size = child.size();
                let width = size.width.min(inner.width);
                let child_bounds = Bounds::new(
                    inner.x + self.align_x.offset(inner.width, width),
                    y,
                    width,
                    size.height,
                );
                y += size.height + self.spacing;
                child_bounds
            })
            .collect()
    }
}

impl<M> Widget<M> for Column<M> {
    fn layout(&mut self, available: Size) -> Size {
        let inner = available.shrink(self.padding);
        let mut width: f32 = 0.0;
        let mut height = 0.0;
        for (i, child) in self.children.iter_mut().enumerate() {
            let size = child.layout(inner);
            width = width.max(size.width);
            height += size.height;
            if i > 0 {
                height += self.spacing;
            }
        }
        let content = Size::new(width, height).expand(self.padding);
        Size::new(self.width.resolve(available.width, content.width), content.height)
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        for (child, child_bounds) in self.children.iter().zip(self.child_bounds(bounds)) {
            child.draw(canvas, child_bounds);
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        // Every child sees the event so hover state stays consistent.
        let layout = self.child_bounds(bounds);
        let mut message = None;
        for (child, child_bounds) in self.children.iter_mut().zip(layout) {
            if let Some(m) = child.on_event(event, child_bounds) {
                message.get_or_insert(m);
            }
        }
        message
    }

    fn width(&self) -> Length {
        self.width
    }

    fn collect_text(&self, bounds: Bounds, out: &mut Vec<TextNode>) {
        for (child, child_bounds) in self.children.iter().zip(self.child_bounds(bounds)) {
            child.collect_text(child_bounds, out);
        }
    }
}

impl<M: 'static> From<Column<M>> for Element<M> {
    fn from(column: Column<M>) -> Self {
        Element::new(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::space;

    #[test]
    fn test_children_stack_with_spacing() {
        let mut col: Column<()> = column()
            .spacing(10.0)
            .padding(5.0)
            .push(space(20.0, 30.0))
            .push(space(40.0, 10.0));

        let size = col.layout(Size::new(200.0, 500.0));
        assert_eq!(size, Size::new(200.0, 30.0 + 10.0 + 10.0 + 10.0));

        let bounds = col.child_bounds(Bounds::from_size(size));
        assert_eq!(bounds[0], Bounds::new(5.0, 5.0, 20.0, 30.0));
        assert_eq!(bounds[1], Bounds::new(5.0, 45.0, 40.0, 10.0));
    }

    #[test]
    fn test_center_alignment() {
        let mut col: Column<()> = column().align_x(Alignment::Center).push(space(20.0, 10.0));
        let size = col.layout(Size::new(100.0, 100.0));
        let bounds = col.child_bounds(Bounds::from_size(size));
        assert_eq!(bounds[0].x, 40.0);
    }

    #[test]
    fn test_shrink_width_wraps_content() {
        let mut col: Column<()> = column().width(Length::Shrink).push(space(20.0, 10.0));
        assert_eq!(col.layout(Size::new(100.0, 100.0)).width, 20.0);
    }
}
