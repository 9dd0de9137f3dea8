//! Row layout widget - arranges children horizontally

use crate::canvas::Canvas;
use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Justify, Length, Padding, Size};
use crate::runtime::TextNode;
use crate::widget::Widget;

/// A horizontal run of children.
///
/// Children whose width is `Length::Fill` share whatever space the other
/// children leave, in proportion to their weights.
pub struct Row<M> {
    children: Vec<Element<M>>,
    spacing: f32,
    padding: Padding,
    width: Length,
    align_y: Alignment,
    justify: Justify,
}

/// Create an empty row
pub fn row<M>() -> Row<M> {
    Row::new()
}

impl<M> Default for Row<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Row<M> {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::Shrink,
            align_y: Alignment::Center,
            justify: Justify::Start,
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

    pub fn align_y(mut self, align: Alignment) -> Self {
        self.align_y = align;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    fn total_spacing(&self) -> f32 {
        self.spacing * self.children.len().saturating_sub(1) as f32
    }

    /// Bounds of each child inside `bounds`, in push order.
    fn child_bounds(&self, bounds: Bounds) -> Vec<Bounds> {
        let inner = bounds.shrink(self.padding);
        let content_width: f32 = self.children.iter().map(|c| c.size().width).sum();

        let gap = match self.justify {
            Justify::SpaceBetween if self.children.len() > 1 => {
                let free = inner.width - content_width;
                (free / (self.children.len() - 1) as f32).max(self.spacing)
            }
            _ => self.spacing,
        };

        let mut x = inner.x;
        self.children
            .iter()
            .map(|child| {
                let size = child.size();
                let child_bounds = Bounds::new(
                    x,
                    inner.y + self.align_y.offset(inner.height, size.height),
                    size.width,
                    size.height.min(inner.height),
                );
                x += size.width + gap;
                child_bounds
            })
            .collect()
    }
}

impl<M> Widget<M> for Row<M> {
    fn layout(&mut self, available: Size) -> Size {
        let outer_width = match self.width {
            Length::Fixed(w) => w,
            _ => available.width,
        };
        let inner = Size::new(outer_width, available.height).shrink(self.padding);

        // Pass 1: children with intrinsic widths.
        let mut used = self.total_spacing();
        let mut total_weight = 0.0;
        for child in self.children.iter_mut() {
            match child.width().fill_weight() {
                Some(weight) => total_weight += weight,
                None => used += child.layout(Size::new(inner.width, inner.height)).width,
            }
        }

        // Pass 2: distribute what is left among the fill children.
        let leftover = if inner.width.is_finite() {
            (inner.width - used).max(0.0)
        } else {
            0.0
        };
        for child in self.children.iter_mut() {
            if let Some(weight) = child.width().fill_weight() {
                let share = if total_weight > 0.0 {
                    leftover * weight / total_weight
                } else {
                    0.0
                };
                child.layout(Size::new(share, inner.height));
            }
        }

        let content_width: f32 =
            self.children.iter().map(|c| c.size().width).sum::<f32>() + self.total_spacing();
        let content_height = self
            .children
            .iter()
            .map(|c| c.size().height)
            .fold(0.0, f32::max);

        let content = Size::new(content_width, content_height).expand(self.padding);
        Size::new(self.width.resolve(available.width, content.width), content.height)
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        for (child, child_bounds) in self.children.iter().zip(self.child_bounds(bounds)) {
            child.draw(canvas, child_bounds);
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
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

impl<M: 'static> From<Row<M>> for Element<M> {
    fn from(row: Row<M>) -> Self {
        Element::new(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{space, Space};

    #[test]
    fn test_fill_children_share_leftover() {
        let mut r: Row<()> = row()
            .spacing(10.0)
            .push(space(40.0, 20.0))
            .push(Space::fill(10.0))
            .push(space(30.0, 20.0));

        let size = r.layout(Size::new(300.0, 100.0));
        assert_eq!(size.width, 300.0);

        let bounds = r.child_bounds(Bounds::from_size(size));
        assert_eq!(bounds[1].width, 300.0 - 40.0 - 30.0 - 20.0);
        assert_eq!(bounds[2].x, 270.0);
    }

    #[test]
    fn test_space_between_pushes_last_child_to_edge() {
        let mut r: Row<()> = row()
            .width(Length::FILL)
            .justify(Justify::SpaceBetween)
            .push(space(50.0, 20.0))
            .push(space(50.0, 20.0))
            .push(space(50.0, 20.0));

        let size = r.layout(Size::new(250.0, 100.0));
        let bounds = r.child_bounds(Bounds::from_size(size));
        assert_eq!(bounds[0].x, 0.0);
        assert_eq!(bounds[1].x, 100.0);
        assert_eq!(bounds[2].right(), 250.0);
    }

    #[test]
    fn test_children_are_vertically_centered() {
        let mut r: Row<()> = row().push(space(10.0, 40.0)).push(space(10.0, 10.0));
        let size = r.layout(Size::new(100.0, 100.0));
        assert_eq!(size.height, 40.0);
        let bounds = r.child_bounds(Bounds::from_size(size));
        assert_eq!(bounds[1].y, 15.0);
    }
}
