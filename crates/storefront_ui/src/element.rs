//! Type-erased widget wrapper

use crate::canvas::Canvas;
use crate::event::Event;
use crate::layout::{Bounds, Length, Size};
use crate::runtime::TextNode;
use crate::widget::Widget;

/// A type-erased widget that can hold any widget type
pub struct Element<M> {
    widget: Box<dyn Widget<M>>,
    /// Cached layout size from last layout pass
    cached_size: Size,
}

impl<M> Element<M> {
    /// Create a new element from a widget
    pub fn new<W: Widget<M> + 'static>(widget: W) -> Self {
        Self {
            widget: Box::new(widget),
            cached_size: Size::ZERO,
        }
    }

    /// Calculate layout and cache the result
    pub fn layout(&mut self, available: Size) -> Size {
        self.cached_size = self.widget.layout(available);
        self.cached_size
    }

    /// Get the cached size from last layout
    pub fn size(&self) -> Size {
        self.cached_size
    }

    pub fn width(&self) -> Length {
        self.widget.width()
    }

    pub fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        self.widget.draw(canvas, bounds);
    }

    pub fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        self.widget.on_event(event, bounds)
    }

    pub fn collect_text(&self, bounds: Bounds, out: &mut Vec<TextNode>) {
        self.widget.collect_text(bounds, out);
    }
}

impl<M> std::fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("cached_size", &self.cached_size)
            .finish_non_exhaustive()
    }
}
