//! Widget trait

use crate::canvas::Canvas;
use crate::event::Event;
use crate::layout::{Bounds, Length, Size};
use crate::runtime::TextNode;

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget into `bounds`
    fn draw(&self, canvas: &mut Canvas, bounds: Bounds);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let _ = (event, bounds);
        None
    }

    /// Horizontal sizing, consulted by rows when sharing space
    fn width(&self) -> Length {
        Length::Shrink
    }

    /// Report visible text with its bounds (used by snapshots and tests)
    fn collect_text(&self, bounds: Bounds, out: &mut Vec<TextNode>) {
        let _ = (bounds, out);
    }
}
