//! Application runtime state shared by the windowed runner and snapshots.

use crate::application::Application;
use crate::canvas::Canvas;
use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Point, Size};

/// A piece of visible text and where it was laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub bounds: Bounds,
}

/// Holds the application together with its current view tree.
///
/// The tree is rebuilt whenever a message is processed or the viewport
/// changes; between rebuilds widget interaction state (hover, press) lives
/// in the tree.
pub struct UiState<A: Application> {
    app: A,
    root: Element<A::Message>,
    viewport: Size,
}

impl<A: Application> UiState<A> {
    pub fn new(app: A, viewport: Size) -> Self {
        let mut root = app.view();
        root.layout(viewport);
        Self {
            app,
            root,
            viewport,
        }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn into_app(self) -> A {
        self.app
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Size) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.rebuild();
        }
    }

    /// Deliver a message directly, as if a widget had produced it.
    pub fn dispatch(&mut self, message: A::Message) {
        log::debug!("Message: {:?}", message);
        self.app.update(message);
        self.rebuild();
    }

    /// Route an input event through the tree.
    ///
    /// Returns `true` when the event produced a message (and thus a rebuild).
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let bounds = self.root_bounds();
        match self.root.on_event(event, bounds) {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    /// Press and release the left button at `position`.
    pub fn click(&mut self, position: Point) -> bool {
        self.handle_event(&Event::MousePressed {
            button: MouseButton::Left,
            position,
        });
        self.handle_event(&Event::MouseReleased {
            button: MouseButton::Left,
            position,
        })
    }

    /// Draw the current tree, clearing to the application background first.
    pub fn render(&self, canvas: &mut Canvas) {
        canvas.clear(self.app.background());
        self.root.draw(canvas, self.root_bounds());
    }

    /// Visible text in layout order.
    pub fn text_nodes(&self) -> Vec<TextNode> {
        let mut nodes = Vec::new();
        self.root.collect_text(self.root_bounds(), &mut nodes);
        nodes
    }

    /// First text node whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<TextNode> {
        self.text_nodes().into_iter().find(|node| node.text == text)
    }

    fn root_bounds(&self) -> Bounds {
        let size = self.root.size();
        Bounds::new(0.0, 0.0, size.width, size.height)
    }

    fn rebuild(&mut self) {
        self.root = self.app.view();
        self.root.layout(self.viewport);
    }
}
