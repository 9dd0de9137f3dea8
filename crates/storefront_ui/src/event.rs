use crate::layout::Point;

/// Events that widgets can respond to. Positions are in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse button (or touch) pressed.
    MousePressed { button: MouseButton, position: Point },
    /// Mouse button (or touch) released.
    MouseReleased { button: MouseButton, position: Point },
    /// Cursor moved.
    MouseMoved { position: Point },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl Event {
    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            Event::MousePressed { position, .. }
            | Event::MouseReleased { position, .. }
            | Event::MouseMoved { position } => position,
        }
    }
}
