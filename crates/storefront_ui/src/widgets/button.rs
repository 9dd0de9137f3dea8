//! Button widget

use crate::canvas::{Background, Canvas};
use crate::color::Color;
use crate::constants::{BUTTON_PADDING, HOVER_LIGHTEN, PRESS_DARKEN};
use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::layout::{Bounds, Length, Padding, Size};
use crate::runtime::TextNode;
use crate::widget::Widget;

/// Button interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

/// A clickable widget wrapping arbitrary content.
///
/// The press message is emitted on release, and only if both the press and
/// the release landed inside the button.
pub struct Button<M> {
    content: Element<M>,
    on_press: Option<M>,
    width: Length,
    padding: Padding,
    background: Option<Color>,
    border: Option<(Color, f32)>,
    radius: f32,
    state: ButtonState,
}

/// Create a button around some content
pub fn button<M>(content: impl Into<Element<M>>) -> Button<M> {
    Button::new(content)
}

impl<M> Button<M> {
    pub fn new(content: impl Into<Element<M>>) -> Self {
        Self {
            content: content.into(),
            on_press: None,
            width: Length::Shrink,
            padding: BUTTON_PADDING,
            background: None,
            border: None,
            radius: 0.0,
            state: ButtonState::Normal,
        }
    }

    /// Set the message sent when the button is clicked
    pub fn on_press(mut self, message: M) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
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

    fn current_background(&self) -> Option<Color> {
        let base = self.background?;
        Some(match self.state {
            ButtonState::Normal => base,
            ButtonState::Hovered => base.lighten(HOVER_LIGHTEN),
            ButtonState::Pressed => base.darken(PRESS_DARKEN),
        })
    }

    fn content_bounds(&self, bounds: Bounds) -> Bounds {
        let inner = bounds.shrink(self.padding);
        let size = self.content.size();
        Bounds::new(
            inner.x + (inner.width - size.width).max(0.0) / 2.0,
            inner.y + (inner.height - size.height).max(0.0) / 2.0,
            size.width.min(inner.width),
            size.height.min(inner.height),
        )
    }
}

impl<M: Clone> Widget<M> for Button<M> {
    fn layout(&mut self, available: Size) -> Size {
        let outer_width = match self.width {
            Length::Fixed(w) => w,
            _ => available.width,
        };
        let inner = Size::new(outer_width, available.height).shrink(self.padding);
        let content = self.content.layout(inner).expand(self.padding);
        Size::new(self.width.resolve(available.width, content.width), content.height)
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        if let Some(color) = self.current_background() {
            canvas.fill(bounds, self.radius, &Background::Solid(color));
        }
        if let Some((color, width)) = self.border {
            let color = if self.state == ButtonState::Pressed {
                color.darken(PRESS_DARKEN)
            } else {
                color
            };
            canvas.stroke(bounds, self.radius, color, width);
        }
        self.content.draw(canvas, self.content_bounds(bounds));
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        self.on_press.as_ref()?;
        let inside = bounds.contains(event.position());

        match *event {
            Event::MouseMoved { .. } => {
                if self.state != ButtonState::Pressed {
                    self.state = if inside {
                        ButtonState::Hovered
                    } else {
                        ButtonState::Normal
                    };
                }
                None
            }
            Event::MousePressed {
                button: MouseButton::Left,
                ..
            } if inside => {
                self.state = ButtonState::Pressed;
                None
            }
            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            } => {
                let was_pressed = self.state == ButtonState::Pressed;
                self.state = if inside {
                    ButtonState::Hovered
                } else {
                    ButtonState::Normal
                };
                if was_pressed && inside {
                    self.on_press.clone()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn width(&self) -> Length {
        self.width
    }

    fn collect_text(&self, bounds: Bounds, out: &mut Vec<TextNode>) {
        self.content.collect_text(self.content_bounds(bounds), out);
    }
}

impl<M: Clone + 'static> From<Button<M>> for Element<M> {
    fn from(button: Button<M>) -> Self {
        Element::new(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;
    use crate::widgets::text;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Tapped,
    }

    fn press(x: f32, y: f32) -> Event {
        Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    fn release(x: f32, y: f32) -> Event {
        Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_click_inside_emits_message() {
        let mut btn = button(text("+")).on_press(Msg::Tapped);
        let bounds = Bounds::new(0.0, 0.0, 40.0, 30.0);

        assert_eq!(btn.on_event(&press(10.0, 10.0), bounds), None);
        assert_eq!(btn.on_event(&release(12.0, 10.0), bounds), Some(Msg::Tapped));
    }

    #[test]
    fn test_release_outside_cancels() {
        let mut btn = button(text("+")).on_press(Msg::Tapped);
        let bounds = Bounds::new(0.0, 0.0, 40.0, 30.0);

        btn.on_event(&press(10.0, 10.0), bounds);
        assert_eq!(btn.on_event(&release(100.0, 10.0), bounds), None);
        // A later release inside without a new press does nothing either.
        assert_eq!(btn.on_event(&release(10.0, 10.0), bounds), None);
    }

    #[test]
    fn test_right_button_is_ignored() {
        let mut btn = button(text("+")).on_press(Msg::Tapped);
        let bounds = Bounds::new(0.0, 0.0, 40.0, 30.0);
        let position = Point::new(5.0, 5.0);

        btn.on_event(
            &Event::MousePressed {
                button: MouseButton::Right,
                position,
            },
            bounds,
        );
        let released = Event::MouseReleased {
            button: MouseButton::Right,
            position,
        };
        assert_eq!(btn.on_event(&released, bounds), None);
    }

    #[test]
    fn test_button_without_handler_never_emits() {
        let mut btn: Button<Msg> = button(text("Add to Cart"));
        let bounds = Bounds::new(0.0, 0.0, 100.0, 30.0);
        btn.on_event(&press(5.0, 5.0), bounds);
        assert_eq!(btn.on_event(&release(5.0, 5.0), bounds), None);
    }

    #[test]
    fn test_layout_adds_padding_and_fills() {
        let mut btn: Button<Msg> = button(text("Buy Now")).padding(10.0).width(Length::FILL);
        let size = btn.layout(Size::new(200.0, 100.0));
        assert_eq!(size.width, 200.0);
        assert!(size.height > 20.0);
    }
}
