//! Text widget

use crate::canvas::Canvas;
use crate::color::Color;
use crate::constants::DEFAULT_FONT_SIZE;
use crate::element::Element;
use crate::font::{self, FontWeight};
use crate::layout::{Alignment, Bounds, Length, Size};
use crate::runtime::TextNode;
use crate::widget::Widget;

/// A block of text, optionally wrapped to the available width.
pub struct Text {
    content: String,
    size: f32,
    weight: FontWeight,
    color: Color,
    width: Length,
    align_x: Alignment,
    wrap: bool,
    /// Lines produced by the last layout pass
    lines: Vec<String>,
}

/// Create a text widget
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            weight: FontWeight::Regular,
            color: Color::rgb(0.1, 0.1, 0.1),
            width: Length::Shrink,
            align_x: Alignment::Start,
            wrap: false,
            lines: Vec::new(),
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Horizontal alignment of each line inside the widget bounds
    pub fn align_x(mut self, align: Alignment) -> Self {
        self.align_x = align;
        self
    }

    /// Wrap at word boundaries to fit the available width
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    fn line_width(&self, line: &str) -> f32 {
        font::text_width(line, self.size, self.weight)
    }
}

impl<M> Widget<M> for Text {
    fn layout(&mut self, available: Size) -> Size {
        let max_width = match self.width {
            Length::Fixed(w) => w,
            _ => available.width,
        };
        self.lines = if self.wrap && max_width.is_finite() {
            font::wrap_lines(&self.content, self.size, self.weight, max_width)
        } else {
            self.content.split('\n').map(str::to_string).collect()
        };

        let content_width = self
            .lines
            .iter()
            .map(|line| self.line_width(line))
            .fold(0.0, f32::max);
        let height = self.lines.len() as f32 * font::text_line_height(self.size);

        Size::new(self.width.resolve(available.width, content_width), height)
    }

    fn draw(&self, canvas: &mut Canvas, bounds: Bounds) {
        let line_height = font::text_line_height(self.size);
        for (i, line) in self.lines.iter().enumerate() {
            let x = bounds.x + self.align_x.offset(bounds.width, self.line_width(line));
            let y = bounds.y + i as f32 * line_height;
            canvas.draw_text(line, crate::Point::new(x, y), self.size, self.weight, self.color);
        }
    }

    fn width(&self) -> Length {
        self.width
    }

    fn collect_text(&self, bounds: Bounds, out: &mut Vec<TextNode>) {
        out.push(TextNode {
            text: self.content.clone(),
            bounds,
        });
    }
}

impl<M: 'static> From<Text> for Element<M> {
    fn from(text: Text) -> Self {
        Element::new(text)
    }
}

impl<M: 'static> From<&str> for Element<M> {
    fn from(content: &str) -> Self {
        Element::new(Text::new(content))
    }
}

impl<M: 'static> From<String> for Element<M> {
    fn from(content: String) -> Self {
        Element::new(Text::new(content))
    }
}
