//! RGBA color in straight (non-premultiplied) 0..1 components.

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 => {
                let mut channels = digits
                    .chars()
                    .map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
                let r = channels.next()??;
                let g = channels.next()??;
                let b = channels.next()??;
                Some(Self::from_rgb8(r, g, b))
            }
            6 => Some(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => {
                let base = Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?);
                Some(base.with_alpha(byte(6)? as f32 / 255.0))
            }
            _ => None,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Move each channel toward white by `amount` (0..1).
    pub fn lighten(self, amount: f32) -> Self {
        let mix = |c: f32| (c + (1.0 - c) * amount).clamp(0.0, 1.0);
        Self::rgba(mix(self.r), mix(self.g), mix(self.b), self.a)
    }

    /// Move each channel toward black by `amount` (0..1).
    pub fn darken(self, amount: f32) -> Self {
        let mix = |c: f32| (c * (1.0 - amount)).clamp(0.0, 1.0);
        Self::rgba(mix(self.r), mix(self.g), mix(self.b), self.a)
    }

    /// Relative luminance (sRGB weights, no gamma correction).
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Black or white, whichever reads better on this color.
    pub fn contrasting_text(&self) -> Color {
        if self.luminance() > 0.5 {
            Color::rgb(0.1, 0.1, 0.1)
        } else {
            Color::WHITE
        }
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(c: Color) -> Self {
        let [r, g, b, a] = c.to_rgba8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}
