//! CPU rasteriser used to draw widget trees.
//!
//! Widgets draw in logical pixels; the canvas applies the device scale
//! factor so the same tree renders crisply on HiDPI surfaces.

use std::path::Path;
use std::sync::Arc;

use ab_glyph::{point, Font, PxScale, ScaleFont};
use tiny_skia::{
    FillRule, FilterQuality, GradientStop, LinearGradient, Mask, Paint, Path as SkPath,
    PathBuilder, Pattern, Pixmap, Rect, Shader, SpreadMode, Stroke, Transform,
};

use crate::color::Color;
use crate::error::{Result, UiError};
use crate::font::{self, FontWeight};
use crate::layout::{Bounds, Point};

/// Cubic Bézier handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Fill for a rectangular area.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Background {
    #[default]
    None,
    Solid(Color),
    /// Evenly spaced top-to-bottom gradient.
    VerticalGradient(Vec<Color>),
}

/// Decoded RGBA image (straight alpha), cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    width: u32,
    height: u32,
    rgba: Arc<Vec<u8>>,
}

impl ImageData {
    /// Wrap raw RGBA8 pixels. Returns `None` when the buffer size is wrong.
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 || rgba.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba: Arc::new(rgba),
        })
    }

    /// Decode an image file (PNG or JPEG).
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Self::from_rgba8(width, height, decoded.into_raw())
            .ok_or_else(|| UiError::EmptyImage(path.display().to_string()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn to_pixmap(&self) -> Option<Pixmap> {
        let mut pixmap = Pixmap::new(self.width, self.height)?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(self.rgba.chunks_exact(4)) {
            *dst = tiny_skia::ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }
        Some(pixmap)
    }
}

/// A drawing surface backed by a tiny-skia pixmap.
pub struct Canvas {
    pixmap: Pixmap,
    scale: f32,
}

impl Canvas {
    /// Create a canvas of `width` x `height` physical pixels.
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(UiError::CanvasSize(width, height))?;
        Ok(Self {
            pixmap,
            scale: if scale.is_finite() && scale > 0.0 { scale } else { 1.0 },
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Canvas size in logical pixels.
    pub fn logical_size(&self) -> crate::layout::Size {
        crate::layout::Size::new(
            self.width() as f32 / self.scale,
            self.height() as f32 / self.scale,
        )
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.into());
    }

    /// Fill a rectangle, optionally with rounded corners.
    pub fn fill(&mut self, bounds: Bounds, radius: f32, background: &Background) {
        let Some(path) = rounded_rect(bounds, radius) else {
            return;
        };
        let shader = match background {
            Background::None => return,
            Background::Solid(color) => Shader::SolidColor((*color).into()),
            Background::VerticalGradient(colors) => match vertical_gradient(bounds, colors) {
                Some(shader) => shader,
                None => return,
            },
        };
        let paint = Paint {
            shader,
            anti_alias: true,
            ..Paint::default()
        };
        let transform = self.transform();
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, transform, None);
    }

    /// Stroke the outline of a (rounded) rectangle, inset so the stroke stays inside `bounds`.
    pub fn stroke(&mut self, bounds: Bounds, radius: f32, color: Color, width: f32) {
        let half = width / 2.0;
        let inset = Bounds::new(
            bounds.x + half,
            bounds.y + half,
            bounds.width - width,
            bounds.height - width,
        );
        let Some(path) = rounded_rect(inset, (radius - half).max(0.0)) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color.into());
        paint.anti_alias = true;
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        let transform = self.transform();
        self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }

    /// Draw an image scaled to cover `bounds`, clipped to rounded corners.
    pub fn draw_image(&mut self, image: &ImageData, bounds: Bounds, radius: f32) {
        let (Some(path), Some(source)) = (rounded_rect(bounds, radius), image.to_pixmap()) else {
            return;
        };
        let sx = bounds.width / image.width as f32;
        let sy = bounds.height / image.height as f32;
        let cover = sx.max(sy);
        let tx = bounds.x + (bounds.width - image.width as f32 * cover) / 2.0;
        let ty = bounds.y + (bounds.height - image.height as f32 * cover) / 2.0;

        let paint = Paint {
            shader: Pattern::new(
                source.as_ref(),
                SpreadMode::Pad,
                FilterQuality::Bilinear,
                1.0,
                Transform::from_row(cover, 0.0, 0.0, cover, tx, ty),
            ),
            anti_alias: true,
            ..Paint::default()
        };
        let transform = self.transform();
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, transform, None);
    }

    /// Draw one line of text with its top-left corner at `origin`.
    pub fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        size: f32,
        weight: FontWeight,
        color: Color,
    ) {
        let Some(fonts) = font::fonts() else {
            return;
        };
        if text.is_empty() {
            return;
        }
        let face = fonts.face(weight);
        let px = size * self.scale;
        let scaled = face.as_scaled(PxScale::from(px));

        // Center the glyph box inside the line box used for layout.
        let line_px = font::text_line_height(size) * self.scale;
        let glyph_px = scaled.ascent() - scaled.descent();
        let baseline = origin.y * self.scale + (line_px - glyph_px) / 2.0 + scaled.ascent();

        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let Some(mut mask) = Mask::new(width, height) else {
            return;
        };
        let coverage = mask.data_mut();
        let mut min = (width as i32, height as i32);
        let mut max = (0i32, 0i32);

        let mut caret = origin.x * self.scale;
        let mut prev = None;
        for ch in text.chars() {
            let id = face.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(px, point(caret, baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            let Some(outlined) = face.outline_glyph(glyph) else {
                continue;
            };
            let glyph_bounds = outlined.px_bounds();
            let left = glyph_bounds.min.x as i32;
            let top = glyph_bounds.min.y as i32;
            outlined.draw(|gx, gy, c| {
                let x = left + gx as i32;
                let y = top + gy as i32;
                if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                    return;
                }
                let idx = y as usize * width as usize + x as usize;
                let value = (c.clamp(0.0, 1.0) * 255.0) as u8;
                coverage[idx] = coverage[idx].max(value);
                min = (min.0.min(x), min.1.min(y));
                max = (max.0.max(x + 1), max.1.max(y + 1));
            });
        }

        if max.0 <= min.0 || max.1 <= min.1 {
            return;
        }
        let Some(rect) = Rect::from_ltrb(min.0 as f32, min.1 as f32, max.0 as f32, max.1 as f32)
        else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color.into());
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), Some(&mask));
    }

    /// Straight-alpha RGBA8 copy of the pixels.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    /// Color of one physical pixel, for inspection in tests and snapshots.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Encode the canvas as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let buffer = image::RgbaImage::from_raw(self.width(), self.height(), self.to_rgba8())
            .ok_or(UiError::CanvasSize(self.width(), self.height()))?;
        buffer.save(path)?;
        Ok(())
    }
}

fn vertical_gradient(bounds: Bounds, colors: &[Color]) -> Option<Shader<'static>> {
    match colors {
        [] => None,
        [single] => Some(Shader::SolidColor((*single).into())),
        _ => {
            let last = (colors.len() - 1) as f32;
            let stops = colors
                .iter()
                .enumerate()
                .map(|(i, c)| GradientStop::new(i as f32 / last, (*c).into()))
                .collect();
            LinearGradient::new(
                tiny_skia::Point::from_xy(bounds.x, bounds.y),
                tiny_skia::Point::from_xy(bounds.x, bounds.bottom()),
                stops,
                SpreadMode::Pad,
                Transform::identity(),
            )
        }
    }
}

/// Rounded rectangle path; `None` for empty or non-finite bounds.
fn rounded_rect(bounds: Bounds, radius: f32) -> Option<SkPath> {
    let Bounds {
        x,
        y,
        width: w,
        height: h,
    } = bounds;
    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(Rect::from_xywh(x, y, w, h)?));
    }
    let k = KAPPA * r;
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_canvas_is_rejected() {
        assert!(matches!(Canvas::new(0, 10, 1.0), Err(UiError::CanvasSize(0, 10))));
    }

    #[test]
    fn test_solid_fill_covers_bounds() {
        let mut canvas = Canvas::new(20, 20, 1.0).unwrap();
        canvas.clear(Color::WHITE);
        let red = Color::rgb(1.0, 0.0, 0.0);
        canvas.fill(Bounds::new(5.0, 5.0, 10.0, 10.0), 0.0, &Background::Solid(red));

        assert_eq!(canvas.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(2, 2), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_rounded_corners_leave_corner_pixels() {
        let mut canvas = Canvas::new(40, 40, 1.0).unwrap();
        canvas.clear(Color::WHITE);
        canvas.fill(
            Bounds::new(0.0, 0.0, 40.0, 40.0),
            16.0,
            &Background::Solid(Color::BLACK),
        );
        assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(20, 20), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_scale_factor_applies_to_geometry() {
        let mut canvas = Canvas::new(40, 40, 2.0).unwrap();
        canvas.clear(Color::WHITE);
        canvas.fill(
            Bounds::new(0.0, 0.0, 10.0, 10.0),
            0.0,
            &Background::Solid(Color::BLACK),
        );
        assert_eq!(canvas.logical_size(), crate::layout::Size::new(20.0, 20.0));
        assert_eq!(canvas.pixel(15, 15), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(25, 25), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_vertical_gradient_runs_top_to_bottom() {
        let mut canvas = Canvas::new(10, 100, 1.0).unwrap();
        canvas.fill(
            Bounds::new(0.0, 0.0, 10.0, 100.0),
            0.0,
            &Background::VerticalGradient(vec![Color::BLACK, Color::WHITE]),
        );
        let top = canvas.pixel(5, 1).unwrap();
        let bottom = canvas.pixel(5, 98).unwrap();
        assert!(top[0] < 20);
        assert!(bottom[0] > 235);
    }

    #[test]
    fn test_image_covers_bounds() {
        let green = [0u8, 255, 0, 255].repeat(4);
        let image = ImageData::from_rgba8(2, 2, green).unwrap();
        let mut canvas = Canvas::new(20, 20, 1.0).unwrap();
        canvas.clear(Color::WHITE);
        canvas.draw_image(&image, Bounds::new(0.0, 0.0, 20.0, 10.0), 0.0);

        assert_eq!(canvas.pixel(10, 5), Some([0, 255, 0, 255]));
        assert_eq!(canvas.pixel(10, 15), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_image_data_validates_buffer() {
        assert!(ImageData::from_rgba8(2, 2, vec![0; 15]).is_none());
        assert!(ImageData::from_rgba8(0, 2, vec![]).is_none());
    }

    #[test]
    fn test_save_png_round_trips_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut canvas = Canvas::new(8, 4, 1.0).unwrap();
        canvas.clear(Color::BLACK);
        canvas.save_png(&path).unwrap();

        let loaded = ImageData::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (8, 4));
    }
}
