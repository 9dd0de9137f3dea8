//! System font discovery and text measurement.
//!
//! Fonts are looked up once per process and shared. When no font can be
//! found, measurement falls back to the approximation constants and text is
//! simply not drawn.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};

use crate::constants::{char_width, line_height};

/// Environment variable naming a TTF/OTF file to use instead of system fonts.
pub const FONT_ENV_VAR: &str = "STOREFRONT_FONT";

const REGULAR_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BOLD_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Font weight for text runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Loaded font faces.
pub struct Fonts {
    regular: FontArc,
    bold: Option<FontArc>,
}

impl Fonts {
    /// Face for the given weight, falling back to regular.
    pub fn face(&self, weight: FontWeight) -> &FontArc {
        match weight {
            FontWeight::Bold => self.bold.as_ref().unwrap_or(&self.regular),
            FontWeight::Regular => &self.regular,
        }
    }
}

static FONTS: OnceLock<Option<Fonts>> = OnceLock::new();

/// Shared fonts, loaded on first use.
pub fn fonts() -> Option<&'static Fonts> {
    FONTS.get_or_init(load_fonts).as_ref()
}

fn load_fonts() -> Option<Fonts> {
    let override_path = std::env::var_os(FONT_ENV_VAR).map(PathBuf::from);

    let regular = override_path
        .as_deref()
        .and_then(load_font)
        .or_else(|| first_loadable(REGULAR_CANDIDATES));

    let Some(regular) = regular else {
        log::warn!(
            "No usable system font found; text will not be drawn. Set {} to a TTF file.",
            FONT_ENV_VAR
        );
        return None;
    };

    // An explicit override is used for every weight.
    let bold = if override_path.is_some() {
        None
    } else {
        first_loadable(BOLD_CANDIDATES)
    };

    Some(Fonts { regular, bold })
}

fn first_loadable(candidates: &[&str]) -> Option<FontArc> {
    candidates.iter().find_map(|path| load_font(Path::new(path)))
}

fn load_font(path: &Path) -> Option<FontArc> {
    let data = std::fs::read(path).ok()?;
    match FontArc::try_from_vec(data) {
        Ok(font) => {
            log::debug!("Loaded font {}", path.display());
            Some(font)
        }
        Err(e) => {
            log::warn!("Failed to parse font {}: {}", path.display(), e);
            None
        }
    }
}

/// Width of a single line of text.
pub fn text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    match fonts() {
        Some(fonts) => measure_with(fonts.face(weight), text, size),
        None => text.chars().count() as f32 * char_width(size),
    }
}

fn measure_with(font: &FontArc, text: &str, size: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0;
    let mut prev = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = prev {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }
    width
}

/// Height of one line of text.
pub fn text_line_height(size: f32) -> f32 {
    line_height(size)
}

/// Break text into lines no wider than `max_width`.
///
/// Words longer than the width are kept whole on their own line. Explicit
/// newlines are honoured.
pub fn wrap_lines(text: &str, size: f32, weight: FontWeight, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", current, word);
            if text_width(&candidate, size, weight) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_grows_with_content() {
        let short = text_width("ab", 14.0, FontWeight::Regular);
        let long = text_width("abcdef", 14.0, FontWeight::Regular);
        assert!(long > short);
        assert_eq!(text_width("", 14.0, FontWeight::Bold), 0.0);
    }

    #[test]
    fn test_wrap_respects_width() {
        let text = "This vibrant and fruity addition brings a burst of flavor";
        let max_width = text_width("vibrant and fruity", 14.0, FontWeight::Regular);
        let lines = wrap_lines(text, 14.0, FontWeight::Regular, max_width);

        assert!(lines.len() > 1);
        for line in &lines {
            let single_word = !line.contains(' ');
            assert!(single_word || text_width(line, 14.0, FontWeight::Regular) <= max_width);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_keeps_long_words_and_newlines() {
        let lines = wrap_lines("a\nsupercalifragilistic b", 14.0, FontWeight::Regular, 1.0);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }
}
