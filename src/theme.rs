//! Color palette of the product detail screen.

use storefront_ui::{Background, Color};

/// Parse a palette entry. Entries are literals covered by tests.
fn hex(code: &str) -> Color {
    Color::from_hex(code).unwrap_or(Color::BLACK)
}

/// Warm palette used by the product detail screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme;

impl Theme {
    /// Window background behind the card.
    pub fn background_color(&self) -> Color {
        Color::WHITE
    }

    /// Card surface.
    pub fn card_color(&self) -> Color {
        hex("#f7f7f7")
    }

    /// Primary text.
    pub fn text_color(&self) -> Color {
        hex("#222222")
    }

    /// Description and secondary text.
    pub fn secondary_text_color(&self) -> Color {
        hex("#555555")
    }

    /// Stepper pill, buy button and outline of the cart button.
    pub fn accent_color(&self) -> Color {
        hex("#F2C94C")
    }

    /// Label of the outlined cart button.
    pub fn accent_text_color(&self) -> Color {
        hex("#C59B2A")
    }

    /// Label on accent backgrounds.
    pub fn on_accent_text_color(&self) -> Color {
        hex("#333333")
    }

    /// Filled heart.
    pub fn favorite_color(&self) -> Color {
        hex("#E03A4E")
    }

    /// Outline heart and back arrow.
    pub fn icon_color(&self) -> Color {
        hex("#444444")
    }

    /// Three-stop gradient behind the product name and image.
    pub fn hero_background(&self) -> Background {
        Background::VerticalGradient(vec![
            hex("#FFE8A3"),
            hex("#FFF1C9"),
            hex("#FFF6DD"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_stylesheet() {
        let theme = Theme;
        assert_eq!(theme.accent_color().to_rgba8(), [0xF2, 0xC9, 0x4C, 255]);
        assert_eq!(theme.accent_text_color().to_rgba8(), [0xC5, 0x9B, 0x2A, 255]);
        assert_eq!(theme.card_color().to_rgba8(), [0xf7, 0xf7, 0xf7, 255]);
        assert_eq!(theme.secondary_text_color().to_rgba8(), [0x55, 0x55, 0x55, 255]);
    }

    #[test]
    fn test_every_palette_entry_parses() {
        let theme = Theme;
        let Background::VerticalGradient(stops) = theme.hero_background() else {
            panic!("hero background should be a gradient");
        };
        let mut colors = vec![
            theme.card_color(),
            theme.text_color(),
            theme.secondary_text_color(),
            theme.accent_color(),
            theme.accent_text_color(),
            theme.on_accent_text_color(),
            theme.favorite_color(),
            theme.icon_color(),
        ];
        colors.extend(stops.iter().copied());
        // A failed parse would fall back to opaque black.
        for color in colors {
            assert_ne!(color.to_rgba8(), [0, 0, 0, 255]);
        }
        assert_eq!(stops[0].to_rgba8(), [0xFF, 0xE8, 0xA3, 255]);
    }
}
