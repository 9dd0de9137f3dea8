//! UI constants for consistent styling across the screen.

/// Text size constants.
pub mod text {
    /// "Product Details" header title
    pub const HEADER_TITLE: f32 = 18.0;
    /// Back arrow and heart
    pub const ICON: f32 = 20.0;
    /// Product name in the hero block
    pub const PRODUCT_NAME: f32 = 20.0;
    /// Total price next to the stepper
    pub const PRICE: f32 = 20.0;
    /// Stepper symbols and quantity
    pub const STEPPER: f32 = 18.0;
    /// Section headers ("Description")
    pub const SECTION_HEADER: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    /// Rating, calories and time
    pub const INFO: f32 = 15.0;
    pub const BUTTON: f32 = 16.0;
}

/// Vertical gaps between sections of the card.
pub mod spacing {
    pub const AFTER_HEADER: f32 = 10.0;
    pub const SECTION: f32 = 20.0;
    pub const AFTER_SECTION_HEADER: f32 = 10.0;
    pub const BEFORE_ACTIONS: f32 = 25.0;
    /// Between the hero name and image
    pub const HERO_INNER: f32 = 10.0;
    /// Between stepper symbols and the quantity
    pub const STEPPER_INNER: f32 = 12.0;
    /// Between the two call-to-action buttons
    pub const ACTIONS: f32 = 12.0;
}

/// Padding constants.
pub mod padding {
    /// Outer margin around the card
    pub const SCREEN: f32 = 20.0;
    /// Inside the card
    pub const CARD: f32 = 20.0;
    /// Inside the hero gradient
    pub const HERO: f32 = 15.0;
    /// Inside the stepper pill, `[vertical, horizontal]`
    pub const STEPPER: [f32; 2] = [6.0, 10.0];
    pub const STEPPER_BUTTON: [f32; 2] = [2.0, 6.0];
    pub const BACK_BUTTON: [f32; 2] = [4.0, 10.0];
    pub const ICON_BUTTON: [f32; 2] = [4.0, 4.0];
    /// Call-to-action buttons
    pub const ACTION_BUTTON: [f32; 2] = [14.0, 0.0];
}

/// Corner radii.
pub mod radius {
    pub const CARD: f32 = 16.0;
    pub const HERO: f32 = 16.0;
    pub const IMAGE: f32 = 12.0;
    pub const STEPPER: f32 = 22.0;
    pub const BACK_BUTTON: f32 = 12.0;
    pub const ACTION_BUTTON: f32 = 16.0;
}

/// Hero image constants.
pub mod image {
    pub const HEIGHT: f32 = 180.0;
}

/// Border widths.
pub mod border {
    /// Outline of the "Add to Cart" button
    pub const ACTION_OUTLINE: f32 = 2.0;
}

/// Default window geometry.
pub mod window {
    pub const WIDTH: u32 = 420;
    pub const HEIGHT: u32 = 820;
}

/// Glyphs drawn on the screen.
pub mod glyph {
    pub const BACK: &str = "<";
    pub const FAVORITE_ON: &str = "♥";
    pub const FAVORITE_OFF: &str = "♡";
    pub const INCREMENT: &str = "+";
    pub const DECREMENT: &str = "−";
    pub const RATING: &str = "★";
    pub const CALORIES: &str = "♨";
    pub const TIME: &str = "◷";
}
