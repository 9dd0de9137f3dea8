//! Messages emitted by the product detail screen.

/// User interactions on the product detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Header back button
    Back,
    /// Heart icon in the header
    ToggleFavorite,
    /// Stepper "+"
    Increment,
    /// Stepper "−"
    Decrement,
    AddToCart,
    BuyNow,
}
