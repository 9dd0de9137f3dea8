//! storefront_ui - a small retained widget toolkit for single-screen apps.
//!
//! Views are rebuilt from application state after every message, laid out in
//! logical pixels, rasterised on the CPU with tiny-skia and presented through
//! `storefront_gpu`.

mod application;
mod canvas;
mod color;
pub mod constants;
mod element;
mod error;
mod event;
pub mod font;
mod layout;
mod runtime;
pub mod snapshot;
mod widget;
pub mod widgets;

pub use application::{run, Application, Settings};
pub use canvas::{Background, Canvas, ImageData};
pub use color::Color;
pub use element::Element;
pub use error::{Result, UiError};
pub use event::{Event, MouseButton};
pub use layout::{Alignment, Bounds, Justify, Length, Padding, Point, Size};
pub use runtime::{TextNode, UiState};
pub use widget::Widget;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, Settings};
    pub use crate::canvas::{Background, ImageData};
    pub use crate::color::Color;
    pub use crate::element::Element;
    pub use crate::layout::{Alignment, Justify, Length, Padding, Size};
    pub use crate::widgets::{button, column, container, image, row, space, text, FontWeight};
}
