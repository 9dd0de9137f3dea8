//! Storefront - a product detail screen with a quantity stepper and live
//! price, hosted in a small native UI toolkit.

pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod price;
pub mod state;
pub mod theme;
pub mod ui_constants;
mod views;

pub use actions::{LoggingActions, OrderLine, ProductActions};
pub use app::{load_hero_image, ProductDetailView};
pub use config::{AppConfig, LogLevel};
pub use error::{AppError, Result};
pub use message::Message;
pub use model::{Product, Rating};
pub use state::ViewState;
