//! Product data model.

mod image_ref;
mod product;

pub use image_ref::ImageRef;
pub use product::{Product, Rating};
