//! View modules.
//!
//! - product_detail: the product detail screen

mod product_detail;

pub use product_detail::{view_product_detail, DetailViewModel};
