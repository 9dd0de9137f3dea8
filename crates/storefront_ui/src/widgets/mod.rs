// Widget implementations

mod button;
mod column;
mod container;
mod image;
mod row;
mod space;
mod text;

pub use button::{button, Button};
pub use column::{column, Column};
pub use container::{container, Container};
pub use image::{image, Image};
pub use row::{row, Row};
pub use space::{space, Space};
pub use text::{text, Text};

pub use crate::font::FontWeight;
pub use crate::Element;
