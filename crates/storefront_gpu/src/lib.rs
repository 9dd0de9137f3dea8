//! storefront_gpu - presents CPU-rasterised frames in a window through wgpu.

pub mod bindings;
pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod texture;
pub mod vertex;

pub use config::{ClearColor, GpuConfig, TextureConfig};
pub use context::GpuContext;
pub use error::{GpuError, Result};
pub use pipeline::{FramePipeline, Presenter};
pub use texture::Texture;
pub use vertex::Vertex;
