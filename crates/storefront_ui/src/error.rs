use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("GPU error: {0}")]
    Gpu(#[from] storefront_gpu::GpuError),

    #[error("Invalid canvas size {0}x{1}")]
    CanvasSize(u32, u32),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image has no pixels: {0}")]
    EmptyImage(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
