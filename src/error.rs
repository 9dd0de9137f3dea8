//! Application-level errors.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors surfaced by the storefront binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A product file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A product file is not valid JSON
    #[error("Invalid product file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Window, GPU or rendering failure
    #[error(transparent)]
    Ui(#[from] storefront_ui::UiError),
}

pub type Result<T> = std::result::Result<T, AppError>;
