//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, LogLevel};

/// Show a product detail screen.
#[derive(Debug, Parser)]
#[command(name = "storefront-native", version, about)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Product JSON file (defaults to the built-in sample)
    #[arg(long, value_name = "PATH")]
    pub product: Option<PathBuf>,

    /// Render one frame to this PNG instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Window or snapshot width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window or snapshot height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Device pixel ratio for snapshots
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Override the configured log level
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Fold command line overrides into a loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(product) = &self.product {
            config.product = Some(product.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "storefront-native",
            "--width",
            "500",
            "--log-level",
            "debug",
            "--product",
            "waffles.json",
        ]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, AppConfig::default().window.height);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.product, Some(PathBuf::from("waffles.json")));
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["storefront-native"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, AppConfig::default());
        assert_eq!(cli.scale, 1.0);
        assert!(cli.snapshot.is_none());
    }
}
