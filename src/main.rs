//! Native entry point.

use std::path::Path;

use clap::Parser;
use storefront::cli::Cli;
use storefront::{load_hero_image, AppConfig, Product, ProductDetailView, Result};
use storefront_ui::{snapshot, Settings};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let product = match &config.product {
        Some(path) => Product::load(path)?,
        None => Product::sample(),
    };
    let base_dir = config.product.as_deref().and_then(Path::parent);
    let hero = load_hero_image(&product, base_dir);

    let view = ProductDetailView::with_logging(product)
        .currency_symbol(config.currency_symbol.as_str())
        .hero_image(hero);

    if let Some(path) = &cli.snapshot {
        snapshot::render_png(
            view,
            config.window.width,
            config.window.height,
            cli.scale,
            path,
        )?;
        return Ok(());
    }

    let settings = Settings::default()
        .size(config.window.width, config.window.height)
        .resizable(config.window.resizable);
    storefront_ui::run(view, settings)?;
    Ok(())
}
