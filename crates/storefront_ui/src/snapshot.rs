//! Headless rendering to PNG, without a window or GPU.

use std::path::Path;

use crate::application::Application;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::layout::Size;
use crate::runtime::UiState;

/// Rasterise the current view of `ui` at the given device scale.
pub fn render<A: Application>(ui: &UiState<A>, scale: f32) -> Result<Canvas> {
    let viewport = ui.viewport();
    let width = (viewport.width * scale).round().max(0.0) as u32;
    let height = (viewport.height * scale).round().max(0.0) as u32;
    let mut canvas = Canvas::new(width, height, scale)?;
    ui.render(&mut canvas);
    Ok(canvas)
}

/// Render `app` at a logical `width` x `height` and write a PNG to `path`.
pub fn render_png<A: Application>(
    app: A,
    width: u32,
    height: u32,
    scale: f32,
    path: &Path,
) -> Result<()> {
    let ui = UiState::new(app, Size::new(width as f32, height as f32));
    let canvas = render(&ui, scale)?;
    canvas.save_png(path)?;
    log::info!(
        "Wrote {}x{} snapshot to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
