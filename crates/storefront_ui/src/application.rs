//! Application trait and the native window runner.

use std::sync::Arc;

use storefront_gpu::{ClearColor, GpuConfig, Presenter};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::element::Element;
use crate::error::{Result, UiError};
use crate::event::{Event, MouseButton};
use crate::layout::{Point, Size};
use crate::runtime::UiState;

/// Core application trait, in the Elm style: state is changed only by
/// messages, and the view is a pure function of state.
pub trait Application {
    /// Messages produced by widgets.
    type Message: Clone + std::fmt::Debug + 'static;

    /// Window title.
    fn title(&self) -> String;

    /// Update state in response to a message.
    fn update(&mut self, message: Self::Message);

    /// Produce the view tree for the current state.
    fn view(&self) -> Element<Self::Message>;

    /// Color behind the view tree.
    fn background(&self) -> Color {
        Color::WHITE
    }
}

/// Settings for running an application.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Window title (overrides `Application::title` when set)
    pub window_title: Option<String>,
    /// Initial window size in logical pixels
    pub window_size: (u32, u32),
    /// Smallest size the window may be resized to
    pub min_window_size: Option<(u32, u32)>,
    pub resizable: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (420, 820),
            min_window_size: Some((320, 480)),
            resizable: true,
        }
    }
}

impl Settings {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window_title = Some(title.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// Run an application in a native window until it is closed.
pub fn run<A: Application + 'static>(app: A, settings: Settings) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let (width, height) = settings.window_size;
    let mut runner = Runner {
        ui: UiState::new(app, Size::new(width as f32, height as f32)),
        settings,
        window: None,
        presenter: None,
        cursor: Point::ZERO,
        error: None,
    };

    event_loop.run_app(&mut runner)?;

    match runner.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct Runner<A: Application> {
    ui: UiState<A>,
    settings: Settings,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    /// Last cursor position in logical pixels
    cursor: Point,
    /// First fatal error; reported once the loop exits
    error: Option<UiError>,
}

impl<A: Application> Runner<A> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: UiError) {
        log::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let title = self
            .settings
            .window_title
            .clone()
            .unwrap_or_else(|| self.ui.app().title());
        let (width, height) = self.settings.window_size;

        let mut attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(self.settings.resizable);
        if let Some((min_w, min_h)) = self.settings.min_window_size {
            attributes = attributes.with_min_inner_size(LogicalSize::new(min_w, min_h));
        }

        let window = Arc::new(event_loop.create_window(attributes)?);
        let background = self.ui.app().background();
        let gpu_config = GpuConfig::default().with_clear_color(ClearColor::rgb(
            background.r as f64,
            background.g as f64,
            background.b as f64,
        ));
        let presenter = pollster::block_on(Presenter::new(window.clone(), gpu_config))?;

        self.sync_viewport(&window, window.inner_size());
        window.request_redraw();
        self.window = Some(window);
        self.presenter = Some(presenter);
        Ok(())
    }

    fn sync_viewport(&mut self, window: &Window, size: PhysicalSize<u32>) {
        let logical: LogicalSize<f32> = size.to_logical(window.scale_factor());
        self.ui.resize(Size::new(logical.width, logical.height));
    }

    fn redraw(&mut self) -> Result<()> {
        let (Some(window), Some(presenter)) = (&self.window, &mut self.presenter) else {
            return Ok(());
        };
        let (width, height) = presenter.size();
        let mut canvas = Canvas::new(width, height, window.scale_factor() as f32)?;
        self.ui.render(&mut canvas);
        presenter.present(&canvas.to_rgba8(), width, height)?;
        Ok(())
    }

    fn input(&mut self, event: Event) {
        self.ui.handle_event(&event);
        // Hover and press feedback needs a repaint even without a message.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl<A: Application> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(size.width, size.height);
                }
                if let Some(window) = self.window.clone() {
                    self.sync_viewport(&window, size);
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let Some(scale) = self.window.as_ref().map(|w| w.scale_factor()) else {
                    return;
                };
                let logical = position.to_logical::<f32>(scale);
                self.cursor = Point::new(logical.x, logical.y);
                self.input(Event::MouseMoved {
                    position: self.cursor,
                });
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Other(n) => MouseButton::Other(n),
                    _ => return,
                };
                let position = self.cursor;
                let event = match state {
                    ElementState::Pressed => Event::MousePressed { button, position },
                    ElementState::Released => Event::MouseReleased { button, position },
                };
                self.input(event);
            }
            _ => {}
        }
    }
}
