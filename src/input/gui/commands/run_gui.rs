use std::error::Error;
use std::rc::Rc;

use log::{error, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use crate::controllers::selection::PointerEvent;
use crate::controllers::viewport::ViewportModel;
use crate::controllers::viewport::ports::render_sink::RenderSink;
use crate::controllers::zoom::ZoomController;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::presenters::log::timing::LogTimingSink;
use crate::presenters::pixels::PixelsPresenter;

const WINDOW_TITLE: &str = "Mandelbrot Set";

pub struct RunGuiCommand {
    config: MandelbrotConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let resolution = self.config.resolution()?;
        let follow_window_size = self.config.follow_window_size;

        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window handle
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(resolution.width(), resolution.height()))
                .build(&event_loop)?,
        ));

        let presenter = Rc::new(PixelsPresenter::new(window, resolution)?);
        let viewport = ViewportModel::from_config(
            &self.config,
            Rc::clone(&presenter) as Rc<dyn RenderSink>,
            Rc::new(LogTimingSink),
        )?;
        let mut controller =
            ZoomController::new(viewport).with_follow_widget_size(follow_window_size);

        let size = window.inner_size();
        if follow_window_size && (size.width, size.height) != (resolution.width(), resolution.height()) {
            controller.resize_widget(size.width, size.height)?;
        } else {
            controller.viewport_mut().refresh()?;
        }

        info!(
            "Window open at {}x{}; drag with the left button to zoom",
            size.width, size.height
        );

        let mut cursor = Point::default();

        event_loop.run(move |event, elwt| {
            let Event::WindowEvent { event, window_id } = event else {
                return;
            };

            if window_id != window.id() {
                return;
            }

            let pointer = match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    None
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = presenter.draw(controller.selector().preview()) {
                        error!("Render error: {err}");
                        elwt.exit();
                    }
                    None
                }
                WindowEvent::Resized(size) => {
                    if size.width > 0 && size.height > 0 {
                        if let Err(err) = resize(&presenter, &mut controller, size, follow_window_size) {
                            warn!("Resize to {}x{} failed: {err}", size.width, size.height);
                        }
                        window.request_redraw();
                    }
                    None
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = presenter.window_pos_to_pixel(position.x, position.y);
                    Some(PointerEvent::Move(cursor))
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => Some(PointerEvent::Down(cursor)),
                    ElementState::Released => Some(PointerEvent::Up(cursor)),
                },
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(NamedKey::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    if controller.cancel_selection() {
                        window.request_redraw();
                    }
                    None
                }
                _ => None,
            };

            if let Some(pointer) = pointer {
                match controller.handle_pointer(pointer) {
                    Ok(Some(_)) => window.request_redraw(),
                    Ok(None) => {}
                    Err(err) => warn!("Zoom failed: {err}"),
                }
            }
        })?;

        Ok(())
    }
}

fn resize(
    presenter: &PixelsPresenter,
    controller: &mut ZoomController,
    size: PhysicalSize<u32>,
    follow_window_size: bool,
) -> Result<(), Box<dyn Error>> {
    presenter.resize_surface(size.width, size.height)?;

    // pointer positions arrive in framebuffer pixels, which only track the
    // window while following it
    if follow_window_size {
        controller.resize_widget(size.width, size.height)?;
    }

    Ok(())
}
