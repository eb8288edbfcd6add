use std::cell::{Cell, RefCell};

use log::{debug, warn};
use pixels::{Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::adapters::pixel_format::{copy_rgb_to_rgba, invert_rect_outline};
use crate::controllers::viewport::events::render::RenderEvent;
use crate::controllers::viewport::ports::render_sink::RenderSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::selection_rect::SelectionRect;

/// Shows the newest frame in a `pixels` framebuffer scaled to the window.
///
/// Frames are kept as delivered and blitted on every redraw so the rubber-band
/// overlay can be painted over a clean image. The framebuffer takes the size of
/// each accepted frame, never the window's.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: RefCell<Pixels<'static>>,
    buffer_size: Cell<(u32, u32)>,
    frame: RefCell<Option<PixelBuffer>>,
    last_presented_generation: Cell<u64>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, resolution: Resolution) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(resolution.width(), resolution.height(), surface_texture)?;

        Ok(Self {
            window,
            pixels: RefCell::new(pixels),
            buffer_size: Cell::new((resolution.width(), resolution.height())),
            frame: RefCell::new(None),
            last_presented_generation: Cell::new(0),
        })
    }

    pub fn resize_surface(&self, width: u32, height: u32) -> Result<(), TextureError> {
        self.pixels.borrow_mut().resize_surface(width, height)
    }

    fn resize_buffer(&self, width: u32, height: u32) -> Result<(), TextureError> {
        self.pixels.borrow_mut().resize_buffer(width, height)?;
        self.buffer_size.set((width, height));
        Ok(())
    }

    /// Converts a physical window position to framebuffer pixels.
    ///
    /// Positions over the letterbox margins map outside the image rather than
    /// being clamped, so a drag can start or end past the picture's edge.
    #[must_use]
    pub fn window_pos_to_pixel(&self, x: f64, y: f64) -> Point {
        let (px, py) = match self
            .pixels
            .borrow()
            .window_pos_to_pixel((x as f32, y as f32))
        {
            Ok((px, py)) => (px as isize, py as isize),
            Err(outside) => outside,
        };

        Point::new(clamp_to_i32(px), clamp_to_i32(py))
    }

    pub fn draw(&self, overlay: Option<SelectionRect>) -> Result<(), pixels::Error> {
        let (width, height) = self.buffer_size.get();
        let mut pixels = self.pixels.borrow_mut();
        let target = pixels.frame_mut();

        let copied = match self.frame.borrow().as_ref() {
            Some(frame) => match copy_rgb_to_rgba(frame.buffer(), target) {
                Ok(()) => true,
                Err(err) => {
                    debug!("Frame does not fit the framebuffer: {err}");
                    false
                }
            },
            None => false,
        };

        if !copied {
            for pixel in target.chunks_exact_mut(4) {
                pixel.copy_from_slice(&[0, 0, 0, 255]);
            }
        }

        if let Some(rect) = overlay {
            invert_rect_outline(target, width, height, rect);
        }

        pixels.render()
    }
}

impl RenderSink for PixelsPresenter {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation <= self.last_presented_generation.get() {
                    debug!("Dropping stale frame {}", frame.generation);
                    return;
                }

                let resolution = frame.pixel_buffer.resolution();
                let size = (resolution.width(), resolution.height());
                if size != self.buffer_size.get() {
                    if let Err(err) = self.resize_buffer(size.0, size.1) {
                        warn!("Keeping previous frame, framebuffer resize to {}x{} failed: {err}", size.0, size.1);
                        return;
                    }
                }

                self.last_presented_generation.set(frame.generation);
                *self.frame.borrow_mut() = Some(frame.pixel_buffer);
                self.window.request_redraw();
            }
        }
    }
}

fn clamp_to_i32(value: isize) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
