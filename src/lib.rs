//! Escape-time Mandelbrot renderer with rubber-band zoom.
//!
//! The [`ViewportModel`] owns the visible region of the complex plane and renders
//! it on demand; a [`ZoomController`] turns completed rubber-band gestures into
//! new regions. Frames and timings leave through the ports in
//! [`controllers::viewport::ports`].

pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use controllers::selection::{PointerEvent, RubberBandEvent, RubberBandSelector, RubberBandState};
pub use controllers::viewport::ViewportModel;
pub use controllers::zoom::ZoomController;
pub use crate::core::errors::{AllocationError, ConfigurationError, RenderError};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
pub use presenters::log::frames::LogRenderSink;
pub use presenters::log::timing::LogTimingSink;
