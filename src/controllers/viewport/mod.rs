//! Viewport state and render orchestration.
//!
//! The [`ViewportModel`] owns the current region, resolution, palette and
//! classification strategy. Changing the region or resolution recomputes the
//! image synchronously and hands the finished frame to a [`ports::render_sink::RenderSink`].

pub mod data;
pub mod events;
mod model;
pub mod ports;

pub use model::ViewportModel;
