//! Windowed front end: winit for the window and input, pixels for the framebuffer.
//!
//! Left-button drags draw a rubber band over the image and zoom into it on
//! release. Escape abandons a drag in progress.

pub mod commands;

pub use commands::run_gui::RunGuiCommand;
