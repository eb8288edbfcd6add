//! Render and timing sinks.

pub mod log;
#[cfg(feature = "gui")]
pub mod pixels;
