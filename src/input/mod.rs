//! Input adapters.

#[cfg(feature = "gui")]
pub mod gui;
