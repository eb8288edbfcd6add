//! Rubber-band selection over the rendered image.

pub mod events;
mod selector;

pub use events::pointer::PointerEvent;
pub use events::rubber_band::RubberBandEvent;
pub use selector::{RubberBandSelector, RubberBandState};
