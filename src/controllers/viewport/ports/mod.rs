//! Outputs of the viewport: finished frames and calculation timings.

pub mod render_sink;
pub mod timing_sink;
