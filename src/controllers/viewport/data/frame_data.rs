use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    /// Escape-time computation only; `None` when an existing grid was recoloured.
    pub compute_duration: Option<Duration>,
}
