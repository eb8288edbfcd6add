use std::cell::Cell;

use log::info;

use crate::controllers::viewport::events::render::RenderEvent;
use crate::controllers::viewport::ports::render_sink::RenderSink;

/// Headless sink: logs each frame and remembers the newest generation seen.
#[derive(Debug, Default)]
pub struct LogRenderSink {
    last_generation: Cell<u64>,
    frames_presented: Cell<usize>,
}

impl LogRenderSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.last_generation.get()
    }

    #[must_use]
    pub fn frames_presented(&self) -> usize {
        self.frames_presented.get()
    }
}

impl RenderSink for LogRenderSink {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                let resolution = frame.pixel_buffer.resolution();

                info!(
                    "Frame {}: {}x{} ({} bytes)",
                    frame.generation,
                    resolution.width(),
                    resolution.height(),
                    frame.pixel_buffer.buffer_size()
                );

                self.last_generation
                    .set(self.last_generation.get().max(frame.generation));
                self.frames_presented.set(self.frames_presented.get() + 1);
            }
        }
    }
}
