use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::controllers::viewport::data::frame_data::FrameData;
use crate::controllers::viewport::events::render::RenderEvent;
use crate::controllers::viewport::ports::render_sink::RenderSink;
use crate::controllers::viewport::ports::timing_sink::TimingSink;
use crate::core::actions::compute_escape_time::compute_escape_time::{
    ExecutionMode, compute_escape_time_with_mode,
};
use crate::core::actions::compute_escape_time::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::colour_grid;
use crate::core::data::classification_grid::ClassificationGrid;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::resolution::Resolution;
use crate::core::errors::RenderError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub struct ViewportModel {
    region: ComplexRect,
    resolution: Resolution,
    palette: Palette,
    engine: Arc<dyn EscapeTimeAlgorithm>,
    execution_mode: ExecutionMode,
    render_sink: Rc<dyn RenderSink>,
    timing_sink: Rc<dyn TimingSink>,
    generation: u64,
    last_grid: Option<ClassificationGrid>,
}

impl ViewportModel {
    /// Creates the model without rendering; call [`ViewportModel::refresh`] for the first frame.
    pub fn new(
        region: ComplexRect,
        resolution: Resolution,
        palette: Palette,
        engine: Arc<dyn EscapeTimeAlgorithm>,
        render_sink: Rc<dyn RenderSink>,
        timing_sink: Rc<dyn TimingSink>,
    ) -> Self {
        Self {
            region,
            resolution,
            palette,
            engine,
            execution_mode: ExecutionMode::default(),
            render_sink,
            timing_sink,
            generation: 0,
            last_grid: None,
        }
    }

    pub fn from_config(
        config: &MandelbrotConfig,
        render_sink: Rc<dyn RenderSink>,
        timing_sink: Rc<dyn TimingSink>,
    ) -> Result<Self, RenderError> {
        let model = Self::new(
            config.initial_region()?,
            config.resolution()?,
            config.build_palette()?,
            config.build_engine()?,
            render_sink,
            timing_sink,
        );

        match &config.colours {
            Some(colours) => info!(
                "Classifying by {} with a custom {}-colour palette",
                config.classification,
                colours.len()
            ),
            None => info!(
                "Classifying by {} with the {} palette",
                config.classification, config.palette
            ),
        }

        Ok(model.with_execution_mode(config.execution_mode()))
    }

    #[must_use]
    pub fn with_execution_mode(mut self, execution_mode: ExecutionMode) -> Self {
        self.execution_mode = execution_mode;
        self
    }

    /// Recomputes the current view. Returns the generation of the new frame.
    pub fn refresh(&mut self) -> Result<u64, RenderError> {
        self.render(self.region, self.resolution)
    }

    pub fn set_region(&mut self, region: ComplexRect) -> Result<u64, RenderError> {
        debug!(
            "Region change requested: {:?} -> {:?}",
            region.top_left(),
            region.bottom_right()
        );

        self.render(region, self.resolution)
    }

    pub fn set_resolution(&mut self, width: u32, height: u32) -> Result<u64, RenderError> {
        let resolution = Resolution::new(width, height)?;

        debug!("Resolution change requested: {width}x{height}");

        self.render(self.region, resolution)
    }

    /// Takes effect on the next render or [`ViewportModel::recolour`].
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Takes effect on the next render.
    pub fn set_engine(&mut self, engine: Arc<dyn EscapeTimeAlgorithm>) {
        self.engine = engine;
    }

    /// Re-colours the last computed grid with the current palette.
    ///
    /// Returns `Ok(None)` when nothing has been rendered yet.
    pub fn recolour(&mut self) -> Result<Option<u64>, RenderError> {
        let Some(grid) = &self.last_grid else {
            return Ok(None);
        };

        let pixel_buffer = colour_grid(grid, &self.palette)?;

        Ok(Some(self.publish(pixel_buffer, None)))
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Generation of the last published frame, 0 before the first one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn last_grid(&self) -> Option<&ClassificationGrid> {
        self.last_grid.as_ref()
    }

    fn render(&mut self, region: ComplexRect, resolution: Resolution) -> Result<u64, RenderError> {
        let start = Instant::now();
        let result = compute_escape_time_with_mode(
            region,
            resolution,
            self.engine.as_ref(),
            self.execution_mode,
        )
        .and_then(|grid| {
            let compute_duration = start.elapsed();
            colour_grid(&grid, &self.palette).map(|pixels| (grid, pixels, compute_duration))
        });

        let (grid, pixel_buffer, compute_duration) = match result {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!("Render of {}x{} failed: {err}", resolution.width(), resolution.height());
                return Err(err);
            }
        };

        self.region = region;
        self.resolution = resolution;
        self.last_grid = Some(grid);
        self.timing_sink
            .calculation_time(compute_duration.as_secs_f64());

        Ok(self.publish(pixel_buffer, Some(compute_duration)))
    }

    fn publish(&mut self, pixel_buffer: PixelBuffer, compute_duration: Option<Duration>) -> u64 {
        self.generation += 1;

        debug!(
            "Presenting generation {} ({} bytes)",
            self.generation,
            pixel_buffer.buffer_size()
        );

        self.render_sink.present(RenderEvent::Frame(FrameData {
            generation: self.generation,
            pixel_buffer,
            compute_duration,
        }));

        self.generation
    }
}
