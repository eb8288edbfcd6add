use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::core::actions::compute_escape_time::compute_escape_time::ExecutionMode;
use crate::core::actions::compute_escape_time::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::palette::Palette;
use crate::core::data::resolution::Resolution;
use crate::core::errors::{ConfigurationError, RenderError};
use crate::core::fractals::mandelbrot::algorithm::escape_time_algorithm_factory;
use crate::core::fractals::mandelbrot::classification_kinds::ClassificationKinds;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_palette_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKinds;
use crate::core::fractals::mandelbrot::params::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, EscapeTimeParams,
};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

/// Corners as `[real, imag]` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    pub top_left: [f64; 2],
    pub bottom_right: [f64; 2],
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            top_left: [-2.0, 2.0],
            bottom_right: [2.0, -2.0],
        }
    }
}

/// Startup settings, typically read from a TOML file.
///
/// Every field is optional in the file; missing fields take the defaults below.
/// Nothing is validated until one of the `build_*` accessors is called.
///
/// ```toml
/// width = 1024
/// height = 768
/// max_iterations = 250
/// classification = "iteration_count"
/// palette = "fire_gradient"
///
/// [region]
/// top_left = [-2.5, 1.25]
/// bottom_right = [1.0, -1.25]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MandelbrotConfig {
    pub region: RegionConfig,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub classification: ClassificationKinds,
    pub palette: PaletteKinds,
    /// Explicit `[r, g, b]` entries; replaces `palette` when present.
    pub colours: Option<Vec<[u8; 3]>>,
    pub parallel: bool,
    /// Re-render at the new size whenever the window is resized.
    pub follow_window_size: bool,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: RegionConfig::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            classification: ClassificationKinds::default(),
            palette: PaletteKinds::default(),
            colours: None,
            parallel: true,
            follow_window_size: true,
        }
    }
}

impl MandelbrotConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(source).map_err(|err| ConfigurationError::Parse(err.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        let source = fs::read_to_string(path)
            .map_err(|err| ConfigurationError::Parse(format!("{}: {err}", path.display())))?;

        Self::from_toml_str(&source)
    }

    pub fn initial_region(&self) -> Result<ComplexRect, ConfigurationError> {
        let [a_real, a_imag] = self.region.top_left;
        let [b_real, b_imag] = self.region.bottom_right;

        ComplexRect::new(Complex::new(a_real, a_imag), Complex::new(b_real, b_imag))
    }

    pub fn resolution(&self) -> Result<Resolution, ConfigurationError> {
        Resolution::new(self.width, self.height)
    }

    pub fn escape_time_params(&self) -> Result<EscapeTimeParams, ConfigurationError> {
        EscapeTimeParams::new(self.max_iterations, self.escape_radius)
    }

    pub fn build_engine(&self) -> Result<Arc<dyn EscapeTimeAlgorithm>, ConfigurationError> {
        Ok(escape_time_algorithm_factory(
            self.classification,
            self.escape_time_params()?,
        ))
    }

    pub fn build_palette(&self) -> Result<Palette, RenderError> {
        match &self.colours {
            Some(colours) => Ok(Palette::new(
                colours
                    .iter()
                    .map(|&[r, g, b]| Colour::new(r, g, b))
                    .collect(),
            )?),
            None => mandelbrot_palette_factory(self.palette, self.max_iterations),
        }
    }

    #[must_use]
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Serial
        }
    }
}
