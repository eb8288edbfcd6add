use std::sync::Arc;

use crate::core::actions::compute_escape_time::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::classification_kinds::ClassificationKinds;
use crate::core::fractals::mandelbrot::params::EscapeTimeParams;

/// Iterates `z ← z² + c` from zero and returns the 1-based step at which
/// `|z|` first exceeds the escape radius, or `None` if it never does within
/// `max_iterations` steps.
#[must_use]
pub fn escape_iteration(c: Complex, params: EscapeTimeParams) -> Option<u32> {
    let radius_squared = params.escape_radius() * params.escape_radius();
    let mut z = Complex::ZERO;

    for iteration in 1..=params.max_iterations() {
        z = z * z + c;
        if z.magnitude_squared() > radius_squared {
            return Some(iteration);
        }
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryEscape {
    params: EscapeTimeParams,
}

impl BinaryEscape {
    #[must_use]
    pub fn new(params: EscapeTimeParams) -> Self {
        Self { params }
    }
}

impl EscapeTimeAlgorithm for BinaryEscape {
    fn classify(&self, c: Complex) -> u32 {
        u32::from(escape_iteration(c, self.params).is_some())
    }

    fn kind(&self) -> ClassificationKinds {
        ClassificationKinds::Binary
    }

    fn max_iterations(&self) -> u32 {
        self.params.max_iterations()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeIterationCount {
    params: EscapeTimeParams,
}

impl EscapeIterationCount {
    #[must_use]
    pub fn new(params: EscapeTimeParams) -> Self {
        Self { params }
    }
}

impl EscapeTimeAlgorithm for EscapeIterationCount {
    fn classify(&self, c: Complex) -> u32 {
        escape_iteration(c, self.params).unwrap_or(0)
    }

    fn kind(&self) -> ClassificationKinds {
        ClassificationKinds::IterationCount
    }

    fn max_iterations(&self) -> u32 {
        self.params.max_iterations()
    }
}

#[must_use]
pub fn escape_time_algorithm_factory(
    kind: ClassificationKinds,
    params: EscapeTimeParams,
) -> Arc<dyn EscapeTimeAlgorithm> {
    match kind {
        ClassificationKinds::Binary => Arc::new(BinaryEscape::new(params)),
        ClassificationKinds::IterationCount => Arc::new(EscapeIterationCount::new(params)),
    }
}
