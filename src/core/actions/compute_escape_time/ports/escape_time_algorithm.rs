use std::fmt::Debug;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::classification_kinds::ClassificationKinds;

/// Per-point classification strategy used by the escape-time engine.
///
/// Implementations must be pure: the same `c` always yields the same value, and
/// nothing is shared between calls, so pixels can be classified in any order.
pub trait EscapeTimeAlgorithm: Debug + Send + Sync {
    fn classify(&self, c: Complex) -> u32;

    fn kind(&self) -> ClassificationKinds;

    fn max_iterations(&self) -> u32;
}
