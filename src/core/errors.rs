use thiserror::Error;

/// Inputs that can never produce a meaningful render.
///
/// These are detected before any escape-time or colour-mapping work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("complex region is degenerate: width {width}, height {height}")]
    DegenerateRegion { width: f64, height: f64 },

    #[error("complex region corners must be finite")]
    NonFiniteRegion,

    #[error("resolution must be positive: {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("palette must contain at least one colour")]
    EmptyPalette,

    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,

    #[error("escape radius must be positive and finite: {0}")]
    InvalidEscapeRadius(f64),

    #[error("grid holds {actual} values but the resolution needs {expected}")]
    GridSizeMismatch { expected: usize, actual: usize },

    #[error("pixel buffer holds {actual} bytes but the resolution needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    Parse(String),
}

/// The classification grid or pixel buffer for a resolution could not be allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unable to allocate {elements} elements of {element_size} bytes")]
pub struct AllocationError {
    pub elements: usize,
    pub element_size: usize,
}

/// Why a render produced no output. Either way nothing was partially written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

impl AllocationError {
    #[must_use]
    pub fn of<T>(elements: usize) -> Self {
        Self {
            elements,
            element_size: size_of::<T>(),
        }
    }
}

/// Reserves exactly `len` slots, reporting failure instead of aborting.
pub(crate) fn try_vec_with_capacity<T>(len: usize) -> Result<Vec<T>, AllocationError> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|_| AllocationError::of::<T>(len))?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_vec_with_capacity_reserves() {
        let values: Vec<u32> = try_vec_with_capacity(64).unwrap();

        assert!(values.capacity() >= 64);
        assert!(values.is_empty());
    }

    #[test]
    fn test_try_vec_with_capacity_reports_impossible_sizes() {
        let result = try_vec_with_capacity::<u64>(usize::MAX);

        assert_eq!(result.unwrap_err(), AllocationError::of::<u64>(usize::MAX));
    }

    #[test]
    fn test_configuration_error_messages() {
        assert_eq!(
            ConfigurationError::InvalidResolution { width: 0, height: 10 }.to_string(),
            "resolution must be positive: 0x10"
        );
        assert_eq!(
            ConfigurationError::EmptyPalette.to_string(),
            "palette must contain at least one colour"
        );
    }
}
