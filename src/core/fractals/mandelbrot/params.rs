use crate::core::errors::ConfigurationError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeParams {
    max_iterations: u32,
    escape_radius: f64,
}

impl EscapeTimeParams {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, ConfigurationError> {
        if max_iterations == 0 {
            return Err(ConfigurationError::ZeroMaxIterations);
        }

        if !(escape_radius.is_finite() && escape_radius > 0.0) {
            return Err(ConfigurationError::InvalidEscapeRadius(escape_radius));
        }

        Ok(Self {
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}

impl Default for EscapeTimeParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = EscapeTimeParams::default();

        assert_eq!(params.max_iterations(), 100);
        assert_eq!(params.escape_radius(), 2.0);
    }

    #[test]
    fn test_zero_max_iterations_rejected() {
        assert_eq!(
            EscapeTimeParams::new(0, 2.0),
            Err(ConfigurationError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_bad_escape_radius_rejected() {
        for radius in [0.0, -2.0, f64::INFINITY] {
            assert_eq!(
                EscapeTimeParams::new(100, radius),
                Err(ConfigurationError::InvalidEscapeRadius(radius))
            );
        }

        assert!(matches!(
            EscapeTimeParams::new(100, f64::NAN),
            Err(ConfigurationError::InvalidEscapeRadius(_))
        ));
    }
}
