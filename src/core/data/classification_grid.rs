use crate::core::data::resolution::Resolution;
use crate::core::errors::ConfigurationError;

/// Row-major per-pixel classification, one value per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationGrid {
    resolution: Resolution,
    values: Vec<u32>,
}

impl ClassificationGrid {
    pub fn from_values(resolution: Resolution, values: Vec<u32>) -> Result<Self, ConfigurationError> {
        let expected = resolution.width() as usize * resolution.height() as usize;

        if values.len() != expected {
            return Err(ConfigurationError::GridSizeMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(Self { resolution, values })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Value for pixel column `i`, row `j`.
    #[must_use]
    pub fn get(&self, i: u32, j: u32) -> Option<u32> {
        if i >= self.resolution.width() || j >= self.resolution.height() {
            return None;
        }

        self.values
            .get(j as usize * self.resolution.width() as usize + i as usize)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_checks_length() {
        let resolution = Resolution::new(3, 2).unwrap();

        assert!(ClassificationGrid::from_values(resolution, vec![0; 6]).is_ok());
        assert_eq!(
            ClassificationGrid::from_values(resolution, vec![0; 5]),
            Err(ConfigurationError::GridSizeMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let resolution = Resolution::new(3, 2).unwrap();
        let grid = ClassificationGrid::from_values(resolution, vec![0, 1, 2, 3, 4, 5]).unwrap();

        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(2, 0), Some(2));
        assert_eq!(grid.get(0, 1), Some(3));
        assert_eq!(grid.get(2, 1), Some(5));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }
}
