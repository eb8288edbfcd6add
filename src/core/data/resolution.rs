use crate::core::errors::{AllocationError, ConfigurationError};

/// Output grid dimensions in pixels; both axes are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidResolution { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> Result<usize, AllocationError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(AllocationError {
                elements: usize::MAX,
                element_size: 1,
            })
    }

    /// Bytes in an R8G8B8 buffer of this size.
    pub fn rgb_buffer_len(&self) -> Result<usize, AllocationError> {
        self.pixel_count()?
            .checked_mul(3)
            .ok_or(AllocationError {
                elements: usize::MAX,
                element_size: 3,
            })
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.width as usize * 3
    }
}
