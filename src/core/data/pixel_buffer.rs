use crate::core::data::colour::Colour;
use crate::core::data::resolution::Resolution;
use crate::core::errors::ConfigurationError;

pub type PixelBufferData = Vec<u8>;

/// R8G8B8 image, row-major top to bottom, stride `width * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, ConfigurationError> {
        let expected = resolution.width() as usize * resolution.height() as usize * 3;

        if expected != buffer.len() {
            return Err(ConfigurationError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.resolution.stride()
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.resolution.width() || y >= self.resolution.height() {
            return None;
        }

        let index = y as usize * self.stride() + x as usize * 3;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(resolution(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.resolution(), resolution(2, 2));
        assert_eq!(buffer.buffer(), data.as_slice());
        assert_eq!(buffer.stride(), 6);
    }

    #[test]
    fn test_from_data_rejects_wrong_sizes() {
        assert_eq!(
            PixelBuffer::from_data(resolution(2, 2), vec![255, 0, 0]),
            Err(ConfigurationError::BufferSizeMismatch {
                expected: 12,
                actual: 3
            })
        );
        assert_eq!(
            PixelBuffer::from_data(resolution(2, 2), vec![0; 24]),
            Err(ConfigurationError::BufferSizeMismatch {
                expected: 12,
                actual: 24
            })
        );
        assert_eq!(
            PixelBuffer::from_data(resolution(2, 2), vec![]),
            Err(ConfigurationError::BufferSizeMismatch {
                expected: 12,
                actual: 0
            })
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let data: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18];
        let buffer = PixelBuffer::from_data(resolution(3, 2), data).unwrap();

        assert_eq!(buffer.pixel(0, 0), Some(Colour::new(1, 2, 3)));
        assert_eq!(buffer.pixel(2, 0), Some(Colour::new(7, 8, 9)));
        assert_eq!(buffer.pixel(0, 1), Some(Colour::new(10, 11, 12)));
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }
}
