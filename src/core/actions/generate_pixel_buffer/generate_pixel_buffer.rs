use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::classification_grid::ClassificationGrid;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData};
use crate::core::data::resolution::Resolution;
use crate::core::errors::{ConfigurationError, RenderError, try_vec_with_capacity};

/// Generates a pixel buffer by mapping input values to colours.
///
/// `input` must be row-major and hold exactly one value per pixel of `resolution`.
/// Input that runs past the last pixel is rejected at the first extra value, so
/// the buffer never grows beyond its up-front reservation.
pub fn generate_pixel_buffer<T, CMap>(
    input: impl IntoIterator<Item = T>,
    mapper: &CMap,
    resolution: Resolution,
) -> Result<PixelBuffer, RenderError>
where
    CMap: ColourMap<T> + ?Sized,
{
    let expected = resolution.rgb_buffer_len()?;
    let mut buffer: PixelBufferData = try_vec_with_capacity(expected)?;

    for value in input {
        if buffer.len() == expected {
            return Err(ConfigurationError::BufferSizeMismatch {
                expected,
                actual: expected.saturating_add(3),
            }
            .into());
        }

        let Colour { r, g, b } = mapper.map(value);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(resolution, buffer)?)
}

/// Colours a classification grid, preserving its dimensions.
pub fn colour_grid<CMap>(grid: &ClassificationGrid, mapper: &CMap) -> Result<PixelBuffer, RenderError>
where
    CMap: ColourMap<u32> + ?Sized,
{
    generate_pixel_buffer(grid.values().iter().copied(), mapper, grid.resolution())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::palette::Palette;

    #[derive(Debug)]
    struct StubGreyscaleMap {}

    impl ColourMap<u8> for StubGreyscaleMap {
        fn map(&self, value: u8) -> Colour {
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let resolution = Resolution::new(3, 2).unwrap();
        let expected_buffer: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let results = generate_pixel_buffer(input, &StubGreyscaleMap {}, resolution).unwrap();

        assert_eq!(results.buffer(), expected_buffer.as_slice());
        assert_eq!(results.resolution(), resolution);
        assert_eq!(results.buffer_size(), 18);
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let resolution = Resolution::new(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &StubGreyscaleMap {}, resolution);

        assert_eq!(
            results,
            Err(RenderError::Configuration(
                ConfigurationError::BufferSizeMismatch {
                    expected: 12,
                    actual: 15
                }
            ))
        );
    }

    #[test]
    fn test_unbounded_input_stops_at_first_extra_value() {
        let resolution = Resolution::new(4, 4).unwrap();

        let results = generate_pixel_buffer(std::iter::repeat(7u8), &StubGreyscaleMap {}, resolution);

        assert_eq!(
            results,
            Err(RenderError::Configuration(
                ConfigurationError::BufferSizeMismatch {
                    expected: 48,
                    actual: 51
                }
            ))
        );
    }

    #[test]
    fn test_short_input_returns_err() {
        let resolution = Resolution::new(2, 2).unwrap();

        let results = generate_pixel_buffer(vec![1u8, 2], &StubGreyscaleMap {}, resolution);

        assert_eq!(
            results,
            Err(RenderError::Configuration(
                ConfigurationError::BufferSizeMismatch {
                    expected: 12,
                    actual: 6
                }
            ))
        );
    }

    #[test]
    fn test_colour_grid_uses_palette_lookup() {
        let resolution = Resolution::new(2, 2).unwrap();
        let grid = ClassificationGrid::from_values(resolution, vec![1, 0, 0, 1]).unwrap();

        let pixels = colour_grid(&grid, &Palette::default()).unwrap();

        assert_eq!(
            pixels.buffer(),
            &[255, 255, 255, 0, 0, 0, 0, 0, 0, 255, 255, 255]
        );
    }

    #[test]
    fn test_colour_grid_clamps_values_past_palette_end() {
        let resolution = Resolution::new(3, 1).unwrap();
        let grid = ClassificationGrid::from_values(resolution, vec![0, 7, 250]).unwrap();

        let pixels = colour_grid(&grid, &Palette::default()).unwrap();

        assert_eq!(pixels.pixel(0, 0), Some(Colour::BLACK));
        assert_eq!(pixels.pixel(1, 0), Some(Colour::WHITE));
        assert_eq!(pixels.pixel(2, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_single_colour_palette_paints_everything() {
        let resolution = Resolution::new(2, 1).unwrap();
        let grid = ClassificationGrid::from_values(resolution, vec![0, 1]).unwrap();
        let palette = Palette::new(vec![Colour::new(10, 20, 30)]).unwrap();

        let pixels = colour_grid(&grid, &palette).unwrap();

        assert_eq!(pixels.buffer(), &[10, 20, 30, 10, 20, 30]);
    }
}
