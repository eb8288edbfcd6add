use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::errors::ConfigurationError;

/// Ordered colours indexed by classification value.
///
/// Lookups clamp: anything below zero takes the first entry and anything at or
/// past the end takes the last, so a two-entry palette renders iteration counts
/// as "zero" vs "non-zero".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, ConfigurationError> {
        if colours.is_empty() {
            return Err(ConfigurationError::EmptyPalette);
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn colour_for(&self, value: i64) -> Colour {
        let last = self.colours.len() - 1;
        let index = usize::try_from(value.max(0)).map_or(last, |index| index.min(last));

        self.colours[index]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colours: vec![Colour::BLACK, Colour::WHITE],
        }
    }
}

impl ColourMap<i64> for Palette {
    fn map(&self, value: i64) -> Colour {
        self.colour_for(value)
    }
}

impl ColourMap<i32> for Palette {
    fn map(&self, value: i32) -> Colour {
        self.colour_for(i64::from(value))
    }
}

impl ColourMap<u32> for Palette {
    fn map(&self, value: u32) -> Colour {
        self.colour_for(i64::from(value))
    }
}
