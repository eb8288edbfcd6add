use crate::core::data::colour::Colour;

/// Turns one classification value into a displayable colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;
}
