pub mod classification_grid;
pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod palette;
pub mod pixel_buffer;
pub mod point;
pub mod resolution;
pub mod selection_rect;
