pub mod compute_escape_time;
pub mod generate_pixel_buffer;
pub mod map_selection;
