pub mod selection;
pub mod viewport;
pub mod zoom;
