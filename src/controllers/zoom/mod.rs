mod controller;
pub mod errors;

pub use controller::ZoomController;
