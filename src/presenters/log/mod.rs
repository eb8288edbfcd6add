pub mod frames;
pub mod timing;
