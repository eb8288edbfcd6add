pub mod pointer;
pub mod rubber_band;
