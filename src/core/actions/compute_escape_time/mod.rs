pub mod compute_escape_time;
pub mod ports;
