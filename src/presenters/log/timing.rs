use log::info;

use crate::controllers::viewport::ports::timing_sink::TimingSink;

/// Reports calculation times through the `log` facade.
#[derive(Debug, Default)]
pub struct LogTimingSink;

impl TimingSink for LogTimingSink {
    fn calculation_time(&self, seconds: f64) {
        info!("Calculation took {seconds} seconds");
    }
}
