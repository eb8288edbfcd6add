/// Receives the wall-clock time of each escape-time computation.
pub trait TimingSink {
    fn calculation_time(&self, seconds: f64);
}
