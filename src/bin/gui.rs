use std::path::Path;

use mandelbrot_zoom::{MandelbrotConfig, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => MandelbrotConfig::from_path(Path::new(&path))?,
        None => MandelbrotConfig::default(),
    };

    RunGuiCommand::new(config).execute()
}
