use std::path::Path;
use std::rc::Rc;

use log::info;
use mandelbrot_zoom::core::data::point::Point;
use mandelbrot_zoom::{
    LogRenderSink, LogTimingSink, MandelbrotConfig, PointerEvent, ViewportModel, ZoomController,
};

/// Renders the configured view, then replays a few drags as if a user were zooming.
fn run(config: &MandelbrotConfig) -> Result<(), Box<dyn std::error::Error>> {
    let render_sink = Rc::new(LogRenderSink::new());
    let viewport = ViewportModel::from_config(config, render_sink.clone(), Rc::new(LogTimingSink))?;
    let mut controller = ZoomController::new(viewport);

    controller.viewport_mut().refresh()?;

    let (width, height) = controller.widget_size();
    let drags = [
        // upper-left quadrant, dragged top-left to bottom-right
        (Point::new(width / 4, height / 4), Point::new(width / 2, height / 2)),
        // same size again, dragged the other way
        (Point::new(width * 3 / 4, height * 3 / 4), Point::new(width / 4, height / 4)),
        // a click without movement is not a selection
        (Point::new(width / 2, height / 2), Point::new(width / 2, height / 2)),
    ];

    for (start, end) in drags {
        for event in [
            PointerEvent::Down(start),
            PointerEvent::Move(end),
            PointerEvent::Up(end),
        ] {
            controller.handle_pointer(event)?;
        }

        let region = controller.viewport().region();
        info!(
            "View is now {:?} .. {:?}",
            region.top_left(),
            region.bottom_right()
        );
    }

    info!(
        "Presented {} frames, last generation {}",
        render_sink.frames_presented(),
        render_sink.last_generation()
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => MandelbrotConfig::from_path(Path::new(&path))?,
        None => MandelbrotConfig::default(),
    };

    run(&config)
}
