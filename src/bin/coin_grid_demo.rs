use coin_puzzle::config::load_config;
use coin_puzzle::image::io::{load_rgba_image, save_rgba_image, write_json_file};
use coin_puzzle::{FixedCircles, FrameHandler};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frame = load_rgba_image(&config.input)?;
    let detector = FixedCircles::new(config.circles.clone());
    let mut handler = FrameHandler::new(detector, frame.w, frame.h, config.grid.resolve());

    let live = handler.on_frame(&frame).clone();
    save_rgba_image(&live, &config.output.live_image)?;

    handler.on_touch();
    save_rgba_image(handler.assembler().canvas(), &config.output.grid_image)?;

    let report = handler
        .last_report()
        .ok_or("Grid assembly produced no report")?;
    write_json_file(&config.output.report_json, report)?;

    println!(
        "Saved live overlay with {} circles to {}",
        handler.circles().len(),
        config.output.live_image.display()
    );
    println!(
        "Saved grid ({} placed, {} dropped) to {}",
        report.placed_crops,
        report.dropped_crops,
        config.output.grid_image.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: coin_grid_demo <config.json>".to_string()
}
