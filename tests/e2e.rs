mod common;

use common::synthetic_image::{coin_color, coins_rgba, TABLE};
use coin_puzzle::frame::OverlayParams;
use coin_puzzle::image::ImageRgba8;
use coin_puzzle::types::{CIRCLE_COLOR, GRID_EMPTY_COLOR};
use coin_puzzle::{Circle, FrameHandler, HandlerParams, ViewMode};

fn coins() -> Vec<Circle> {
    vec![
        Circle::new(150.0, 150.0, 60.0),
        Circle::new(400.0, 300.0, 80.0),
        Circle::new(900.0, 500.0, 100.0),
    ]
}

#[test]
fn tap_turns_detections_into_grid() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (w, h) = (1280usize, 720usize);
    let frame = coins_rgba(w, h, &coins());
    let truth = coins();
    let detector = move |_: &ImageRgba8| truth.clone();
    let mut handler = FrameHandler::new(detector, w, h, HandlerParams::default());

    let live = handler.on_frame(&frame).clone();
    assert_eq!(handler.mode(), ViewMode::Live);
    assert_eq!(live.get(210, 150), CIRCLE_COLOR);

    assert_eq!(handler.on_touch(), ViewMode::Grid);
    let report = handler.last_report().expect("assembly report");
    assert_eq!(report.placed_crops, 3);
    assert_eq!(report.filler_cells, 12);
    assert_eq!(report.dropped_crops, 0);

    // Cells are 240 px squares; each crop centre carries its coin colour.
    let grid = handler.on_frame(&frame).clone();
    for i in 0..3 {
        assert_eq!(grid.get(i * 240 + 120, 120), coin_color(i), "cell {i}");
    }
    // corners of a crop lie outside the disc
    assert_ne!(grid.get(230, 230), TABLE);
    assert_eq!(grid.get(1240, 100), GRID_EMPTY_COLOR);

    assert_eq!(handler.on_touch(), ViewMode::Live);
    let live_again = handler.on_frame(&frame).clone();
    assert_eq!(live_again, live);
}

#[test]
fn coins_at_the_frame_edge_still_produce_crops() {
    let (w, h) = (640usize, 480usize);
    let edge = vec![Circle::new(5.0, 5.0, 50.0), Circle::new(-400.0, 10.0, 30.0)];
    let frame = coins_rgba(w, h, &edge);
    let params = HandlerParams {
        overlay: OverlayParams {
            show_count: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let detector = move |_: &ImageRgba8| edge.clone();
    let mut handler = FrameHandler::new(detector, w, h, params);

    handler.on_frame(&frame);
    handler.on_touch();
    let report = handler.last_report().unwrap();
    assert_eq!(report.placed_crops, 2);
    assert_eq!(report.usable_cells, 15);
}
