use coin_puzzle::image::ImageRgba8;
use coin_puzzle::{Circle, FixedCircles, FrameHandler, HandlerParams};

fn main() {
    // Demo stub: a flat synthetic frame with two fake detections
    let w = 1280usize;
    let h = 720usize;
    let frame = ImageRgba8::filled(w, h, [90, 90, 90, 255]);
    let detector = FixedCircles::new(vec![
        Circle::new(200.0, 200.0, 60.0),
        Circle::new(640.0, 360.0, 90.0),
    ]);

    let mut handler = FrameHandler::new(detector, w, h, HandlerParams::default());
    handler.on_frame(&frame);
    let mode = handler.on_touch();
    if let Some(report) = handler.last_report() {
        println!(
            "mode={:?} placed={} filler={} dropped={}",
            mode, report.placed_crops, report.filler_cells, report.dropped_crops
        );
    }
}
