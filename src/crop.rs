//! Coin crop extraction.
//!
//! For each detected circle a square around the circle is cut from the
//! frame, masked to the disc, and scaled to the grid cell size. The bounding
//! square is clamped to the frame; when nothing of it survives the clamp a
//! plain filler square is produced instead.
use crate::draw::fill_disc_mask;
use crate::image::ImageRgba8;
use crate::roi::PixelBox;
use crate::types::{Circle, Rgba, FILLER_COLOR, MASK_BACKGROUND};
use log::debug;
use rayon::prelude::*;

/// Output geometry and colours for extracted crops.
#[derive(Clone, Debug)]
pub struct CropParams {
    /// Width of the produced crop (usually the grid cell width).
    pub cell_width: usize,
    /// Height of the produced crop (usually the grid cell height).
    pub cell_height: usize,
    /// Written outside the disc.
    pub background: Rgba,
    /// Used for the whole crop when the clamped box has no area.
    pub filler: Rgba,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            cell_width: 240,
            cell_height: 240,
            background: MASK_BACKGROUND,
            filler: FILLER_COLOR,
        }
    }
}

impl CropParams {
    pub fn for_cell(cell_width: usize, cell_height: usize) -> Self {
        Self {
            cell_width,
            cell_height,
            ..Default::default()
        }
    }
}

/// A disc-masked square crop around one detected circle.
#[derive(Clone, Debug)]
pub struct CoinCrop {
    pub image: ImageRgba8,
    /// Detection the crop was taken from.
    pub source: Circle,
    filler: bool,
}

impl CoinCrop {
    fn filler(source: Circle, params: &CropParams) -> Self {
        Self {
            image: ImageRgba8::filled(params.cell_width, params.cell_height, params.filler),
            source,
            filler: true,
        }
    }

    /// Wrap an already prepared image, e.g. one loaded from disk.
    pub fn from_image(image: ImageRgba8, source: Circle) -> Self {
        Self {
            image,
            source,
            filler: false,
        }
    }

    /// True when the crop is a placeholder for a collapsed bounding box.
    pub fn is_filler(&self) -> bool {
        self.filler
    }
}

/// Extract the crop for `circle` from `frame`.
pub fn extract_coin_crop(frame: &ImageRgba8, circle: &Circle, params: &CropParams) -> CoinCrop {
    let bbox = PixelBox::around_circle(circle).clamp_to(frame.w, frame.h);
    let Some(bounds) = bbox.to_bounds() else {
        debug!(
            "extract_coin_crop: box {:?} collapsed for circle ({:.1}, {:.1}, r={:.1}) in {}x{} frame",
            bbox, circle.x, circle.y, circle.radius, frame.w, frame.h
        );
        return CoinCrop::filler(*circle, params);
    };

    let mut patch = frame.sub_image(bounds);
    let c = circle.rounded();
    let center = (c.cx - bounds.x as i64, c.cy - bounds.y as i64);
    fill_disc_mask(&mut patch, center, c.radius, params.background);

    CoinCrop {
        image: patch.resized(params.cell_width, params.cell_height),
        source: *circle,
        filler: false,
    }
}

/// Extract crops for every circle, preserving detection order.
pub fn extract_coin_crops(
    frame: &ImageRgba8,
    circles: &[Circle],
    params: &CropParams,
) -> Vec<CoinCrop> {
    circles
        .par_iter()
        .map(|circle| extract_coin_crop(frame, circle, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD: Rgba = [200, 160, 40, 255];

    fn gold_frame(w: usize, h: usize) -> ImageRgba8 {
        ImageRgba8::filled(w, h, GOLD)
    }

    #[test]
    fn crop_is_scaled_to_cell_size() {
        let frame = gold_frame(200, 100);
        let params = CropParams::for_cell(64, 48);
        let crop = extract_coin_crop(&frame, &Circle::new(50.0, 50.0, 20.0), &params);
        assert!(!crop.is_filler());
        assert_eq!((crop.image.w, crop.image.h), (64, 48));
    }

    #[test]
    fn mask_blanks_corners_and_keeps_centre() {
        let frame = gold_frame(100, 100);
        let params = CropParams::for_cell(40, 40);
        let crop = extract_coin_crop(&frame, &Circle::new(50.0, 50.0, 20.0), &params);
        assert_eq!(crop.image.get(20, 20), GOLD);
        assert_eq!(crop.image.get(0, 0), params.background);
        assert_eq!(crop.image.get(39, 39), params.background);
    }

    #[test]
    fn box_outside_frame_yields_filler_square() {
        let frame = gold_frame(64, 64);
        let params = CropParams::for_cell(16, 16);
        let crop = extract_coin_crop(&frame, &Circle::new(-100.0, 10.0, 20.0), &params);
        assert!(crop.is_filler());
        assert_eq!((crop.image.w, crop.image.h), (16, 16));
        assert!(crop.image.data.iter().all(|&p| p == params.filler));
    }

    #[test]
    fn zero_radius_yields_filler_square() {
        let frame = gold_frame(64, 64);
        let params = CropParams::for_cell(8, 8);
        let crop = extract_coin_crop(&frame, &Circle::new(30.0, 30.0, 0.0), &params);
        assert!(crop.is_filler());
    }

    #[test]
    fn crop_at_frame_edge_is_clamped() {
        let frame = gold_frame(80, 60);
        let params = CropParams::for_cell(32, 32);
        let crop = extract_coin_crop(&frame, &Circle::new(75.0, 5.0, 30.0), &params);
        assert!(!crop.is_filler());
        assert_eq!((crop.image.w, crop.image.h), (32, 32));
    }

    #[test]
    fn huge_radius_keeps_the_whole_frame() {
        let frame = gold_frame(64, 64);
        let params = CropParams::for_cell(16, 16);
        for r in [4e9, 1e19, f32::MAX] {
            let crop = extract_coin_crop(&frame, &Circle::new(32.0, 32.0, r), &params);
            assert!(!crop.is_filler());
            assert_eq!((crop.image.w, crop.image.h), (16, 16));
            assert!(crop.image.data.iter().all(|&p| p == GOLD), "radius {r}");
        }
    }

    #[test]
    fn batch_extraction_preserves_order() {
        let frame = gold_frame(120, 120);
        let circles = [
            Circle::new(30.0, 30.0, 10.0),
            Circle::new(-500.0, 0.0, 5.0),
            Circle::new(90.0, 90.0, 15.0),
        ];
        let crops = extract_coin_crops(&frame, &circles, &CropParams::for_cell(10, 10));
        assert_eq!(crops.len(), 3);
        assert_eq!(crops[0].source, circles[0]);
        assert!(crops[1].is_filler());
        assert_eq!(crops[2].source, circles[2]);
    }
}
