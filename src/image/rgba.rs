//! Owned 4-channel 8-bit image in row-major layout (stride == width).
//!
//! This is the frame and canvas type used throughout the crate. Conversions
//! to and from [`image::RgbaImage`] are provided for I/O and resampling.
use super::traits::{ImageView, ImageViewMut};
use crate::roi::CropBounds;
use crate::types::Rgba;
use image::imageops::{self, FilterType};
use image::RgbaImage;

#[derive(Debug, PartialEq, Eq)]
pub struct ImageRgba8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgba>,
}

impl ImageRgba8 {
    /// Construct a transparent-black buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, [0, 0, 0, 0])
    }

    /// Construct a buffer of size `w × h` with every pixel set to `color`.
    pub fn filled(w: usize, h: usize, color: Rgba) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![color; w * h],
        }
    }

    /// Wrap interleaved RGBA bytes. Returns `None` when the length does not
    /// match `w * h * 4`.
    pub fn from_raw(w: usize, h: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != w * h * 4 {
            return None;
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Bounds-checked write with signed coordinates; out-of-range writes are
    /// ignored.
    #[inline]
    pub fn set_clipped(&mut self, x: i64, y: i64, v: Rgba) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.set(x as usize, y as usize, v);
        }
    }

    pub fn fill(&mut self, color: Rgba) {
        self.data.iter_mut().for_each(|px| *px = color);
    }

    /// Fill the rectangle `[x, x + w) × [y, y + h)`, clipped to the image.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgba) {
        let x1 = (x + w).min(self.w);
        let y1 = (y + h).min(self.h);
        if x >= x1 || y >= y1 {
            return;
        }
        for yy in y..y1 {
            self.row_mut(yy)[x..x1].fill(color);
        }
    }

    /// Copy `src` into this image with its top-left corner at `(x, y)`.
    /// Parts falling outside the destination are clipped.
    pub fn copy_from(&mut self, src: &ImageRgba8, x: usize, y: usize) {
        if x >= self.w || y >= self.h {
            return;
        }
        let cols = src.w.min(self.w - x);
        let rows = src.h.min(self.h - y);
        for sy in 0..rows {
            let src_row = &src.row(sy)[..cols];
            self.row_mut(y + sy)[x..x + cols].copy_from_slice(src_row);
        }
    }

    /// Owned copy of the region described by `bounds`.
    ///
    /// `bounds` must lie inside the image; produce it with
    /// [`PixelBox::clamp_to`](crate::roi::PixelBox::clamp_to).
    pub fn sub_image(&self, bounds: CropBounds) -> ImageRgba8 {
        debug_assert!(bounds.x + bounds.width <= self.w);
        debug_assert!(bounds.y + bounds.height <= self.h);
        let mut out = ImageRgba8::new(bounds.width, bounds.height);
        for yy in 0..bounds.height {
            let row = self.row(bounds.y + yy);
            out.row_mut(yy)
                .copy_from_slice(&row[bounds.x..bounds.x + bounds.width]);
        }
        out
    }

    /// Resample to `w × h` with a triangle (bilinear) filter.
    pub fn resized(&self, w: usize, h: usize) -> ImageRgba8 {
        if w == self.w && h == self.h {
            return self.clone();
        }
        if w == 0 || h == 0 || self.is_empty() {
            return ImageRgba8::new(w, h);
        }
        let resized = imageops::resize(
            &self.to_rgba_image(),
            w as u32,
            h as u32,
            FilterType::Triangle,
        );
        ImageRgba8::from_rgba_image(&resized)
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let (w, h) = (self.w as u32, self.h as u32);
        let bytes: Vec<u8> = self.rows().flatten().flatten().copied().collect();
        RgbaImage::from_raw(w, h, bytes).unwrap_or_else(|| RgbaImage::new(w, h))
    }

    pub fn from_rgba_image(img: &RgbaImage) -> ImageRgba8 {
        let w = img.width() as usize;
        let h = img.height() as usize;
        let data = img.pixels().map(|p| p.0).collect();
        ImageRgba8 {
            w,
            h,
            stride: w,
            data,
        }
    }
}

impl Clone for ImageRgba8 {
    fn clone(&self) -> Self {
        Self {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: self.data.clone(),
        }
    }

    /// Reuses the existing pixel buffer when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.w = source.w;
        self.h = source.h;
        self.stride = source.stride;
        self.data.clone_from(&source.data);
    }
}

impl ImageView for ImageRgba8 {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageRgba8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
