//! Minimal 3×5 bitmap font for decimal digits.
use crate::image::ImageRgba8;
use crate::types::Rgba;

const GLYPH_W: usize = 3;
const GLYPH_H: usize = 5;
const ADVANCE: usize = GLYPH_W + 1;

// One row per entry, most significant of the low three bits is the leftmost column.
const DIGITS: [[u8; GLYPH_H]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Width in pixels of `n` rendered at `scale`.
pub fn number_width(n: usize, scale: usize) -> usize {
    let digits = n.to_string().len();
    (digits * ADVANCE - 1) * scale.max(1)
}

/// Height in pixels of a rendered line at `scale`.
pub fn number_height(scale: usize) -> usize {
    GLYPH_H * scale.max(1)
}

/// Render `n` with its top-left corner at `origin`, clipped to the image.
pub fn draw_number(img: &mut ImageRgba8, origin: (i64, i64), n: usize, scale: usize, color: Rgba) {
    let scale = scale.max(1);
    for (i, ch) in n.to_string().bytes().enumerate() {
        let glyph = &DIGITS[(ch - b'0') as usize];
        let gx = origin.0 + (i * ADVANCE * scale) as i64;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (0b100 >> col) == 0 {
                    continue;
                }
                let x0 = gx + (col * scale) as i64;
                let y0 = origin.1 + (row * scale) as i64;
                for dy in 0..scale as i64 {
                    for dx in 0..scale as i64 {
                        img.set_clipped(x0 + dx, y0 + dy, color);
                    }
                }
            }
        }
    }
}
