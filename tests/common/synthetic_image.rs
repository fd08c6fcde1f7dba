use coin_puzzle::image::ImageRgba8;
use coin_puzzle::Circle;

pub const TABLE: [u8; 4] = [40, 90, 40, 255];

/// Flat "table" frame with solid coins painted at the given circles.
/// Coin `i` gets a distinct colour, see [`coin_color`].
pub fn coins_rgba(width: usize, height: usize, coins: &[Circle]) -> ImageRgba8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = ImageRgba8::filled(width, height, TABLE);
    for (i, coin) in coins.iter().enumerate() {
        let color = coin_color(i);
        let r_sq = coin.radius * coin.radius;
        for y in 0..height {
            for x in 0..width {
                let dx = x as f32 - coin.x;
                let dy = y as f32 - coin.y;
                if dx * dx + dy * dy <= r_sq {
                    img.set(x, y, color);
                }
            }
        }
    }
    img
}

pub fn coin_color(i: usize) -> [u8; 4] {
    let v = (i as u8).wrapping_mul(37);
    [200, 100u8.wrapping_add(v), 30u8.wrapping_add(v / 2), 255]
}
