//! The window icon is drawn at startup instead of being loaded from a file.

use interface::game::Color;

extern crate image;
use image::{Rgba, RgbaImage};

pub const SIZE: u32 = 32;
const BORDER: u32 = 8;

fn to_rgba([r, g, b, a]: Color) -> Rgba<u8> {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([channel(r), channel(g), channel(b), channel(a)])
}

/// A square of `color` on black, as RGBA bytes.
pub fn pixels(color: Color) -> Vec<u8> {
    let fill = to_rgba(color);
    let black = Rgba([0, 0, 0, 255]);
    let inside = BORDER..SIZE-BORDER;
    RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        if inside.contains(&x) && inside.contains(&y) {fill} else {black}
    }).into_raw()
}
