use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut};
use imageproc::rect::Rect;

use crate::config::Decoration;

/// Maximum darkening reached at the bottom row
pub const GRADIENT_FALLOFF: f64 = 0.3;

/// Color of row `y` in a top-to-bottom darkening gradient over `base`
pub fn gradient_row_color(base: Rgb<u8>, y: u32, height: u32) -> Rgb<u8> {
    let alpha = (255.0 * (1.0 - y as f64 / height as f64 * GRADIENT_FALLOFF)) as u32;
    Rgb(base.0.map(|c| (c as u32 * alpha / 255) as u8))
}

/// Fill every row of the canvas with its gradient color
pub fn paint_vertical_gradient(canvas: &mut RgbImage, base: Rgb<u8>) {
    let (width, height) = canvas.dimensions();
    for y in 0..height {
        let color = gradient_row_color(base, y, height);
        draw_filled_rect_mut(canvas, Rect::at(0, y as i32).of_size(width, 1), color);
    }
}

/// Left edge that centers a run of `text_width` pixels; may go negative
pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width as i32 - text_width as i32).div_euclid(2)
}

/// Paint the decoration triangle over whatever is underneath
pub fn draw_decoration(canvas: &mut RgbImage, decoration: &Decoration) {
    let vertices = decoration.vertices(canvas.width());
    draw_polygon_mut(canvas, &vertices, decoration.fill);
}
