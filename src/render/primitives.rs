//! Rasterization routines for the drawable primitives.
//!
//! All coordinates here are pixel-space; the data-to-pixel projection is
//! done by the figure before these are called.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Draw a line using Bresenham's algorithm.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a filled circular marker centered at a pixel position.
pub fn draw_marker(fb: &mut Framebuffer, cx: f32, cy: f32, size: f32, color: Rgba) {
    let px = cx as i32;
    let py = cy as i32;
    let radius = ((size / 2.0) as i32).max(0);

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                let x = px + dx;
                let y = py + dy;
                if x >= 0 && y >= 0 {
                    fb.set_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

/// Fill a polygon given by pixel-space vertices using even-odd scanline
/// filling. The color's alpha is composited over the existing pixels.
pub fn fill_polygon(fb: &mut Framebuffer, vertices: &[(f32, f32)], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let min_y = vertices
        .iter()
        .map(|v| v.1)
        .fold(f32::INFINITY, f32::min)
        .floor()
        .max(0.0) as u32;
    let max_y = vertices
        .iter()
        .map(|v| v.1)
        .fold(f32::NEG_INFINITY, f32::max)
        .ceil()
        .min((fb.height() - 1) as f32) as u32;

    let mut crossings: Vec<f32> = Vec::new();
    for y in min_y..=max_y {
        // Sample at the pixel row center
        let scan = y as f32 + 0.5;

        crossings.clear();
        let n = vertices.len();
        for i in 0..n {
            let (x0, y0) = vertices[i];
            let (x1, y1) = vertices[(i + 1) % n];
            if (y0 <= scan && y1 > scan) || (y1 <= scan && y0 > scan) {
                let t = (scan - y0) / (y1 - y0);
                crossings.push(x0 + t * (x1 - x0));
            }
        }
        crossings.sort_unstable_by(f32::total_cmp);

        for span in crossings.chunks_exact(2) {
            let x_start = (span[0] - 0.5).ceil().max(0.0) as u32;
            let x_end = (span[1] - 0.5).ceil().max(0.0) as u32;
            for x in x_start..x_end {
                fb.blend_pixel(x, y, color);
            }
        }
    }
}

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;

/// 5x7 bitmap for the letter `x`, one row per byte, MSB-first.
pub const GLYPH_X: [u8; 7] = [
    0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001,
];

/// 5x7 bitmap for the letter `y`.
pub const GLYPH_Y: [u8; 7] = [
    0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100,
];

/// Blit a 5x7 glyph at an integer scale factor.
pub fn draw_glyph(fb: &mut Framebuffer, x: u32, y: u32, scale: u32, color: Rgba, glyph: &[u8; 7]) {
    let scale = scale.max(1);
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                fb.fill_rect(
                    x + col * scale,
                    y + (row as u32) * scale,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_canvas(w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).unwrap();
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut fb = white_canvas(100, 100);
        draw_line(&mut fb, 10, 50, 90, 50, Rgba::BLACK);

        assert_eq!(fb.get_pixel(10, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 50), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut fb = white_canvas(100, 100);
        draw_line(&mut fb, 10, 10, 90, 90, Rgba::BLACK);

        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 90), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_out_of_bounds_does_not_panic() {
        let mut fb = white_canvas(100, 100);
        draw_line(&mut fb, -10, -10, 110, 110, Rgba::BLACK);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_marker() {
        let mut fb = white_canvas(100, 100);
        draw_marker(&mut fb, 50.0, 50.0, 6.0, Rgba::RED);

        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(52, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(60, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_marker_size_one_sets_center() {
        let mut fb = white_canvas(10, 10);
        draw_marker(&mut fb, 5.0, 5.0, 1.0, Rgba::RED);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::RED));
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut fb = white_canvas(100, 100);
        let triangle = [(10.0, 10.0), (90.0, 10.0), (50.0, 90.0)];
        fill_polygon(&mut fb, &triangle, Rgba::BLUE);

        // Centroid is inside
        assert_eq!(fb.get_pixel(50, 30), Some(Rgba::BLUE));
        // Corners of the canvas are outside
        assert_eq!(fb.get_pixel(5, 50), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(95, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_polygon_alpha_blends() {
        let mut fb = white_canvas(100, 100);
        let square = [(10.0, 10.0), (90.0, 10.0), (90.0, 90.0), (10.0, 90.0)];
        fill_polygon(&mut fb, &square, Rgba::RED.with_alpha(102));

        let inside = fb.get_pixel(50, 50).unwrap();
        // Semi-transparent red over white: lighter than pure red
        assert_eq!(inside.r, 255);
        assert!(inside.g > 100);
    }

    #[test]
    fn test_fill_polygon_degenerate_is_noop() {
        let mut fb = white_canvas(10, 10);
        fill_polygon(&mut fb, &[(1.0, 1.0), (2.0, 2.0)], Rgba::RED);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::WHITE));
            }
        }
    }

    #[test]
    fn test_draw_glyph_marks_pixels() {
        let mut fb = white_canvas(20, 20);
        draw_glyph(&mut fb, 2, 2, 1, Rgba::BLACK, &GLYPH_X);

        // The x glyph has ink in its corners and center
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(4, 5), Some(Rgba::BLACK));
        // The cell's top middle stays blank
        assert_eq!(fb.get_pixel(4, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_glyph_scaled() {
        let mut fb = white_canvas(40, 40);
        draw_glyph(&mut fb, 0, 0, 2, Rgba::BLACK, &GLYPH_Y);

        // Top-left bit covers a 2x2 block
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(1, 1), Some(Rgba::BLACK));
    }
}
