//! Minimal software rasterizer for the overlay window: packed 0RGB
//! pixels in a `Vec<u32>` the way minifb wants them.

use courtside_overlay::LineSegment;

pub const SKELETON_COLOR: u32 = 0x00FF3B30; // red, like the app overlay
pub const BACKGROUND_COLOR: u32 = 0x00101010;

pub fn clear(buf: &mut [u32]) {
    buf.fill(BACKGROUND_COLOR);
}

fn put_pixel(buf: &mut [u32], width: usize, height: usize, x: i32, y: i32, color: u32) {
    if x >= 0 && (x as usize) < width && y >= 0 && (y as usize) < height {
        buf[y as usize * width + x as usize] = color;
    }
}

/// Draw a line by uniform stepping, clipping per pixel.
///
/// Per-pixel bounds checks cost nothing at overlay resolutions and keep
/// out-of-display detector noise harmless, which matters because
/// normalization deliberately does not clamp.
pub fn draw_line(buf: &mut [u32], width: usize, height: usize, seg: &LineSegment, color: u32) {
    let dx = seg.end.x - seg.start.x;
    let dy = seg.end.y - seg.start.y;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (seg.start.x + dx * t).round() as i32;
        let y = (seg.start.y + dy * t).round() as i32;
        put_pixel(buf, width, height, x, y, color);
    }
}

/// Draw a small filled square marker at a point.
pub fn draw_marker(buf: &mut [u32], width: usize, height: usize, x: f32, y: f32, color: u32) {
    let cx = x.round() as i32;
    let cy = y.round() as i32;
    for dy in -2..=2 {
        for dx in -2..=2 {
            put_pixel(buf, width, height, cx + dx, cy + dy, color);
        }
    }
}
