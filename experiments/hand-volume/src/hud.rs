use pinch_base::Vec2;
use pinch_camera::Frame;
use pinch_gesture::{FrameMetrics, saturating_interp};
use pinch_hand::{HAND_CONNECTIONS, HandLandmarks};

pub const MAGENTA: [u8; 3] = [255, 0, 255];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];
const SKELETON: [u8; 3] = [255, 255, 255];
const JOINT: [u8; 3] = [255, 0, 0];

pub const BAR_LEFT: i32 = 50;
pub const BAR_RIGHT: i32 = 85;
pub const BAR_TOP: i32 = 100;
pub const BAR_BOTTOM: i32 = 400;

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
const TEXT_SCALE: i32 = 3;

/// Draw the gesture overlay onto `frame`: hand skeleton, fingertip markers,
/// volume bar with percentage, and the frame rate.
pub fn draw_hud(frame: &mut Frame, hand: Option<&HandLandmarks>, metrics: Option<&FrameMetrics>, fps: f32) {
    let (width, height) = (frame.width(), frame.height());
    let buf = frame.data_mut();

    if let Some(hand) = hand {
        draw_skeleton(buf, width, height, hand);

        if let (Some((thumb, index)), Some(metrics)) = (hand.fingertips(), metrics) {
            draw_filled_circle(buf, width, height, thumb, 12, MAGENTA);
            draw_filled_circle(buf, width, height, index, 12, MAGENTA);
            draw_thick_line(buf, width, height, thumb, index, 3, MAGENTA);

            let center = thumb.midpoint(index);
            if metrics.pinch_engaged {
                draw_filled_circle(buf, width, height, center, 12, GREEN);
            } else {
                draw_filled_circle(buf, width, height, center, 10, MAGENTA);
            }

            draw_volume_bar(buf, width, height, metrics.percent);
            draw_text(
                buf,
                width,
                height,
                Vec2::new(40, 430),
                &format!("{} %", metrics.percent as i32),
                MAGENTA,
            );
        }
    }

    draw_text(buf, width, height, Vec2::new(10, 30), &format!("FPS: {}", fps as i32), BLUE);
}

/// Top edge of the filled part of the volume bar for `percent`.
pub fn bar_y(percent: f32) -> i32 {
    saturating_interp(percent, (0.0, 100.0), (BAR_BOTTOM as f32, BAR_TOP as f32)) as i32
}

fn draw_volume_bar(buf: &mut [u8], width: usize, height: usize, percent: f32) {
    draw_rect_outline(
        buf,
        width,
        height,
        Vec2::new(BAR_LEFT, BAR_TOP),
        Vec2::new(BAR_RIGHT, BAR_BOTTOM),
        2,
        MAGENTA,
    );
    fill_rect(
        buf,
        width,
        height,
        Vec2::new(BAR_LEFT, bar_y(percent)),
        Vec2::new(BAR_RIGHT, BAR_BOTTOM),
        MAGENTA,
    );
}

pub fn draw_skeleton(buf: &mut [u8], width: usize, height: usize, hand: &HandLandmarks) {
    for (from, to) in HAND_CONNECTIONS {
        if let (Some(a), Some(b)) = (hand.get(from), hand.get(to)) {
            draw_line(buf, width, height, a, b, SKELETON);
        }
    }
    for point in hand.points() {
        draw_filled_circle(buf, width, height, point.position, 4, JOINT);
    }
}

/// Bresenham line, clipped to the buffer with Cohen-Sutherland.
pub fn draw_line(buf: &mut [u8], width: usize, height: usize, from: Vec2<i32>, to: Vec2<i32>, color: [u8; 3]) {
    let Some((from, to)) = clip_line(from, to, width as i32, height as i32) else {
        return;
    };
    for p in line_points(from, to) {
        set_pixel(buf, width, p.x as usize, p.y as usize, color);
    }
}

/// Line of roughly `thickness` pixels, stamped with discs along the path.
pub fn draw_thick_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    from: Vec2<i32>,
    to: Vec2<i32>,
    thickness: i32,
    color: [u8; 3],
) {
    if thickness <= 1 {
        draw_line(buf, width, height, from, to, color);
        return;
    }
    let Some((from, to)) = clip_line(from, to, width as i32, height as i32) else {
        return;
    };
    for p in line_points(from, to) {
        draw_filled_circle(buf, width, height, p, thickness / 2, color);
    }
}

pub fn draw_filled_circle(buf: &mut [u8], width: usize, height: usize, center: Vec2<i32>, radius: i32, color: [u8; 3]) {
    // center may lie anywhere in the i32 range
    let (cx, cy) = (center.x as i64, center.y as i64);
    let r = radius.max(0) as i64;
    let r2 = r * r;
    let (x0, x1) = ((cx - r).max(0), (cx + r).min(width as i64 - 1));
    let (y0, y1) = ((cy - r).max(0), (cy + r).min(height as i64 - 1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                set_pixel(buf, width, x as usize, y as usize, color);
            }
        }
    }
}

/// Fill the rectangle spanned by two corners, inclusive.
pub fn fill_rect(buf: &mut [u8], width: usize, height: usize, a: Vec2<i32>, b: Vec2<i32>, color: [u8; 3]) {
    let (x0, x1) = (a.x.min(b.x).max(0), a.x.max(b.x).min(width as i32 - 1));
    let (y0, y1) = (a.y.min(b.y).max(0), a.y.max(b.y).min(height as i32 - 1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            set_pixel(buf, width, x as usize, y as usize, color);
        }
    }
}

/// Rectangle border `thickness` pixels wide, drawn inside the corners.
pub fn draw_rect_outline(
    buf: &mut [u8],
    width: usize,
    height: usize,
    a: Vec2<i32>,
    b: Vec2<i32>,
    thickness: i32,
    color: [u8; 3],
) {
    let (left, right) = (a.x.min(b.x), a.x.max(b.x));
    let (top, bottom) = (a.y.min(b.y), a.y.max(b.y));
    let t = thickness.max(1) - 1;
    fill_rect(buf, width, height, Vec2::new(left, top), Vec2::new(right, top.saturating_add(t)), color);
    fill_rect(buf, width, height, Vec2::new(left, bottom.saturating_sub(t)), Vec2::new(right, bottom), color);
    fill_rect(buf, width, height, Vec2::new(left, top), Vec2::new(left.saturating_add(t), bottom), color);
    fill_rect(buf, width, height, Vec2::new(right.saturating_sub(t), top), Vec2::new(right, bottom), color);
}

/// Draw `text` with its bottom-left corner at `origin`.
///
/// Only digits, `%`, `:`, space and the letters of "FPS" have glyphs; other
/// characters advance without drawing.
pub fn draw_text(buf: &mut [u8], width: usize, height: usize, origin: Vec2<i32>, text: &str, color: [u8; 3]) {
    let top = origin.y - GLYPH_HEIGHT * TEXT_SCALE;
    let mut left = origin.x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0x10 >> col) == 0 {
                        continue;
                    }
                    let x = left + col * TEXT_SCALE;
                    let y = top + row as i32 * TEXT_SCALE;
                    fill_rect(
                        buf,
                        width,
                        height,
                        Vec2::new(x, y),
                        Vec2::new(x + TEXT_SCALE - 1, y + TEXT_SCALE - 1),
                        color,
                    );
                }
            }
        }
        left += (GLYPH_WIDTH + 1) * TEXT_SCALE;
    }
}

/// Convert an RGB buffer to packed 0x00RRGGBB for minifb.
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    buf.chunks_exact(3)
        .take(width * height)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

fn glyph(c: char) -> Option<[u8; 7]> {
    Some(match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        _ => return None,
    })
}

fn set_pixel(buf: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 3]) {
    let idx = (y * width + x) * 3;
    buf[idx..idx + 3].copy_from_slice(&color);
}

fn line_points(from: Vec2<i32>, to: Vec2<i32>) -> Vec<Vec2<i32>> {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;
    let mut p = from;
    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        points.push(p);
        if p == to {
            return points;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            p.x += sx;
        }
        if e2 < dx {
            err += dx;
            p.y += sy;
        }
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(p: Vec2<i32>, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if p.x < 0 {
        code |= LEFT;
    } else if p.x >= width {
        code |= RIGHT;
    }
    if p.y < 0 {
        code |= TOP;
    } else if p.y >= height {
        code |= BOTTOM;
    }
    code
}

/// Clip the segment to `[0, width) x [0, height)`, or `None` if it misses.
fn clip_line(mut a: Vec2<i32>, mut b: Vec2<i32>, width: i32, height: i32) -> Option<(Vec2<i32>, Vec2<i32>)> {
    if width <= 0 || height <= 0 {
        return None;
    }
    loop {
        let code_a = outcode(a, width, height);
        let code_b = outcode(b, width, height);
        if code_a | code_b == 0 {
            return Some((a, b));
        }
        if code_a & code_b != 0 {
            return None;
        }

        let code = if code_a != 0 { code_a } else { code_b };
        // spans times offsets can exceed i64 at the i32 extremes
        let (ax, ay) = (a.x as i128, a.y as i128);
        let (dx, dy) = (b.x as i128 - ax, b.y as i128 - ay);
        let (w, h) = (width as i128, height as i128);
        let (x, y) = if code & TOP != 0 {
            (ax + dx * -ay / dy, 0)
        } else if code & BOTTOM != 0 {
            (ax + dx * (h - 1 - ay) / dy, h - 1)
        } else if code & LEFT != 0 {
            (0, ay + dy * -ax / dx)
        } else {
            (w - 1, ay + dy * (w - 1 - ax) / dx)
        };
        let clipped = Vec2::new(x as i32, y as i32);

        if code == code_a {
            a = clipped;
        } else {
            b = clipped;
        }
    }
}
