use crate::DetectError;
use pinch_base::Vec2;
use pinch_camera::Frame;

/// Padding value in normalized range.
const PAD_VALUE: f32 = 0.0;

/// Letterbox transform from frame pixels to model input pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub scale: f32,
    pub pad_x: f32,
    pub pad_y: f32,
    /// Source frame size in pixels.
    pub frame_width: usize,
    pub frame_height: usize,
}

impl Letterbox {
    /// Map a point from model input pixels back to frame pixels.
    pub fn to_frame(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.pad_x) / self.scale, (y - self.pad_y) / self.scale)
    }

    /// Map a model point to the nearest frame pixel, or `None` if it lands
    /// outside the frame.
    pub fn to_pixel(&self, x: f32, y: f32) -> Option<Vec2<i32>> {
        let (x, y) = self.to_frame(x, y);
        let (x, y) = (x.round(), y.round());
        let inside = |v: f32, len: usize| v >= 0.0 && v < len as f32;
        if !inside(x, self.frame_width) || !inside(y, self.frame_height) {
            return None;
        }
        Some(Vec2::new(x as i32, y as i32))
    }
}

/// Letterbox `frame` into a `size` x `size` NCHW tensor with values in [0, 1].
///
/// Aspect ratio is kept with nearest-neighbour sampling; the borders are
/// padded. Returns the flat `[1, 3, size, size]` data and the transform for
/// mapping landmarks back.
pub fn preprocess(frame: &Frame, size: usize) -> Result<(Vec<f32>, Letterbox), DetectError> {
    let (w, h) = (frame.width(), frame.height());
    if w == 0 || h == 0 || size == 0 {
        return Err(DetectError::Frame(format!(
            "cannot letterbox {w}x{h} frame into {size}x{size}"
        )));
    }

    let scale = (size as f32 / w as f32).min(size as f32 / h as f32);
    let new_w = ((w as f32 * scale) as usize).clamp(1, size);
    let new_h = ((h as f32 * scale) as usize).clamp(1, size);
    let pad_x = (size - new_w) / 2;
    let pad_y = (size - new_h) / 2;

    let plane = size * size;
    let mut nchw = vec![PAD_VALUE; 3 * plane];

    for out_y in 0..new_h {
        let src_y = ((out_y as f32 / scale) as usize).min(h - 1);
        for out_x in 0..new_w {
            let src_x = ((out_x as f32 / scale) as usize).min(w - 1);
            let Some(rgb) = frame.pixel(src_x, src_y) else {
                continue;
            };
            let dst = (out_y + pad_y) * size + (out_x + pad_x);
            for (ch, value) in rgb.into_iter().enumerate() {
                nchw[ch * plane + dst] = value as f32 / 255.0;
            }
        }
    }

    Ok((
        nchw,
        Letterbox {
            scale,
            pad_x: pad_x as f32,
            pad_y: pad_y as f32,
            frame_width: w,
            frame_height: h,
        },
    ))
}
