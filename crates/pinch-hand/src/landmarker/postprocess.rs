use super::Letterbox;
use crate::{DetectError, HAND_LANDMARK_COUNT, HandLandmarks};

/// 21 landmarks × (x, y, z).
pub const LANDMARK_OUTPUT_LEN: usize = HAND_LANDMARK_COUNT * 3;

/// Turn raw model output into frame-space landmarks.
///
/// Returns `Ok(None)` when `presence` is below `threshold`. Landmarks that
/// map outside the frame or are not finite are left out. The z component is
/// ignored.
pub fn postprocess(
    landmarks: &[f32],
    presence: f32,
    letterbox: &Letterbox,
    threshold: f32,
) -> Result<Option<HandLandmarks>, DetectError> {
    if landmarks.len() < LANDMARK_OUTPUT_LEN {
        return Err(DetectError::Shape(format!(
            "expected {LANDMARK_OUTPUT_LEN} landmark values, got {}",
            landmarks.len()
        )));
    }

    if presence.is_nan() || presence < threshold {
        return Ok(None);
    }

    let points = landmarks
        .chunks_exact(3)
        .take(HAND_LANDMARK_COUNT)
        .enumerate()
        .filter_map(|(id, xyz)| {
            letterbox
                .to_pixel(xyz[0], xyz[1])
                .map(|p| (id, p.x, p.y))
        });

    Ok(Some(HandLandmarks::from_raw(points)?))
}
