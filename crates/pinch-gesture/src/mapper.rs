use crate::CalibrationRange;
use pinch_base::Vec2;
use pinch_hand::HandLandmarks;
use pinch_volume::VolumeLevel;

/// Linear interpolation of `x` from `domain` onto `range`, holding the range
/// endpoints outside the domain. `range` may be decreasing.
///
/// `domain.0` must be below `domain.1`.
pub fn saturating_interp(x: f32, domain: (f32, f32), range: (f32, f32)) -> f32 {
    let (x0, x1) = domain;
    let (y0, y1) = range;
    if x <= x0 {
        return y0;
    }
    if x >= x1 {
        return y1;
    }
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// Result of mapping one fingertip pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetrics {
    /// Thumb tip to index tip, in pixels.
    pub distance: f32,
    /// Target volume in [0, 100].
    pub percent: f32,
    /// The fingertips are within the pinch-zero threshold.
    pub pinch_engaged: bool,
}

impl FrameMetrics {
    pub fn scalar(&self) -> f32 {
        self.percent / 100.0
    }

    pub fn level(&self) -> VolumeLevel {
        VolumeLevel::from_percent(self.percent)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureVolumeMapper {
    calibration: CalibrationRange,
}

impl GestureVolumeMapper {
    pub fn new(calibration: CalibrationRange) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &CalibrationRange {
        &self.calibration
    }

    /// Map the distance between `thumb` and `index` to a volume percentage.
    pub fn map(&self, thumb: Vec2<i32>, index: Vec2<i32>) -> FrameMetrics {
        self.map_distance(thumb.distance(index))
    }

    /// Map a fingertip distance in pixels. A non-finite distance maps to 0 %
    /// without engaging the pinch.
    pub fn map_distance(&self, distance: f32) -> FrameMetrics {
        if !distance.is_finite() {
            return FrameMetrics {
                distance,
                percent: 0.0,
                pinch_engaged: false,
            };
        }

        let calibration = &self.calibration;
        let pinch_engaged = distance <= calibration.pinch_zero_px();
        let percent = if pinch_engaged {
            0.0
        } else {
            saturating_interp(
                distance,
                (calibration.min_distance_px(), calibration.max_distance_px()),
                (0.0, 100.0),
            )
        };

        FrameMetrics {
            distance,
            percent,
            pinch_engaged,
        }
    }

    /// Map the thumb and index tips of `hand`, or `None` if either is missing.
    pub fn map_landmarks(&self, hand: &HandLandmarks) -> Option<FrameMetrics> {
        let (thumb, index) = hand.fingertips()?;
        Some(self.map(thumb, index))
    }
}
