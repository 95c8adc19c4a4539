use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CalibrationError {
    NonFinite,
    NegativeMin(f32),
    EmptyRange { min: f32, max: f32 },
    PinchZero { pinch_zero: f32, max: f32 },
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::NonFinite => write!(f, "calibration values must be finite"),
            CalibrationError::NegativeMin(min) => {
                write!(f, "min distance must not be negative, got {min}")
            }
            CalibrationError::EmptyRange { min, max } => {
                write!(f, "min distance {min} must be below max distance {max}")
            }
            CalibrationError::PinchZero { pinch_zero, max } => {
                write!(f, "pinch-zero {pinch_zero} must be in (0, {max})")
            }
        }
    }
}

impl std::error::Error for CalibrationError {}

/// Pixel distances that anchor the distance → volume mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationRange {
    min_distance_px: f32,
    max_distance_px: f32,
    pinch_zero_px: f32,
}

impl Default for CalibrationRange {
    /// 40 px → 0 %, 170 px → 100 %, pinch forced to 0 % at 50 px and below.
    fn default() -> Self {
        Self {
            min_distance_px: 40.0,
            max_distance_px: 170.0,
            pinch_zero_px: 50.0,
        }
    }
}

impl CalibrationRange {
    /// Requires `0 <= min < max` and `0 < pinch_zero < max`.
    ///
    /// `pinch_zero` may exceed `min`; the pinch zone then also covers the
    /// start of the linear ramp.
    pub fn new(min_distance_px: f32, max_distance_px: f32, pinch_zero_px: f32) -> Result<Self, CalibrationError> {
        if ![min_distance_px, max_distance_px, pinch_zero_px]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(CalibrationError::NonFinite);
        }
        if min_distance_px < 0.0 {
            return Err(CalibrationError::NegativeMin(min_distance_px));
        }
        if min_distance_px >= max_distance_px {
            return Err(CalibrationError::EmptyRange {
                min: min_distance_px,
                max: max_distance_px,
            });
        }
        if pinch_zero_px <= 0.0 || pinch_zero_px >= max_distance_px {
            return Err(CalibrationError::PinchZero {
                pinch_zero: pinch_zero_px,
                max: max_distance_px,
            });
        }

        Ok(Self {
            min_distance_px,
            max_distance_px,
            pinch_zero_px,
        })
    }

    pub fn min_distance_px(&self) -> f32 {
        self.min_distance_px
    }

    pub fn max_distance_px(&self) -> f32 {
        self.max_distance_px
    }

    pub fn pinch_zero_px(&self) -> f32 {
        self.pinch_zero_px
    }
}
