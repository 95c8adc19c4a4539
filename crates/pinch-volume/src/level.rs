use std::fmt;

/// Endpoint volume as a scalar in [0.0, 1.0], mirrored by a percentage in
/// [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct VolumeLevel(f32);

impl VolumeLevel {
    pub const MUTED: VolumeLevel = VolumeLevel(0.0);
    pub const FULL: VolumeLevel = VolumeLevel(1.0);

    /// Clamp `scalar` into [0.0, 1.0]; NaN becomes muted.
    pub fn from_scalar(scalar: f32) -> Self {
        if scalar.is_nan() {
            return Self::MUTED;
        }
        Self(scalar.clamp(0.0, 1.0))
    }

    pub fn from_percent(percent: f32) -> Self {
        Self::from_scalar(percent / 100.0)
    }

    pub fn scalar(self) -> f32 {
        self.0
    }

    pub fn percent(self) -> f32 {
        self.0 * 100.0
    }
}

impl fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.percent())
    }
}
