use crate::{VolumeControl, VolumeError, VolumeLevel};

/// In-process volume endpoint for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryVolume {
    level: VolumeLevel,
    failures_remaining: usize,
    set_calls: usize,
}

impl MemoryVolume {
    pub fn new(level: VolumeLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Make the next `count` calls to `set_volume` fail with
    /// `VolumeError::Device` without changing the level.
    pub fn with_failures(mut self, count: usize) -> Self {
        self.failures_remaining = count;
        self
    }

    pub fn level(&self) -> VolumeLevel {
        self.level
    }

    /// Number of `set_volume` calls, failed ones included.
    pub fn set_calls(&self) -> usize {
        self.set_calls
    }
}

impl VolumeControl for MemoryVolume {
    fn volume(&mut self) -> Result<VolumeLevel, VolumeError> {
        Ok(self.level)
    }

    fn set_volume(&mut self, level: VolumeLevel) -> Result<(), VolumeError> {
        self.set_calls += 1;
        if self.failures_remaining > 0 {
            self.failures_remaining -= 1;
            return Err(VolumeError::Device("endpoint unavailable".to_string()));
        }
        self.level = level;
        Ok(())
    }
}
