use std::time::Instant;

/// Instantaneous frame rate from consecutive frame timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    prev: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` and return `1 / (now - prev)` in frames per
    /// second. The first tick and zero-length intervals yield 0.0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let fps = match self.prev {
            Some(prev) => {
                let elapsed = now.saturating_duration_since(prev).as_secs_f32();
                if elapsed > 0.0 { 1.0 / elapsed } else { 0.0 }
            }
            None => 0.0,
        };
        self.prev = Some(now);
        fps
    }
}
