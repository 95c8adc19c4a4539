use crate::{FrameClock, FrameMetrics, GestureVolumeMapper};
use pinch_hand::HandLandmarks;
use pinch_volume::{VolumeControl, VolumeLevel};
use std::time::Instant;

/// What one loop iteration did with the endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// No usable hand; the endpoint was left alone.
    NoHand,
    Applied(FrameMetrics),
    /// The endpoint rejected the level. The next hand frame retries.
    SetFailed(FrameMetrics),
}

impl FrameOutcome {
    pub fn metrics(&self) -> Option<&FrameMetrics> {
        match self {
            FrameOutcome::NoHand => None,
            FrameOutcome::Applied(metrics) | FrameOutcome::SetFailed(metrics) => Some(metrics),
        }
    }
}

/// State carried between iterations of the control loop.
#[derive(Debug, Clone)]
pub struct LoopState {
    clock: FrameClock,
    fps: f32,
    last_level: Option<VolumeLevel>,
    failure_streak: u32,
    failed_sets: u64,
}

impl LoopState {
    /// `initial` is the endpoint level read at startup, if it could be read.
    pub fn new(initial: Option<VolumeLevel>) -> Self {
        Self {
            clock: FrameClock::new(),
            fps: 0.0,
            last_level: initial,
            failure_streak: 0,
            failed_sets: 0,
        }
    }

    /// Advance the frame clock and return the current frame rate.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.fps = self.clock.tick(now);
        self.fps
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Last level known to be on the endpoint.
    pub fn last_level(&self) -> Option<VolumeLevel> {
        self.last_level
    }

    /// Consecutive failed sets since the last success.
    pub fn failure_streak(&self) -> u32 {
        self.failure_streak
    }

    pub fn failed_sets(&self) -> u64 {
        self.failed_sets
    }
}

/// Maps detected hands to volume and pushes the result to an endpoint.
#[derive(Debug, Clone, Default)]
pub struct VolumeTracker {
    mapper: GestureVolumeMapper,
}

impl VolumeTracker {
    pub fn new(mapper: GestureVolumeMapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &GestureVolumeMapper {
        &self.mapper
    }

    pub fn update(
        &mut self,
        state: &mut LoopState,
        hand: Option<&HandLandmarks>,
        endpoint: &mut dyn VolumeControl,
    ) -> FrameOutcome {
        let Some(metrics) = hand.and_then(|hand| self.mapper.map_landmarks(hand)) else {
            return FrameOutcome::NoHand;
        };

        log::trace!(
            "distance {:.1}px -> {:.1}% (pinch: {})",
            metrics.distance,
            metrics.percent,
            metrics.pinch_engaged
        );

        let level = metrics.level();
        match endpoint.set_volume(level) {
            Ok(()) => {
                if state.failure_streak > 0 {
                    log::info!(
                        "volume endpoint recovered after {} failed attempts",
                        state.failure_streak
                    );
                    state.failure_streak = 0;
                }
                state.last_level = Some(level);
                FrameOutcome::Applied(metrics)
            }
            Err(e) => {
                if state.failure_streak == 0 {
                    log::warn!("failed to set volume to {level}: {e}");
                } else {
                    log::debug!("failed to set volume to {level}: {e}");
                }
                state.failure_streak = state.failure_streak.saturating_add(1);
                state.failed_sets += 1;
                FrameOutcome::SetFailed(metrics)
            }
        }
    }
}
