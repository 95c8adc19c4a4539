use pinch_camera::{Frame, FrameSource};
use pinch_gesture::{FrameOutcome, LoopState, VolumeTracker};
use pinch_hand::{HandDetector, HandLandmarks};
use pinch_volume::VolumeControl;

/// A captured frame with what detection and tracking made of it.
#[derive(Debug)]
pub struct FrameResult {
    pub frame: Frame,
    pub hand: Option<HandLandmarks>,
    pub outcome: FrameOutcome,
}

/// Run one capture → detect → track iteration.
///
/// Returns `None` when capture fails; detection and the endpoint are then
/// skipped. A detector error counts as no hand.
pub fn run_frame(
    camera: &mut dyn FrameSource,
    detector: &mut dyn HandDetector,
    tracker: &mut VolumeTracker,
    state: &mut LoopState,
    endpoint: &mut dyn VolumeControl,
) -> Option<FrameResult> {
    let frame = match camera.read() {
        Ok(frame) => frame,
        Err(e) => {
            log::debug!("frame capture failed: {e}");
            return None;
        }
    };

    let hand = detector.detect(&frame).unwrap_or_else(|e| {
        log::warn!("hand detection failed: {e}");
        None
    });

    let outcome = tracker.update(state, hand.as_ref(), endpoint);

    Some(FrameResult { frame, hand, outcome })
}
