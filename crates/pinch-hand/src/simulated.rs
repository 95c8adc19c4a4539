use crate::{DetectError, HandDetector, HandLandmarks, LandmarkId};
use pinch_base::Vec2;
use pinch_camera::Frame;

/// Pointer-driven stand-in for a real detector.
///
/// The thumb tip stays at a fixed anchor and the index tip follows the
/// pointer, so dragging the pointer toward or away from the anchor plays the
/// role of closing or opening a pinch. With no pointer there is no hand.
#[derive(Debug, Clone)]
pub struct SimulatedHand {
    anchor: Vec2<i32>,
    pointer: Option<Vec2<i32>>,
}

impl SimulatedHand {
    pub fn new(anchor: Vec2<i32>) -> Self {
        Self {
            anchor,
            pointer: None,
        }
    }

    /// Anchor the thumb at the center of a `width` x `height` frame.
    pub fn centered(width: usize, height: usize) -> Self {
        Self::new(Vec2::new(width as i32 / 2, height as i32 / 2))
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2<i32>>) {
        self.pointer = pointer;
    }

    pub fn anchor(&self) -> Vec2<i32> {
        self.anchor
    }

    fn pose(&self, index_tip: Vec2<i32>) -> HandLandmarks {
        use LandmarkId::*;

        let thumb_tip = self.anchor;
        let wrist = thumb_tip + Vec2::new(40, 140);
        let index_mcp = wrist + Vec2::new(-10, -90);

        let mut hand = HandLandmarks::new();
        hand.set(Wrist, wrist);
        chain(&mut hand, wrist, thumb_tip, [ThumbCmc, ThumbMcp, ThumbIp, ThumbTip]);
        hand.set(IndexMcp, index_mcp);
        chain(&mut hand, index_mcp, index_tip, [IndexPip, IndexDip, IndexTip]);

        // remaining fingers curled into the palm
        for (i, ids) in [
            [MiddleMcp, MiddlePip, MiddleDip, MiddleTip],
            [RingMcp, RingPip, RingDip, RingTip],
            [PinkyMcp, PinkyPip, PinkyDip, PinkyTip],
        ]
        .into_iter()
        .enumerate()
        {
            let mcp = index_mcp + Vec2::new(18 * (i as i32 + 1), 6 * i as i32);
            let tip = mcp + Vec2::new(-6, 30);
            hand.set(ids[0], mcp);
            chain(&mut hand, mcp, tip, [ids[1], ids[2], ids[3]]);
        }

        hand
    }
}

/// Place `ids` evenly along the segment after `from`, the last one at `to`.
fn chain<const N: usize>(hand: &mut HandLandmarks, from: Vec2<i32>, to: Vec2<i32>, ids: [LandmarkId; N]) {
    let delta = (to - from).to_f32();
    for (i, id) in ids.into_iter().enumerate() {
        let t = (i + 1) as f32 / N as f32;
        let step = Vec2::new(delta.x * t, delta.y * t).round();
        hand.set(id, from + step);
    }
}

impl HandDetector for SimulatedHand {
    fn detect(&mut self, _frame: &Frame) -> Result<Option<HandLandmarks>, DetectError> {
        Ok(self.pointer.map(|tip| self.pose(tip)))
    }
}
