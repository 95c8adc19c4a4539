use crate::LandmarkError;
use pinch_base::Vec2;

/// Number of landmarks in the hand convention.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Anatomical hand landmark indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkId {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkId {
    pub const ALL: [LandmarkId; HAND_LANDMARK_COUNT] = [
        LandmarkId::Wrist,
        LandmarkId::ThumbCmc,
        LandmarkId::ThumbMcp,
        LandmarkId::ThumbIp,
        LandmarkId::ThumbTip,
        LandmarkId::IndexMcp,
        LandmarkId::IndexPip,
        LandmarkId::IndexDip,
        LandmarkId::IndexTip,
        LandmarkId::MiddleMcp,
        LandmarkId::MiddlePip,
        LandmarkId::MiddleDip,
        LandmarkId::MiddleTip,
        LandmarkId::RingMcp,
        LandmarkId::RingPip,
        LandmarkId::RingDip,
        LandmarkId::RingTip,
        LandmarkId::PinkyMcp,
        LandmarkId::PinkyPip,
        LandmarkId::PinkyDip,
        LandmarkId::PinkyTip,
    ];
}

impl From<LandmarkId> for usize {
    fn from(id: LandmarkId) -> usize {
        id as usize
    }
}

impl TryFrom<usize> for LandmarkId {
    type Error = LandmarkError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LandmarkId::ALL
            .get(value)
            .copied()
            .ok_or(LandmarkError::InvalidId(value))
    }
}

/// Bones drawn for a hand skeleton overlay.
pub const HAND_CONNECTIONS: [(LandmarkId, LandmarkId); 21] = {
    use LandmarkId::*;
    [
        (Wrist, ThumbCmc),
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        (Wrist, IndexMcp),
        (IndexMcp, IndexPip),
        (IndexPip, IndexDip),
        (IndexDip, IndexTip),
        (Wrist, MiddleMcp),
        (MiddleMcp, MiddlePip),
        (MiddlePip, MiddleDip),
        (MiddleDip, MiddleTip),
        (Wrist, RingMcp),
        (RingMcp, RingPip),
        (RingPip, RingDip),
        (RingDip, RingTip),
        (Wrist, PinkyMcp),
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
        (IndexMcp, MiddleMcp),
    ]
};

/// One detected landmark in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkPoint {
    pub id: LandmarkId,
    pub position: Vec2<i32>,
}

impl LandmarkPoint {
    pub fn new(id: LandmarkId, x: i32, y: i32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }
}

/// Landmarks of one tracked hand from a single detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandLandmarks {
    points: [Option<Vec2<i32>>; HAND_LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = LandmarkPoint>) -> Self {
        let mut hand = Self::new();
        for point in points {
            hand.set(point.id, point.position);
        }
        hand
    }

    /// Build from raw `(id, x, y)` detector tuples, rejecting unknown ids.
    pub fn from_raw(points: impl IntoIterator<Item = (usize, i32, i32)>) -> Result<Self, LandmarkError> {
        let mut hand = Self::new();
        for (id, x, y) in points {
            hand.set(LandmarkId::try_from(id)?, Vec2::new(x, y));
        }
        Ok(hand)
    }

    pub fn set(&mut self, id: LandmarkId, position: Vec2<i32>) {
        self.points[usize::from(id)] = Some(position);
    }

    pub fn get(&self, id: LandmarkId) -> Option<Vec2<i32>> {
        self.points[usize::from(id)]
    }

    /// Number of landmarks present.
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Option::is_none)
    }

    /// Present landmarks in id order.
    pub fn points(&self) -> impl Iterator<Item = LandmarkPoint> + '_ {
        LandmarkId::ALL
            .iter()
            .zip(self.points.iter())
            .filter_map(|(&id, p)| p.map(|position| LandmarkPoint { id, position }))
    }

    /// Thumb tip and index tip, when both were detected.
    pub fn fingertips(&self) -> Option<(Vec2<i32>, Vec2<i32>)> {
        Some((self.get(LandmarkId::ThumbTip)?, self.get(LandmarkId::IndexTip)?))
    }
}
