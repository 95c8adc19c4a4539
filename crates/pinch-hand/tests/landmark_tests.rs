use pinch_base::Vec2;
use pinch_hand::{HAND_CONNECTIONS, HAND_LANDMARK_COUNT, HandLandmarks, LandmarkError, LandmarkId, LandmarkPoint};

#[test]
fn test_landmark_id_round_trips_through_index() {
    for (i, id) in LandmarkId::ALL.iter().enumerate() {
        assert_eq!(usize::from(*id), i);
        assert_eq!(LandmarkId::try_from(i), Ok(*id));
    }
    assert_eq!(usize::from(LandmarkId::ThumbTip), 4);
    assert_eq!(usize::from(LandmarkId::IndexTip), 8);
}

#[test]
fn test_landmark_id_rejects_out_of_range() {
    assert_eq!(LandmarkId::try_from(HAND_LANDMARK_COUNT), Err(LandmarkError::InvalidId(21)));
}

#[test]
fn test_empty_hand_has_no_fingertips() {
    let hand = HandLandmarks::new();
    assert!(hand.is_empty());
    assert_eq!(hand.len(), 0);
    assert_eq!(hand.fingertips(), None);
}

#[test]
fn test_fingertips_need_only_thumb_and_index_tip() {
    let hand = HandLandmarks::from_points([
        LandmarkPoint::new(LandmarkId::ThumbTip, 100, 100),
        LandmarkPoint::new(LandmarkId::IndexTip, 100, 140),
    ]);
    assert_eq!(hand.len(), 2);
    assert_eq!(
        hand.fingertips(),
        Some((Vec2::new(100, 100), Vec2::new(100, 140)))
    );
}

#[test]
fn test_three_leading_landmarks_are_not_enough() {
    let hand = HandLandmarks::from_raw([(0, 10, 10), (1, 12, 8), (2, 14, 6)]).unwrap();
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.get(LandmarkId::ThumbTip), None);
    assert_eq!(hand.fingertips(), None);
}

#[test]
fn test_missing_index_tip_blocks_fingertips() {
    let hand = HandLandmarks::from_raw((0..8).map(|i| (i, i as i32, 0))).unwrap();
    assert!(hand.get(LandmarkId::ThumbTip).is_some());
    assert_eq!(hand.fingertips(), None);
}

#[test]
fn test_from_raw_rejects_unknown_id() {
    assert_eq!(
        HandLandmarks::from_raw([(4, 1, 1), (25, 2, 2)]),
        Err(LandmarkError::InvalidId(25))
    );
}

#[test]
fn test_points_iterate_in_id_order() {
    let hand = HandLandmarks::from_points([
        LandmarkPoint::new(LandmarkId::IndexTip, 5, 5),
        LandmarkPoint::new(LandmarkId::Wrist, 1, 1),
    ]);
    let ids: Vec<LandmarkId> = hand.points().map(|p| p.id).collect();
    assert_eq!(ids, vec![LandmarkId::Wrist, LandmarkId::IndexTip]);
}

#[test]
fn test_set_overwrites() {
    let mut hand = HandLandmarks::new();
    hand.set(LandmarkId::ThumbTip, Vec2::new(1, 1));
    hand.set(LandmarkId::ThumbTip, Vec2::new(2, 3));
    assert_eq!(hand.get(LandmarkId::ThumbTip), Some(Vec2::new(2, 3)));
    assert_eq!(hand.len(), 1);
}

#[test]
fn test_connections_reference_every_landmark() {
    let mut seen = [false; HAND_LANDMARK_COUNT];
    for (a, b) in HAND_CONNECTIONS {
        seen[usize::from(a)] = true;
        seen[usize::from(b)] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
