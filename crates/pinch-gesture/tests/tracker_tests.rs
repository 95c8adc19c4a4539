use pinch_gesture::{FrameClock, FrameOutcome, LoopState, VolumeTracker};
use pinch_hand::{HandLandmarks, LandmarkId, LandmarkPoint};
use pinch_volume::{MemoryVolume, VolumeControl, VolumeLevel};
use std::time::{Duration, Instant};

fn hand_with_distance(distance: i32) -> HandLandmarks {
    HandLandmarks::from_points([
        LandmarkPoint::new(LandmarkId::ThumbTip, 100, 100),
        LandmarkPoint::new(LandmarkId::IndexTip, 100 + distance, 100),
    ])
}

#[test]
fn test_applies_volume_for_detected_hand() {
    let mut tracker = VolumeTracker::default();
    let mut state = LoopState::new(Some(VolumeLevel::from_percent(30.0)));
    let mut endpoint = MemoryVolume::new(VolumeLevel::from_percent(30.0));

    let outcome = tracker.update(&mut state, Some(&hand_with_distance(105)), &mut endpoint);

    let metrics = outcome.metrics().copied().unwrap();
    assert_eq!(outcome, FrameOutcome::Applied(metrics));
    assert_eq!(metrics.percent, 50.0);
    assert_eq!(endpoint.level(), VolumeLevel::from_scalar(0.5));
    assert_eq!(state.last_level(), Some(VolumeLevel::from_scalar(0.5)));
}

#[test]
fn test_pinch_mutes_endpoint() {
    let mut tracker = VolumeTracker::default();
    let mut state = LoopState::new(None);
    let mut endpoint = MemoryVolume::new(VolumeLevel::FULL);

    let outcome = tracker.update(&mut state, Some(&hand_with_distance(10)), &mut endpoint);

    assert!(outcome.metrics().unwrap().pinch_engaged);
    assert_eq!(endpoint.level(), VolumeLevel::MUTED);
}

#[test]
fn test_no_hand_leaves_endpoint_alone() {
    let mut tracker = VolumeTracker::default();
    let initial = VolumeLevel::from_percent(30.0);
    let mut state = LoopState::new(Some(initial));
    let mut endpoint = MemoryVolume::new(initial);

    assert_eq!(tracker.update(&mut state, None, &mut endpoint), FrameOutcome::NoHand);
    assert_eq!(endpoint.set_calls(), 0);
    assert_eq!(endpoint.level(), initial);
    assert_eq!(state.last_level(), Some(initial));
}

#[test]
fn test_incomplete_hand_is_no_hand() {
    let mut tracker = VolumeTracker::default();
    let initial = VolumeLevel::from_percent(30.0);
    let mut state = LoopState::new(Some(initial));
    let mut endpoint = MemoryVolume::new(initial);
    let partial = HandLandmarks::from_points([
        LandmarkPoint::new(LandmarkId::Wrist, 200, 400),
        LandmarkPoint::new(LandmarkId::ThumbCmc, 180, 360),
        LandmarkPoint::new(LandmarkId::ThumbMcp, 160, 320),
    ]);

    assert_eq!(tracker.update(&mut state, Some(&partial), &mut endpoint), FrameOutcome::NoHand);
    assert_eq!(endpoint.set_calls(), 0);
    assert_eq!(endpoint.level(), initial);
}

#[test]
fn test_set_failure_is_retried_next_frame() {
    let mut tracker = VolumeTracker::default();
    let initial = VolumeLevel::from_percent(30.0);
    let mut state = LoopState::new(Some(initial));
    let mut endpoint = MemoryVolume::new(initial).with_failures(2);
    let hand = hand_with_distance(105);

    assert!(matches!(
        tracker.update(&mut state, Some(&hand), &mut endpoint),
        FrameOutcome::SetFailed(_)
    ));
    assert_eq!(state.failure_streak(), 1);
    assert!(matches!(
        tracker.update(&mut state, Some(&hand), &mut endpoint),
        FrameOutcome::SetFailed(_)
    ));
    assert_eq!(state.failure_streak(), 2);
    assert_eq!(state.failed_sets(), 2);
    assert_eq!(endpoint.level(), initial);
    assert_eq!(state.last_level(), Some(initial));

    assert!(matches!(
        tracker.update(&mut state, Some(&hand), &mut endpoint),
        FrameOutcome::Applied(_)
    ));
    assert_eq!(state.failure_streak(), 0);
    assert_eq!(state.failed_sets(), 2);
    assert_eq!(endpoint.set_calls(), 3);
    assert_eq!(endpoint.level(), VolumeLevel::from_scalar(0.5));
}

#[test]
fn test_tracker_drives_boxed_endpoint() {
    let mut tracker = VolumeTracker::default();
    let mut state = LoopState::new(None);
    let mut endpoint: Box<dyn VolumeControl> = Box::new(MemoryVolume::default());

    let outcome = tracker.update(&mut state, Some(&hand_with_distance(200)), endpoint.as_mut());

    assert_eq!(outcome.metrics().unwrap().percent, 100.0);
    assert_eq!(endpoint.volume().unwrap(), VolumeLevel::FULL);
}

#[test]
fn test_frame_clock() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    assert_eq!(clock.tick(t0), 0.0);
    let fps = clock.tick(t0 + Duration::from_millis(50));
    assert!((fps - 20.0).abs() < 1e-3, "{fps}");
    assert_eq!(clock.tick(t0 + Duration::from_millis(50)), 0.0);
}

#[test]
fn test_loop_state_tracks_fps() {
    let mut state = LoopState::new(None);
    let t0 = Instant::now();
    assert_eq!(state.tick(t0), 0.0);
    state.tick(t0 + Duration::from_millis(100));
    assert!((state.fps() - 10.0).abs() < 1e-3);
}
