use pinch_base::Vec2;
use pinch_camera::Frame;
use pinch_hand::{DetectError, DetectorConfig, HandDetector, HandLandmarks, LandmarkId, SimulatedHand};

struct ScriptedDetector {
    script: Vec<Option<HandLandmarks>>,
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Option<HandLandmarks>, DetectError> {
        if self.script.is_empty() {
            return Err(DetectError::Model("script exhausted".to_string()));
        }
        Ok(self.script.remove(0))
    }
}

fn frame() -> Frame {
    Frame::filled(640, 480, [0, 0, 0]).unwrap()
}

#[test]
fn test_detector_config_defaults() {
    let config = DetectorConfig::default();
    assert_eq!(config.detection_confidence(), 0.7);
    assert_eq!(config.input_size(), 224);
}

#[test]
fn test_detector_config_clamps_confidence() {
    assert_eq!(DetectorConfig::default().with_detection_confidence(1.5).detection_confidence(), 1.0);
    assert_eq!(DetectorConfig::default().with_detection_confidence(-0.1).detection_confidence(), 0.0);
    assert_eq!(DetectorConfig::default().with_input_size(256).input_size(), 256);
}

#[test]
fn test_simulated_hand_absent_without_pointer() {
    let mut hand = SimulatedHand::centered(640, 480);
    assert_eq!(hand.anchor(), Vec2::new(320, 240));
    assert_eq!(hand.detect(&frame()).unwrap(), None);
}

#[test]
fn test_simulated_hand_tracks_pointer() {
    let mut hand = SimulatedHand::new(Vec2::new(300, 200));
    hand.set_pointer(Some(Vec2::new(300, 305)));

    let landmarks = hand.detect(&frame()).unwrap().expect("hand");
    assert_eq!(landmarks.len(), 21);
    assert_eq!(
        landmarks.fingertips(),
        Some((Vec2::new(300, 200), Vec2::new(300, 305)))
    );

    hand.set_pointer(None);
    assert_eq!(hand.detect(&frame()).unwrap(), None);
}

#[test]
fn test_boxed_detector_dispatch() {
    let mut tips = HandLandmarks::new();
    tips.set(LandmarkId::ThumbTip, Vec2::new(0, 0));
    tips.set(LandmarkId::IndexTip, Vec2::new(0, 40));

    let mut detector: Box<dyn HandDetector> = Box::new(ScriptedDetector {
        script: vec![None, Some(tips)],
    });
    assert_eq!(detector.detect(&frame()).unwrap(), None);
    assert_eq!(detector.detect(&frame()).unwrap(), Some(tips));
    assert!(matches!(detector.detect(&frame()), Err(DetectError::Model(_))));
}

#[test]
fn test_detect_error_display() {
    let err: DetectError = pinch_hand::LandmarkError::InvalidId(30).into();
    assert!(err.to_string().contains("30"));
    assert!(DetectError::Shape("63".into()).to_string().starts_with("shape error"));
}
