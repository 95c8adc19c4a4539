use crate::{DetectError, HandLandmarks};
use pinch_camera::Frame;

/// Finds at most one hand in a frame.
pub trait HandDetector {
    /// Landmarks of the tracked hand, or `None` when no hand is found.
    fn detect(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, DetectError>;
}

impl<D: HandDetector + ?Sized> HandDetector for Box<D> {
    fn detect(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, DetectError> {
        (**self).detect(frame)
    }
}

/// Detector tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    detection_confidence: f32,
    input_size: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            detection_confidence: 0.7,
            input_size: 224,
        }
    }
}

impl DetectorConfig {
    /// Minimum hand presence score for a detection to be reported.
    pub fn with_detection_confidence(mut self, confidence: f32) -> Self {
        self.detection_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Side length of the square model input.
    pub fn with_input_size(mut self, size: usize) -> Self {
        self.input_size = size;
        self
    }

    pub fn detection_confidence(&self) -> f32 {
        self.detection_confidence
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }
}
