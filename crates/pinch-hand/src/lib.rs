//! Hand landmarks and the detectors that produce them.
//!
//! Landmarks follow the 21-point hand convention (0 = wrist, 4 = thumb tip,
//! 8 = index tip, ...). A detection is a fixed-shape [`HandLandmarks`] where
//! every landmark may independently be missing, so asking for the thumb tip
//! is a checked lookup rather than an index into a variable-length list.

pub mod detector;
pub mod error;
pub mod landmark;
pub mod landmarker;
pub mod simulated;

pub use detector::{DetectorConfig, HandDetector};
pub use error::{DetectError, LandmarkError};
pub use landmark::{HAND_CONNECTIONS, HAND_LANDMARK_COUNT, HandLandmarks, LandmarkId, LandmarkPoint};
pub use landmarker::{Letterbox, postprocess, preprocess};
pub use simulated::SimulatedHand;

#[cfg(feature = "onnx")]
pub use landmarker::OnnxHandDetector;
