//! Single-hand landmark model pipeline.
//!
//! The model takes a square NCHW RGB tensor `[1, 3, S, S]` in `[0, 1]` and
//! yields two outputs: 21 × (x, y, z) landmark coordinates in input pixels
//! (63 values) and a hand presence score (1 value). Outputs are told apart
//! by element count, so output names do not matter.

mod postprocess;
mod preprocess;

#[cfg(feature = "onnx")]
mod onnx;

pub use postprocess::{LANDMARK_OUTPUT_LEN, postprocess};
pub use preprocess::{Letterbox, preprocess};

#[cfg(feature = "onnx")]
pub use onnx::OnnxHandDetector;
