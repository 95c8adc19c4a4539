use super::{LANDMARK_OUTPUT_LEN, postprocess, preprocess};
use crate::{DetectError, DetectorConfig, HandDetector, HandLandmarks};
use ort::session::Session;
use ort::value::Tensor;
use pinch_camera::Frame;
use std::path::Path;

/// Hand landmark detector backed by an ONNX Runtime session.
pub struct OnnxHandDetector {
    session: Session,
    output_names: Vec<String>,
    config: DetectorConfig,
}

impl std::fmt::Debug for OnnxHandDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxHandDetector")
            .field("output_names", &self.output_names)
            .field("config", &self.config)
            .finish()
    }
}

impl OnnxHandDetector {
    /// Load the landmark model from `path` on the CPU execution provider.
    pub fn from_file(path: impl AsRef<Path>, config: DetectorConfig) -> Result<Self, DetectError> {
        let path = path.as_ref();
        let session = Session::builder()?
            .commit_from_file(path)
            .map_err(|e| DetectError::Model(format!("failed to load {}: {e}", path.display())))?;

        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();
        if output_names.len() < 2 {
            return Err(DetectError::Shape(format!(
                "landmark model needs 2 outputs, has {}",
                output_names.len()
            )));
        }

        log::info!(
            "loaded hand landmark model {} (outputs: {:?})",
            path.display(),
            output_names
        );

        Ok(Self {
            session,
            output_names,
            config,
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl HandDetector for OnnxHandDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, DetectError> {
        let size = self.config.input_size();
        let (input, letterbox) = preprocess(frame, size)?;
        let input = Tensor::from_array(([1usize, 3, size, size], input))?;

        let outputs = self.session.run(ort::inputs![input])?;

        let mut landmarks: Option<Vec<f32>> = None;
        let mut presence: Option<f32> = None;
        for name in &self.output_names {
            let (_shape, values) = outputs[name.as_str()].try_extract_tensor::<f32>()?;
            match values.len() {
                LANDMARK_OUTPUT_LEN.. if landmarks.is_none() => landmarks = Some(values.to_vec()),
                1 if presence.is_none() => presence = Some(values[0]),
                _ => {}
            }
        }

        let landmarks = landmarks.ok_or_else(|| {
            DetectError::Shape(format!("no output with {LANDMARK_OUTPUT_LEN} landmark values"))
        })?;
        let presence =
            presence.ok_or_else(|| DetectError::Shape("no hand presence output".to_string()))?;

        postprocess(
            &landmarks,
            presence,
            &letterbox,
            self.config.detection_confidence(),
        )
    }
}
