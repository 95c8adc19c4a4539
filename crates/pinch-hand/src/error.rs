use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandmarkError {
    InvalidId(usize),
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::InvalidId(id) => {
                write!(f, "invalid landmark id {id}, must be in range 0-20")
            }
        }
    }
}

impl std::error::Error for LandmarkError {}

#[derive(Debug)]
pub enum DetectError {
    /// The frame cannot be fed to the detector.
    Frame(String),
    /// The model produced output of an unexpected shape.
    Shape(String),
    /// Model loading or inference failed.
    Model(String),
    Landmark(LandmarkError),
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::Frame(msg) => write!(f, "frame error: {msg}"),
            DetectError::Shape(msg) => write!(f, "shape error: {msg}"),
            DetectError::Model(msg) => write!(f, "model error: {msg}"),
            DetectError::Landmark(err) => write!(f, "landmark error: {err}"),
        }
    }
}

impl std::error::Error for DetectError {}

impl From<LandmarkError> for DetectError {
    fn from(err: LandmarkError) -> Self {
        DetectError::Landmark(err)
    }
}

#[cfg(feature = "onnx")]
impl From<ort::Error> for DetectError {
    fn from(err: ort::Error) -> Self {
        DetectError::Model(err.to_string())
    }
}
