use std::fmt;

/// Frame construction failures.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameError {
    SizeOverflow,
    SizeMismatch { expected: usize, got: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::SizeOverflow => write!(f, "frame dimensions overflow when multiplied"),
            FrameError::SizeMismatch { expected, got } => {
                write!(f, "frame size mismatch: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for FrameError {}

#[derive(Debug)]
pub enum CameraError {
    Device(String),
    Stream(String),
    Decode(String),
    Frame(FrameError),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(msg) => write!(f, "decode error: {msg}"),
            CameraError::Frame(err) => write!(f, "frame error: {err}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<image::ImageError> for CameraError {
    fn from(err: image::ImageError) -> Self {
        CameraError::Decode(err.to_string())
    }
}

impl From<FrameError> for CameraError {
    fn from(err: FrameError) -> Self {
        CameraError::Frame(err)
    }
}
