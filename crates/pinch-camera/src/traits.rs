use crate::{CameraError, Frame};

/// Blocking frame source.
///
/// Each call to `read` waits for and returns the next frame. Sources are
/// infinite and cannot be rewound; an error means this pull produced no
/// image, not that the source is finished.
pub trait FrameSource {
    fn read(&mut self) -> Result<Frame, CameraError>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn read(&mut self) -> Result<Frame, CameraError> {
        (**self).read()
    }
}
