use crate::{VolumeError, VolumeLevel};

/// Get/set access to one endpoint's master volume.
///
/// `set_volume` may fail transiently, e.g. when the output device is swapped
/// mid-session; callers are expected to simply try again later.
pub trait VolumeControl {
    fn volume(&mut self) -> Result<VolumeLevel, VolumeError>;
    fn set_volume(&mut self, level: VolumeLevel) -> Result<(), VolumeError>;
}

impl<V: VolumeControl + ?Sized> VolumeControl for Box<V> {
    fn volume(&mut self) -> Result<VolumeLevel, VolumeError> {
        (**self).volume()
    }

    fn set_volume(&mut self, level: VolumeLevel) -> Result<(), VolumeError> {
        (**self).set_volume(level)
    }
}
