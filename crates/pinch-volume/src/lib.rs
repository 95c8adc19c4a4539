//! Audio endpoint volume control.
//!
//! [`VolumeControl`] reads and writes the master level of one output
//! endpoint as a [`VolumeLevel`] scalar in [0.0, 1.0]. The PulseAudio
//! backend sits behind the `pulse` feature; [`MemoryVolume`] keeps the level
//! in-process.

pub mod error;
pub mod level;
pub mod memory;
pub mod traits;

#[cfg(feature = "pulse")]
pub mod pulse;

pub use error::VolumeError;
pub use level::VolumeLevel;
pub use memory::MemoryVolume;
pub use traits::VolumeControl;

#[cfg(feature = "pulse")]
pub use pulse::PulseVolume;
