//! Pinch gesture → volume mapping.
//!
//! The distance between thumb tip and index tip is mapped through a
//! [`CalibrationRange`] onto a 0–100 % volume with saturating linear
//! interpolation. Closing the pinch below the pinch-zero threshold forces
//! 0 % and flags the pinch as engaged, which gives a reliable mute gesture.
//!
//! | distance | percent | pinch_engaged |
//! |---|---|---|
//! | `d <= pinch_zero` | 0 | true |
//! | `d <= min` | 0 | false |
//! | `min < d < max` | linear | false |
//! | `d >= max` | 100 | false |
//!
//! [`VolumeTracker`] runs the mapping once per frame and commits the result
//! to a [`VolumeControl`](pinch_volume::VolumeControl) endpoint, keeping the
//! loop's state in an explicit [`LoopState`].

pub mod calibration;
pub mod clock;
pub mod mapper;
pub mod tracker;

pub use calibration::{CalibrationError, CalibrationRange};
pub use clock::FrameClock;
pub use mapper::{FrameMetrics, GestureVolumeMapper, saturating_interp};
pub use tracker::{FrameOutcome, LoopState, VolumeTracker};
