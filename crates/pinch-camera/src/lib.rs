//! Frame capture for the pinch operator loop.
//!
//! Sources implement the blocking [`FrameSource`] trait and hand out RGB
//! [`Frame`]s one at a time on the caller's thread.

pub mod config;
pub mod convert;
pub mod error;
pub mod frame;
pub mod pattern;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use convert::{decode_mjpeg, yuyv_to_rgb};
pub use error::{CameraError, FrameError};
pub use frame::Frame;
pub use pattern::PatternCamera;
pub use traits::FrameSource;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
