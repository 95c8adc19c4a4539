use crate::FrameError;
use std::fmt;

/// An RGB8 raster in row-major HWC layout (`[height][width][3]`).
#[derive(Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Frame {
    pub const CHANNELS: usize = 3;

    /// Wrap an RGB buffer, checking that it holds exactly `width * height` pixels.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(FrameError::SizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A frame of a single color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self, FrameError> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// RGB value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * Self::CHANNELS;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }
}

fn byte_len(width: usize, height: usize) -> Result<usize, FrameError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(Frame::CHANNELS))
        .ok_or(FrameError::SizeOverflow)
}
