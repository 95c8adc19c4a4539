use crate::{CameraConfig, CameraError, Frame, FrameSource};

/// Synthetic frame source: a dark vertical gradient with a bright band that
/// sweeps down one row per frame. Used for simulation mode.
#[derive(Debug)]
pub struct PatternCamera {
    width: usize,
    height: usize,
    frame_count: u64,
}

impl PatternCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            width: config.width() as usize,
            height: config.height() as usize,
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl FrameSource for PatternCamera {
    fn read(&mut self) -> Result<Frame, CameraError> {
        let band = if self.height == 0 {
            0
        } else {
            (self.frame_count % self.height as u64) as usize
        };
        self.frame_count += 1;

        let mut data = Vec::with_capacity(self.width * self.height * Frame::CHANNELS);
        for y in 0..self.height {
            let shade = (y * 64 / self.height.max(1)) as u8;
            let rgb = if y.abs_diff(band) < 2 {
                [90, 90, 110]
            } else {
                [shade / 2, shade / 2, shade]
            };
            for _ in 0..self.width {
                data.extend_from_slice(&rgb);
            }
        }

        Ok(Frame::new(self.width, self.height, data)?)
    }
}
