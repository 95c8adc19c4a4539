use crate::{CameraConfig, CameraError, Frame, FrameSource, decode_mjpeg, yuyv_to_rgb};
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PixelFormat {
    Mjpeg,
    Yuyv,
}

/// V4L2 camera read synchronously on the calling thread.
///
/// Prefers MJPEG and falls back to YUYV when the device does not offer it.
pub struct V4l2Camera {
    config: CameraConfig,
    format: PixelFormat,
    width: u32,
    height: u32,
    stream: MmapStream<'static>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stream", &"<v4l::MmapStream>")
            .finish()
    }
}

impl V4l2Camera {
    /// Open `config.device()`, negotiate a pixel format at the requested
    /// resolution, set the frame rate and queue the capture buffers.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, offers
    /// neither MJPEG nor YUYV, or rejects the format or stream setup.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let (format, negotiated) = Self::negotiate(&device, &config)?;
        if negotiated.width != config.width() || negotiated.height != config.height() {
            log::warn!(
                "{} delivers {}x{} instead of the requested {}x{}",
                config.device(),
                negotiated.width,
                negotiated.height,
                config.width(),
                config.height()
            );
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, config.buffer_count())?;

        log::info!(
            "opened {} as {:?} {}x{} @ {} fps",
            config.device(),
            format,
            negotiated.width,
            negotiated.height,
            config.fps()
        );

        Ok(Self {
            config,
            format,
            width: negotiated.width,
            height: negotiated.height,
            stream,
        })
    }

    fn negotiate(device: &Device, config: &CameraConfig) -> Result<(PixelFormat, Format), CameraError> {
        for (fourcc, format) in [(b"MJPG", PixelFormat::Mjpeg), (b"YUYV", PixelFormat::Yuyv)] {
            let requested = Format::new(config.width(), config.height(), FourCC::new(fourcc));
            let accepted = Capture::set_format(device, &requested)?;
            if accepted.fourcc == FourCC::new(fourcc) {
                return Ok((format, accepted));
            }
            log::debug!("{} rejected {}, got {}", config.device(), requested.fourcc, accepted.fourcc);
        }

        Err(CameraError::Device(
            "device supports neither MJPEG nor YUYV".to_string(),
        ))
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}

impl FrameSource for V4l2Camera {
    fn read(&mut self) -> Result<Frame, CameraError> {
        let (buffer, _metadata) = CaptureStream::next(&mut self.stream)
            .map_err(|e| CameraError::Stream(e.to_string()))?;

        match self.format {
            PixelFormat::Mjpeg => decode_mjpeg(buffer),
            PixelFormat::Yuyv => {
                let rgb = yuyv_to_rgb(buffer, self.width, self.height).ok_or_else(|| {
                    CameraError::Stream(format!("short YUYV buffer: {} bytes", buffer.len()))
                })?;
                Ok(Frame::new(self.width as usize, self.height as usize, rgb)?)
            }
        }
    }
}
