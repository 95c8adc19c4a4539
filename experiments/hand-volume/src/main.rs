mod config;
mod frame_loop;
mod hud;

use config::AppConfig;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use pinch_base::{Vec2, init_file_logger, init_stdout_logger, log_fatal};
use frame_loop::{FrameResult, run_frame};
use pinch_camera::{CameraConfig, Frame, FrameSource, PatternCamera};
use pinch_gesture::{GestureVolumeMapper, LoopState, VolumeTracker};
use pinch_hand::{DetectError, HandDetector, HandLandmarks, SimulatedHand};
use pinch_volume::{MemoryVolume, VolumeControl, VolumeLevel};
use std::error::Error;
use std::time::Instant;

const WINDOW_TITLE: &str = "Volume Hand Control";

/// Hand source for the loop. The simulated hand follows the mouse, so the
/// loop has to feed it the pointer before each frame.
enum Hands {
    Simulated(SimulatedHand),
    Model(Box<dyn HandDetector>),
}

impl Hands {
    fn track_pointer(&mut self, window: &Window) {
        if let Hands::Simulated(hand) = self {
            hand.set_pointer(pointer(window));
        }
    }
}

impl HandDetector for Hands {
    fn detect(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, DetectError> {
        match self {
            Hands::Simulated(hand) => hand.detect(frame),
            Hands::Model(detector) => detector.detect(frame),
        }
    }
}

/// Mouse position while the left button is held.
fn pointer(window: &Window) -> Option<Vec2<i32>> {
    if !window.get_mouse_down(MouseButton::Left) {
        return None;
    }
    window
        .get_mouse_pos(MouseMode::Discard)
        .map(|(x, y)| Vec2::new(x as i32, y as i32))
}

#[cfg(feature = "v4l2")]
fn open_device_camera(config: &CameraConfig) -> Result<Box<dyn FrameSource>, Box<dyn Error>> {
    Ok(Box::new(pinch_camera::V4l2Camera::new(config.clone())?))
}

#[cfg(not(feature = "v4l2"))]
fn open_device_camera(_config: &CameraConfig) -> Result<Box<dyn FrameSource>, Box<dyn Error>> {
    Err("built without V4L2 capture; set PINCH_SIMULATE=1".into())
}

#[cfg(feature = "onnx")]
fn open_model(config: &AppConfig) -> Result<Box<dyn HandDetector>, Box<dyn Error>> {
    let detector = pinch_hand::OnnxHandDetector::from_file(config.model_path(), config.detector().clone())?;
    Ok(Box::new(detector))
}

#[cfg(not(feature = "onnx"))]
fn open_model(_config: &AppConfig) -> Result<Box<dyn HandDetector>, Box<dyn Error>> {
    Err("built without ONNX hand detection; set PINCH_SIMULATE=1".into())
}

#[cfg(feature = "pulse")]
fn open_endpoint() -> Result<Box<dyn VolumeControl>, Box<dyn Error>> {
    Ok(Box::new(pinch_volume::PulseVolume::new()?))
}

#[cfg(not(feature = "pulse"))]
fn open_endpoint() -> Result<Box<dyn VolumeControl>, Box<dyn Error>> {
    Err("built without PulseAudio support; set PINCH_DRY_RUN=1".into())
}

fn run(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let camera_config = config.camera();
    let (width, height) = (camera_config.width() as usize, camera_config.height() as usize);

    let mut camera: Box<dyn FrameSource> = if config.simulate() {
        log::info!("simulation mode: hold the left mouse button to move the index tip");
        Box::new(PatternCamera::new(camera_config))
    } else {
        open_device_camera(camera_config)?
    };

    let mut hands = if config.simulate() {
        Hands::Simulated(SimulatedHand::centered(width, height))
    } else {
        log::info!("loading hand landmark model {}", config.model_path().display());
        Hands::Model(open_model(config)?)
    };

    let mut endpoint: Box<dyn VolumeControl> = if config.dry_run() {
        log::info!("dry run: volume changes stay in memory");
        Box::new(MemoryVolume::new(VolumeLevel::from_percent(50.0)))
    } else {
        open_endpoint()?
    };

    let initial = match endpoint.volume() {
        Ok(level) => {
            log::info!("current volume {level}");
            Some(level)
        }
        Err(e) => {
            log::warn!("could not read current volume: {e}");
            None
        }
    };

    let calibration = *config.calibration();
    log::info!(
        "calibration: {}px -> 0%, {}px -> 100%, pinch below {}px",
        calibration.min_distance_px(),
        calibration.max_distance_px(),
        calibration.pinch_zero_px()
    );
    let mut tracker = VolumeTracker::new(GestureVolumeMapper::new(calibration));
    let mut state = LoopState::new(initial);

    let mut window = Window::new(WINDOW_TITLE, width, height, WindowOptions::default())?;
    window.set_target_fps(camera_config.fps() as usize);

    log::info!("running, press Q or Escape to quit");
    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        let fps = state.tick(Instant::now());
        hands.track_pointer(&window);

        let Some(FrameResult {
            mut frame,
            hand,
            outcome,
        }) = run_frame(
            camera.as_mut(),
            &mut hands,
            &mut tracker,
            &mut state,
            endpoint.as_mut(),
        )
        else {
            window.update();
            continue;
        };

        hud::draw_hud(&mut frame, hand.as_ref(), outcome.metrics(), fps);
        let argb = hud::rgb_to_argb(frame.data(), frame.width(), frame.height());
        window.update_with_buffer(&argb, frame.width(), frame.height())?;
    }

    log::info!(
        "exiting, last volume {}, {} failed volume updates",
        state
            .last_level()
            .map_or_else(|| "unknown".to_string(), |level| level.to_string()),
        state.failed_sets()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    match config.log_dir() {
        Some(dir) => init_file_logger(dir)?,
        None => init_stdout_logger(),
    }

    log::info!("{WINDOW_TITLE}");
    log::debug!("{config:?}");

    if let Err(e) = run(&config) {
        log_fatal!("{e}");
    }
    Ok(())
}
