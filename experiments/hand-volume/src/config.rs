use pinch_camera::CameraConfig;
use pinch_gesture::CalibrationRange;
use pinch_hand::DetectorConfig;
use std::fmt;
use std::path::{Path, PathBuf};

pub const CAMERA_DEVICE_VAR: &str = "PINCH_CAMERA_DEVICE";
pub const MODEL_PATH_VAR: &str = "PINCH_MODEL_PATH";
pub const DETECTION_CONFIDENCE_VAR: &str = "PINCH_DETECTION_CONFIDENCE";
pub const SIMULATE_VAR: &str = "PINCH_SIMULATE";
pub const DRY_RUN_VAR: &str = "PINCH_DRY_RUN";
pub const LOG_DIR_VAR: &str = "PINCH_LOG_DIR";

const DEFAULT_MODEL_PATH: &str = "models/hand_landmark.onnx";

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    var: &'static str,
    value: String,
    expected: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}: expected {}", self.var, self.value, self.expected)
    }
}

impl std::error::Error for ConfigError {}

/// Startup configuration for the hand volume loop.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    camera: CameraConfig,
    detector: DetectorConfig,
    calibration: CalibrationRange,
    model_path: PathBuf,
    simulate: bool,
    dry_run: bool,
    log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            detector: DetectorConfig::default(),
            calibration: CalibrationRange::default(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            simulate: false,
            dry_run: false,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Read the `PINCH_*` environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`AppConfig::from_env`] with variables resolved by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(device) = lookup(CAMERA_DEVICE_VAR) {
            config.camera = config.camera.with_device(device);
        }
        if let Some(path) = lookup(MODEL_PATH_VAR) {
            config.model_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(DETECTION_CONFIDENCE_VAR) {
            let confidence = value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|c| (0.0..=1.0).contains(c))
                .ok_or_else(|| ConfigError {
                    var: DETECTION_CONFIDENCE_VAR,
                    value: value.clone(),
                    expected: "a number in [0, 1]",
                })?;
            config.detector = config.detector.with_detection_confidence(confidence);
        }
        if let Some(value) = lookup(SIMULATE_VAR) {
            config = config.with_simulate(parse_flag(SIMULATE_VAR, &value)?);
        }
        if let Some(value) = lookup(DRY_RUN_VAR) {
            config = config.with_dry_run(parse_flag(DRY_RUN_VAR, &value)?);
        }
        config.log_dir = lookup(LOG_DIR_VAR).filter(|dir| !dir.is_empty()).map(PathBuf::from);

        Ok(config)
    }

    pub fn with_simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }

    pub fn detector(&self) -> &DetectorConfig {
        &self.detector
    }

    pub fn calibration(&self) -> &CalibrationRange {
        &self.calibration
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Pattern camera and pointer-driven hand instead of real devices.
    pub fn simulate(&self) -> bool {
        self.simulate
    }

    /// Keep the volume in memory instead of touching the audio server.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            var,
            value: value.to_string(),
            expected: "a boolean flag such as 1 or 0",
        }),
    }
}
