//! Configuration file support for the native host.
//!
//! The host reads a JSON file describing the canvas, the wheel and a script
//! of pointer taps to replay. Every field is optional; missing fields take
//! their defaults.

use std::path::{Path, PathBuf};

use huewheel_ui::{Argb, Size, WheelConfig};
use serde::{Deserialize, Serialize};

/// Log level setting for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Pixel dimensions of the output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity level
    pub log_level: LogLevel,

    /// Output canvas size
    pub canvas: CanvasConfig,

    /// Ring and square settings
    pub wheel: WheelConfig,

    /// Color selected before any tap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_color: Option<Argb>,

    /// Canvas fill behind the wheel; transparent when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Argb>,

    /// Pointer taps to replay, in canvas coordinates
    pub taps: Vec<[f32; 2]>,

    /// Where the rendered PNG is written
    pub output: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            canvas: CanvasConfig::default(),
            wheel: WheelConfig::default(),
            initial_color: None,
            background: None,
            taps: Vec::new(),
            output: PathBuf::from(Self::default_output()),
        }
    }

    /// Default PNG filename.
    pub fn default_output() -> &'static str {
        "huewheel.png"
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(json)?;
        config.check_version()?;
        Ok(config)
    }

    /// Deserialize without checking the version or logging.
    ///
    /// The host uses this to learn the log level before a logger exists.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject files newer than [`CONFIG_VERSION`]; warn about older ones.
    pub fn check_version(&self) -> Result<(), ConfigError> {
        if self.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: self.version,
                supported_version: CONFIG_VERSION,
            });
        }
        if self.version < CONFIG_VERSION {
            log::warn!(
                "Config version mismatch: expected {}, got {}",
                CONFIG_VERSION,
                self.version
            );
        }
        Ok(())
    }

    /// Read and parse a file without checking the version.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::read(path)?.loaded_from(path)
    }

    /// Finish loading a config obtained with [`AppConfig::read`].
    pub fn loaded_from(self, path: &Path) -> Result<Self, ConfigError> {
        self.check_version()?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(self)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json()?)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use huewheel_ui::SquareMapping;
    use std::sync::Mutex;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(
            config.canvas,
            CanvasConfig {
                width: 400,
                height: 400
            }
        );
        assert_eq!(config.wheel, WheelConfig::default());
        assert!(config.taps.is_empty());
        assert_eq!(config.output, PathBuf::from("huewheel.png"));
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let json = r##"{
            "log_level": "debug",
            "canvas": { "width": 300, "height": 200 },
            "wheel": { "stroke_width": 30.0, "square_mapping": { "mode": "fixed_span", "span": 100.0 } },
            "initial_color": "#00FF00",
            "taps": [[250.0, 100.0], [150.0, 100.0]]
        }"##;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.canvas.size(), Size::new(300.0, 200.0));
        assert_eq!(config.wheel.stroke_width, 30.0);
        assert_eq!(config.wheel.square_mapping, SquareMapping::legacy());
        assert_eq!(config.initial_color, Some(Argb::GREEN));
        assert_eq!(config.taps.len(), 2);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = AppConfig::new();
        config.initial_color = Some(Argb::rgb(10, 20, 30));
        config.taps = vec![[1.0, 2.0]];
        let back = AppConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_version_too_new() {
        let err = AppConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let err = AppConfig::from_json(r##"{"initial_color": "#XYZ"}"##).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_parse_skips_version_check() {
        let config = AppConfig::parse(r#"{"version": 99, "log_level": "warn"}"#).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(matches!(
            config.check_version(),
            Err(ConfigError::VersionTooNew { file_version: 99, .. })
        ));
    }

    struct CaptureLogger;

    static CAPTURED: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
    static LOGGER: CaptureLogger = CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            CAPTURED
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_old_version_logs_warning() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let dir = std::env::temp_dir().join(format!("huewheel-config-{}", std::process::id()));
        let path = dir.join("old.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, r#"{"version": 0}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.version, 0);
        std::fs::remove_dir_all(&dir).unwrap();

        let captured = CAPTURED.lock().unwrap();
        assert!(captured.iter().any(|(level, message)| *level == log::Level::Warn
            && message.contains("Config version mismatch: expected 1, got 0")));
        assert!(captured.iter().any(|(level, message)| *level == log::Level::Info
            && message.starts_with("Loaded configuration from")));
    }
}
