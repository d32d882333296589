//! huewheel - native host for the huewheel_ui color wheel
//!
//! Loads a JSON configuration, replays scripted pointer input through the
//! wheel and rasterizes the result to a PNG.

pub mod config;
pub mod error;
pub mod raster;
pub mod session;

pub use config::{AppConfig, CanvasConfig, ConfigError, LogLevel};
pub use error::{HostError, Result};
pub use session::{Message, Session};
