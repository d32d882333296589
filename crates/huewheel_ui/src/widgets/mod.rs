// Widget implementations

mod color_wheel;
mod config;

pub use color_wheel::{color_wheel, ColorWheel};
pub use config::{SquareMapping, WheelConfig};
