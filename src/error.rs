//! Error types for the native host.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while rendering and exporting the wheel.
#[derive(Error, Debug)]
pub enum HostError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding or writing failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Canvas has a zero dimension
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, HostError>;
