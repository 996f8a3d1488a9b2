//! Error types for the LSB codec.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while embedding or extracting a payload.
#[derive(Error, Debug)]
pub enum Error {
    /// Encode was called with nothing to embed.
    #[error("No data to encode: payload is empty")]
    EmptyPayload,

    /// The whole bit capacity was scanned without finding a stop marker.
    #[error("No stop marker found after scanning {scanned_bits} bits")]
    NoStopMarker { scanned_bits: u64 },

    /// Payload plus sentinel does not fit into the image.
    #[error("Payload does not fit: need {needed} bits, image holds {available} bits")]
    CapacityExceeded { needed: u64, available: u64 },

    /// Pixel count disagrees with the declared dimensions.
    #[error("Invalid dimensions: {width}x{height} does not match {pixels} pixels")]
    InvalidDimensions {
        width: u32,
        height: u32,
        pixels: usize,
    },

    /// Refusing to write an encoded image through a lossy format.
    #[error("Refusing lossy or unsupported output format: {0}")]
    LossyFormat(PathBuf),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding failure.
    #[error("Image error: {0}")]
    Image(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid codec configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}
