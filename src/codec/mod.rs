//! LSB embedding and extraction.
//!
//! A payload is expanded LSB-first into bits, followed by 8 zero bits as a
//! sentinel, and written one bit per color channel in row-major pixel
//! order (red, green, blue). Alpha is never touched. Decoding reads every
//! color LSB back and regroups bytes until it sees 8 consecutive zeros.

mod capacity;
mod decoder;
mod encoder;

pub use capacity::{capacity, fits, required_bits, CapacityReport};
pub use decoder::{bits_to_bytes, decode, decode_with, extract_bits};
pub use encoder::{embed_bits, encode, encode_checked, encode_with, payload_bits};

use crate::config::CodecConfig;
use crate::error::Result;
use crate::raster::PixelBuffer;

/// Encoder and decoder sharing one configuration.
///
/// Holds no state besides the configuration, so one instance can serve
/// any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LsbCodec {
    config: CodecConfig,
}

impl LsbCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Embed `payload` into a copy of `pixels`.
    pub fn encode(&self, pixels: &PixelBuffer, payload: &[u8]) -> Result<PixelBuffer> {
        encode_with(pixels, payload, &self.config)
    }

    /// Recover the payload embedded in `pixels`.
    pub fn decode(&self, pixels: &PixelBuffer) -> Result<Vec<u8>> {
        decode_with(pixels, self.config.stop_rule)
    }

    /// Capacity summary for `pixels`.
    pub fn capacity(&self, pixels: &PixelBuffer) -> CapacityReport {
        CapacityReport::new(pixels.width(), pixels.height())
    }
}
