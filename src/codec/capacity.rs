//! Capacity arithmetic.

use crate::config::{BITS_PER_CHANNEL, CHANNELS_PER_PIXEL, SENTINEL_BITS};
use serde::{Deserialize, Serialize};

/// Number of payload bits an image of the given size can hold.
pub fn capacity(width: u32, height: u32) -> u64 {
    width as u64 * height as u64 * CHANNELS_PER_PIXEL * BITS_PER_CHANNEL
}

/// Bits consumed by a payload of `payload_len` bytes, sentinel included.
pub fn required_bits(payload_len: usize) -> u64 {
    payload_len as u64 * 8 + SENTINEL_BITS as u64
}

/// Whether a payload of `payload_len` bytes fits into a `width` x `height` image.
pub fn fits(width: u32, height: u32, payload_len: usize) -> bool {
    required_bits(payload_len) <= capacity(width, height)
}

/// Summary of what an image can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    /// Total embeddable bits.
    pub capacity_bits: u64,
    /// Largest payload that still leaves room for the sentinel.
    pub max_payload_bytes: u64,
}

impl CapacityReport {
    pub fn new(width: u32, height: u32) -> Self {
        let capacity_bits = capacity(width, height);
        Self {
            width,
            height,
            capacity_bits,
            max_payload_bytes: capacity_bits.saturating_sub(SENTINEL_BITS as u64) / 8,
        }
    }
}
