//! Configuration constants and types for the LSB codec.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color channels carrying payload bits per pixel (red, green, blue).
pub const CHANNELS_PER_PIXEL: u64 = 3;

/// Payload bits stored in each color channel.
pub const BITS_PER_CHANNEL: u64 = 1;

/// Length of the all-zero run appended after the payload.
pub const SENTINEL_BITS: usize = 8;

/// How the decoder recognises the end of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopRule {
    /// Stop on any run of 8 zero bits, even one spanning two byte groups.
    ///
    /// Zero-heavy payloads terminate early under this rule. It is the
    /// behavior existing encoded images were produced against.
    #[default]
    ZeroRun,

    /// Stop only on a byte-aligned group whose 8 bits are all zero.
    AlignedZeroByte,
}

/// Configuration for encode/decode calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Stop-marker detection used by the decoder.
    pub stop_rule: StopRule,

    /// Reject payloads that exceed the image capacity instead of truncating.
    pub strict_capacity: bool,
}

impl CodecConfig {
    /// Create a configuration with explicit settings.
    pub fn new(stop_rule: StopRule, strict_capacity: bool) -> Self {
        Self {
            stop_rule,
            strict_capacity,
        }
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CodecConfig = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
