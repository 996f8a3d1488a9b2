//! Payload embedding into color channel LSBs.

use crate::bits::{set_lsb, BitStream};
use crate::codec::capacity::capacity;
use crate::config::{CodecConfig, SENTINEL_BITS};
use crate::error::{Error, Result};
use crate::raster::{Pixel, PixelBuffer};
use log::{debug, warn};

/// Expand a payload into the bits that get embedded: data bits LSB-first,
/// followed by the all-zero sentinel.
pub fn payload_bits(payload: &[u8]) -> BitStream {
    let mut bits = BitStream::from_bytes(payload);
    bits.extend(std::iter::repeat(false).take(SENTINEL_BITS));
    bits
}

/// Write `bits` into the red, green and blue LSBs of `pixels`, in order.
///
/// Traversal stops as soon as the bits run out; later channels and pixels
/// are left as they were. Returns the number of bits written, which is
/// less than `bits.len()` when the pixels run out first.
pub fn embed_bits(pixels: &mut [Pixel], bits: &BitStream) -> usize {
    let mut source = bits.iter();
    let mut written = 0;

    for pixel in pixels.iter_mut() {
        for channel in pixel.color_channels_mut() {
            match source.next() {
                Some(bit) => {
                    *channel = set_lsb(*channel, bit);
                    written += 1;
                }
                None => return written,
            }
        }
    }

    written
}

/// Embed `payload` into a copy of `pixels` with the default configuration.
///
/// Capacity is not checked: a payload that does not fit is truncated and
/// the result will not decode back to it. Use [`encode_checked`] to reject
/// oversized payloads instead.
///
/// # Example
///
/// ```
/// use lsb_stego::codec::{decode, encode};
/// use lsb_stego::raster::{Pixel, PixelBuffer};
///
/// let cover = PixelBuffer::filled(16, 16, Pixel::new(0xFF, 0x40, 0x80, 0xC0));
/// let stego = encode(&cover, b"hi").unwrap();
///
/// assert_eq!(decode(&stego).unwrap(), b"hi");
/// ```
pub fn encode(pixels: &PixelBuffer, payload: &[u8]) -> Result<PixelBuffer> {
    encode_with(pixels, payload, &CodecConfig::default())
}

/// Embed `payload`, failing with [`Error::CapacityExceeded`] if it does not fit.
pub fn encode_checked(pixels: &PixelBuffer, payload: &[u8]) -> Result<PixelBuffer> {
    let config = CodecConfig {
        strict_capacity: true,
        ..CodecConfig::default()
    };
    encode_with(pixels, payload, &config)
}

/// Embed `payload` into a copy of `pixels`.
///
/// The input buffer is never modified. Alpha channels are never touched.
pub fn encode_with(
    pixels: &PixelBuffer,
    payload: &[u8],
    config: &CodecConfig,
) -> Result<PixelBuffer> {
    if payload.is_empty() {
        return Err(Error::EmptyPayload);
    }

    let bits = payload_bits(payload);
    let needed = bits.len() as u64;
    let available = capacity(pixels.width(), pixels.height());

    if needed > available {
        if config.strict_capacity {
            return Err(Error::CapacityExceeded { needed, available });
        }
        warn!(
            "Payload needs {} bits but image holds {}; output will be truncated",
            needed, available
        );
    }

    let mut output = pixels.clone();
    let written = embed_bits(output.pixels_mut(), &bits);
    debug!(
        "Embedded {} of {} bits into {}x{} image",
        written,
        needed,
        pixels.width(),
        pixels.height()
    );

    Ok(output)
}
