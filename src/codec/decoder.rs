//! Payload extraction from color channel LSBs.

use crate::bits::{get_lsb, BitStream};
use crate::config::{StopRule, SENTINEL_BITS};
use crate::error::{Error, Result};
use crate::raster::{Pixel, PixelBuffer};
use log::debug;

/// Read the red, green and blue LSBs of every pixel, in order.
///
/// Always yields exactly three bits per pixel.
pub fn extract_bits(pixels: &[Pixel]) -> BitStream {
    let mut bits = BitStream::with_capacity(pixels.len() * 3);
    bits.extend(
        pixels
            .iter()
            .flat_map(|p| p.color_channels())
            .map(get_lsb),
    );
    bits
}

/// Regroup bits into bytes (LSB-first) until the stop marker is seen.
///
/// Every full 8-bit group starting at offset 0 is scanned. A zero counter
/// tracks consecutive unset bits; once it reaches 8 the scan stops and
/// the bytes completed so far are returned. The group being assembled at
/// that moment is dropped.
///
/// With [`StopRule::ZeroRun`] the counter carries over between groups, so
/// the marker may straddle a byte boundary and zero-heavy payload bytes
/// end the scan early. With [`StopRule::AlignedZeroByte`] the counter
/// restarts at every group.
pub fn bits_to_bytes(bits: &BitStream, rule: StopRule) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    let mut zero_run = 0usize;
    let mut offset = 0usize;

    while offset + 8 <= bits.len() {
        if rule == StopRule::AlignedZeroByte {
            zero_run = 0;
        }

        let mut byte = 0u8;
        for j in 0..8 {
            if bits.get(offset + j).unwrap_or(false) {
                byte |= 1 << j;
                zero_run = 0;
            } else {
                zero_run += 1;
            }

            if zero_run >= SENTINEL_BITS {
                debug!("Stop marker found at bit {}", offset + j);
                return Ok(bytes);
            }
        }

        bytes.push(byte);
        offset += 8;
    }

    Err(Error::NoStopMarker {
        scanned_bits: bits.len() as u64,
    })
}

/// Recover the payload embedded in `pixels` using the default stop rule.
pub fn decode(pixels: &PixelBuffer) -> Result<Vec<u8>> {
    decode_with(pixels, StopRule::default())
}

/// Recover the payload embedded in `pixels`.
pub fn decode_with(pixels: &PixelBuffer, rule: StopRule) -> Result<Vec<u8>> {
    let bits = extract_bits(pixels.pixels());
    debug!(
        "Scanning {} bits from {}x{} image",
        bits.len(),
        pixels.width(),
        pixels.height()
    );
    bits_to_bytes(&bits, rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(bytes: &[u8]) -> BitStream {
        BitStream::from_bytes(bytes)
    }

    #[test]
    fn test_extract_three_bits_per_pixel() {
        let pixels = [Pixel::new(0, 1, 0, 1), Pixel::new(1, 0, 3, 2)];

        let bits: Vec<bool> = extract_bits(&pixels).iter().collect();

        assert_eq!(bits, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_stops_at_aligned_zero_byte() {
        let bits = bits_of(&[b'h', b'i', 0x00, 0xFF]);

        assert_eq!(bits_to_bytes(&bits, StopRule::ZeroRun).unwrap(), b"hi");
        assert_eq!(
            bits_to_bytes(&bits, StopRule::AlignedZeroByte).unwrap(),
            b"hi"
        );
    }

    #[test]
    fn test_zero_run_straddles_groups() {
        // 0x01 ends in seven zeros, 0x80 starts with seven more.
        let bits = bits_of(&[0x01, 0x80, 0x00]);

        assert_eq!(bits_to_bytes(&bits, StopRule::ZeroRun).unwrap(), vec![0x01]);
        assert_eq!(
            bits_to_bytes(&bits, StopRule::AlignedZeroByte).unwrap(),
            vec![0x01, 0x80]
        );
    }

    #[test]
    fn test_last_full_group_is_scanned() {
        let bits = bits_of(&[0x41, 0x00]);
        assert_eq!(bits_to_bytes(&bits, StopRule::ZeroRun).unwrap(), vec![0x41]);
    }

    #[test]
    fn test_no_stop_marker() {
        let mut bits = bits_of(&[0xFF, 0x7F]);
        // Trailing partial group is never scanned.
        bits.extend([false; 7]);

        let result = bits_to_bytes(&bits, StopRule::ZeroRun);
        assert!(matches!(
            result,
            Err(Error::NoStopMarker { scanned_bits: 23 })
        ));
    }

    #[test]
    fn test_empty_input_has_no_marker() {
        let empty = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert!(matches!(
            decode(&empty),
            Err(Error::NoStopMarker { scanned_bits: 0 })
        ));
    }
}
