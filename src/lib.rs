//! LSB Image Steganography
//!
//! Hides an arbitrary byte payload in the least significant bits of an
//! image's color channels and recovers it later.
//!
//! # Features
//!
//! - **Sentinel-terminated format**: payload bits are followed by 8 zero bits, no header
//! - **Bit-packed streams**: payload and extracted bits are stored 64 per word
//! - **Selectable stop rule**: the lenient zero-run scan existing images rely on, or a
//!   stricter byte-aligned one
//! - **Lossless I/O**: PNG/BMP/TIFF loading and saving through the `image` crate
//! - **CLI Interface**: `lsb-stego encode|decode|capacity`
//!
//! # Format
//!
//! ```text
//! payload bytes → bits (LSB-first) + 00000000 → R,G,B LSBs of pixel 0, 1, 2, ...
//! ```
//!
//! Capacity is `3 × width × height` bits. Encoding does not check it unless
//! asked to; oversized payloads are truncated.
//!
//! # Example
//!
//! ```rust
//! use lsb_stego::codec::{decode, encode};
//! use lsb_stego::raster::{Pixel, PixelBuffer};
//!
//! let cover = PixelBuffer::filled(32, 32, Pixel::new(0xFF, 200, 150, 100));
//!
//! let stego = encode(&cover, b"Hidden data").unwrap();
//! let payload = decode(&stego).unwrap();
//!
//! assert_eq!(payload, b"Hidden data");
//! ```

pub mod bits;
pub mod codec;
pub mod config;
pub mod error;
pub mod raster;

pub use codec::LsbCodec;
pub use config::{CodecConfig, StopRule};
pub use error::{Error, Result};
pub use raster::{Pixel, PixelBuffer};
