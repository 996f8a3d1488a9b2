//! In-memory pixel buffers and lossless image file I/O.

mod buffer;
pub mod io;

pub use buffer::{Pixel, PixelBuffer};
