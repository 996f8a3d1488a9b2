//! Reading and writing image files.
//!
//! Embedded bits live in the lowest bit of each color channel, so encoded
//! images may only be written through lossless formats. Anything else is
//! rejected before a file is created.

use crate::error::{Error, Result};
use crate::raster::PixelBuffer;
use image::{ImageFormat, RgbaImage};
use log::debug;
use std::path::Path;

/// Formats that preserve every channel bit.
const LOSSLESS_FORMATS: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Bmp, ImageFormat::Tiff];

/// Decode an image file of any supported format into a pixel buffer.
pub fn load(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    debug!("Loaded {} ({}x{})", path.display(), width, height);

    PixelBuffer::from_rgba8(width, height, img.as_raw())
}

/// Write a pixel buffer to `path`, picking the format from the extension.
///
/// # Errors
///
/// Returns [`Error::LossyFormat`] if the extension does not name a
/// lossless format (PNG, BMP or TIFF).
pub fn save(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let format = lossless_format(path)?;

    let img = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgba8()).ok_or(
        Error::InvalidDimensions {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer.len(),
        },
    )?;
    img.save_with_format(path, format)?;
    debug!("Saved {} as {:?}", path.display(), format);

    Ok(())
}

/// Resolve the output format for `path`, refusing lossy ones.
pub fn lossless_format(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(format) if LOSSLESS_FORMATS.contains(&format) => Ok(format),
        _ => Err(Error::LossyFormat(path.to_path_buf())),
    }
}
