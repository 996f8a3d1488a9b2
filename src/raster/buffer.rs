//! Pixel and pixel buffer types.

use crate::error::{Error, Result};

/// One pixel with 8-bit alpha, red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    /// Create a pixel from its four channels.
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Unpack a `0xAARRGGBB` color value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            alpha: (argb >> 24) as u8,
            red: (argb >> 16) as u8,
            green: (argb >> 8) as u8,
            blue: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` color value.
    pub const fn to_argb(self) -> u32 {
        (self.alpha as u32) << 24
            | (self.red as u32) << 16
            | (self.green as u32) << 8
            | self.blue as u32
    }

    /// Red, green and blue in embedding order.
    pub fn color_channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Mutable red, green and blue in embedding order.
    pub fn color_channels_mut(&mut self) -> [&mut u8; 3] {
        [&mut self.red, &mut self.green, &mut self.blue]
    }
}

/// A row-major pixel array that carries its own dimensions.
///
/// The pixel count always equals `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Wrap a pixel vector, validating it against the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.len() as u64 != width as u64 * height as u64 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                pixels: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer where every pixel has the same value.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Build from packed `0xAARRGGBB` values.
    pub fn from_argb(width: u32, height: u32, argb: &[u32]) -> Result<Self> {
        Self::new(
            width,
            height,
            argb.iter().copied().map(Pixel::from_argb).collect(),
        )
    }

    /// Build from interleaved RGBA bytes, 4 per pixel.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        if rgba.len() % 4 != 0 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                pixels: rgba.len() / 4,
            });
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|p| Pixel::new(p[3], p[0], p[1], p[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Pack into `0xAARRGGBB` values.
    pub fn to_argb(&self) -> Vec<u32> {
        self.pixels.iter().map(|p| p.to_argb()).collect()
    }

    /// Flatten into interleaved RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue, p.alpha])
            .collect()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable pixel access. The slice cannot change length, so the
    /// dimension invariant holds.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Consume the buffer, returning its pixels.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}
