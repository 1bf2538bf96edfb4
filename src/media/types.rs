use crate::error::PixelmarkError;
use crate::result::Result;

/// Upper bound for image dimensions accepted by the constructors.
///
/// Replaces compile-time array bounds with a runtime-checked limit:
/// dimensions are carried by the buffers themselves.
pub const MAX_DIMENSION: u32 = 4096;

/// A single RGB sample, one byte per channel.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// An owned 8-bit grayscale image, row-major.
///
/// Out-of-range `(row, col)` access is a programming-contract violation and
/// panics, it never wraps.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayImage {
    /// Creates a black image of the given dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        })
    }

    /// Wraps a row-major pixel buffer, validating its length against the dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        if pixels.len() != (width * height) as usize {
            return Err(PixelmarkError::BufferSizeMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, row: u32, col: u32) -> u8 {
        self.pixels[self.index(row, col)]
    }

    pub fn set(&mut self, row: u32, col: u32, value: u8) {
        let i = self.index(row, col);
        self.pixels[i] = value;
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) is outside of a {}x{} image",
            self.width,
            self.height
        );
        (row * self.width + col) as usize
    }
}

/// An owned 8-bit three-channel color image, row-major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ColorImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl ColorImage {
    /// Creates a black image of the given dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width * height) as usize],
        })
    }

    /// Wraps a row-major pixel buffer, validating its length against the dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        check_dimensions(width, height)?;
        if pixels.len() != (width * height) as usize {
            return Err(PixelmarkError::BufferSizeMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, row: u32, col: u32) -> Rgb {
        self.pixels[self.index(row, col)]
    }

    pub fn set(&mut self, row: u32, col: u32, value: Rgb) {
        let i = self.index(row, col);
        self.pixels[i] = value;
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) is outside of a {}x{} image",
            self.width,
            self.height
        );
        (row * self.width + col) as usize
    }
}

/// A square sub-area used by the block-based codecs.
///
/// Coordinates are unsigned, so negative origins are unrepresentable; the
/// codecs validate the upper bounds they require.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EmbeddingRegion {
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

impl EmbeddingRegion {
    pub const fn new(x: u32, y: u32, side: u32) -> Self {
        Self { x, y, side }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PixelmarkError::DimensionLimitExceeded(width, height));
    }
    Ok(())
}
