//! Read-only pixel access and LED grid dimensions.

use std::fmt;

use crate::error::MarqueeError;

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Formats as a lowercase `#rrggbb` CSS color.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A decoded rectangular image, addressed by column and row.
///
/// Implementors must return a color for every `col < width()` and
/// `row < height()`.
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel_at(&self, col: u32, row: u32) -> Rgb;
}

impl PixelGrid for image::RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel_at(&self, col: u32, row: u32) -> Rgb {
        Rgb::from(self.get_pixel(col, row).0)
    }
}

/// An owned, row-major pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Creates a buffer from row-major pixels.
    ///
    /// Fails unless `pixels.len() == width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, MarqueeError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(MarqueeError::PixelBufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a buffer filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl PixelGrid for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_at(&self, col: u32, row: u32) -> Rgb {
        self.pixels[row as usize * self.width as usize + col as usize]
    }
}

/// Declared LED matrix dimensions of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    columns: u32,
    rows: u32,
}

impl GridSpec {
    /// Creates a grid; both counts must be positive.
    pub fn new(columns: u32, rows: u32) -> Result<Self, MarqueeError> {
        if columns == 0 || rows == 0 {
            return Err(MarqueeError::InvalidGrid { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Number of LEDs per row.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of LED rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns true if the pixel grid has exactly one pixel per LED.
    pub fn matches(&self, pixels: &impl PixelGrid) -> bool {
        (self.columns, self.rows) == (pixels.width(), pixels.height())
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
