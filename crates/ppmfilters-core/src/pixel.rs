/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel storage shared by the reader, the writer and the transforms
//!
//! A P3 header stores two integers before the max value, the
//! first being the number of pixels on a line and the second the number
//! of lines. Here they are always called `width` and `height`,
//! and a pixel at `(x, y)` lives at index `x + y * width`.
use core::fmt::{Debug, Display, Formatter};

/// A single RGB pixel, 8 bits per channel
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }

    /// Return channels in R, G, B order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `func` to every channel of this pixel
    #[must_use]
    pub fn map_channels<F: FnMut(u8) -> u8>(self, mut func: F) -> Pixel {
        Pixel::new(func(self.r), func(self.g), func(self.b))
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Pixel::new(r, g, b)
    }
}

impl Debug for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Image width and height
///
/// `width` is the fast axis (pixels on one line),
/// `height` the slow axis (number of lines)
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Dimensions {
    pub width:  usize,
    pub height: usize
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Dimensions {
        Dimensions { width, height }
    }

    /// Number of pixels an image with these dimensions holds,
    /// or `None` if that overflows `usize`
    pub const fn pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Errors when constructing a pixel buffer
pub enum BufferErrors {
    /// Expected number of pixels, found number of pixels
    DimensionsMisMatch(usize, usize),
    /// Width times height does not fit in a usize
    TooLarge(Dimensions)
}

impl Debug for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::TooLarge(dims) => writeln!(f, "Dimensions {dims} overflow the pixel count")
        }
    }
}

impl Display for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for BufferErrors {}

/// An immutable row-major buffer of RGB pixels
///
/// The number of pixels always equals `width * height`.
#[derive(Clone, Eq, PartialEq)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    pixels:     Vec<Pixel>
}

impl PixelBuffer {
    /// Create a buffer from pixels laid out row-major
    ///
    /// # Errors
    /// If `pixels.len()` is not `width * height`
    pub fn new(dimensions: Dimensions, pixels: Vec<Pixel>) -> Result<PixelBuffer, BufferErrors> {
        let expected = dimensions
            .pixel_count()
            .ok_or(BufferErrors::TooLarge(dimensions))?;

        if expected != pixels.len() {
            return Err(BufferErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(PixelBuffer { dimensions, pixels })
    }

    /// Create a buffer by calling `func(x, y)` for every position,
    /// lines first, then pixels within a line
    ///
    /// # Panics
    /// If `width * height` overflows
    pub fn from_fn<F>(dimensions: Dimensions, mut func: F) -> PixelBuffer
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let count = dimensions
            .pixel_count()
            .expect("width * height overflowed usize");

        let mut pixels = Vec::with_capacity(count);

        for y in 0..dimensions.height {
            for x in 0..dimensions.width {
                pixels.push(func(x, y));
            }
        }
        PixelBuffer { dimensions, pixels }
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub const fn width(&self) -> usize {
        self.dimensions.width
    }

    pub const fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Index of `(x, y)` in the flat pixel array
    #[inline(always)]
    pub const fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.dimensions.width
    }

    /// Return the pixel at `(x, y)`, or `None` if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Iterate over image lines, top to bottom
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        // chunks(0) panics, an image with no width has no pixels anyway
        self.pixels.chunks(self.dimensions.width.max(1))
    }

    /// Apply `func` to every pixel, keeping positions
    #[must_use]
    pub fn map_pixels<F: FnMut(Pixel) -> Pixel>(&self, func: F) -> PixelBuffer {
        PixelBuffer {
            dimensions: self.dimensions,
            pixels:     self.pixels.iter().copied().map(func).collect()
        }
    }

    /// Copy this buffer and let `func` rearrange or modify
    /// the copy in place
    #[must_use]
    pub fn copy_with<F: FnOnce(&mut [Pixel])>(&self, func: F) -> PixelBuffer {
        let mut pixels = self.pixels.clone();
        func(&mut pixels);

        PixelBuffer {
            dimensions: self.dimensions,
            pixels
        }
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("dimensions", &self.dimensions)
            .field("pixels", &self.pixels.len())
            .finish()
    }
}
