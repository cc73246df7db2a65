/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;

use ppmfilters_core::pixel::PixelBuffer;

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    IoErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IoErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::IoErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PPMEncodeErrors::IoErrors(err) => Some(err)
        }
    }
}

/// A plain (P3) PPM encoder
///
/// Pixels are written in buffer order, one text line per image line:
///
/// ```text
/// P3
/// <width> <height>
/// 255
/// r g b r g b ...
/// ```
pub struct PPMEncoder<'a> {
    image: &'a PixelBuffer
}

impl<'a> PPMEncoder<'a> {
    /// Create a new encoder which will encode the specified
    /// pixel buffer
    ///
    /// # Example
    /// ```
    /// use ppmfilters_core::pixel::{Dimensions, Pixel, PixelBuffer};
    /// use ppmfilters_ppm::PPMEncoder;
    ///
    /// let image = PixelBuffer::new(Dimensions::new(1, 1), vec![Pixel::new(1, 2, 3)]).unwrap();
    /// let mut out = vec![];
    /// PPMEncoder::new(&image).encode(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"P3\n1 1\n255\n1 2 3\n");
    /// ```
    pub fn new(image: &'a PixelBuffer) -> PPMEncoder<'a> {
        PPMEncoder { image }
    }

    /// Encode into `sink`, returning the number of bytes written
    pub fn encode<W: Write>(&self, mut sink: W) -> Result<usize, PPMEncodeErrors> {
        let header = format!("P3\n{} {}\n255\n", self.image.width(), self.image.height());

        sink.write_all(header.as_bytes())?;

        let mut written = header.len();
        // 3 digits + a space for each channel
        let mut line = Vec::with_capacity(self.image.width() * 12);

        for row in self.image.rows() {
            line.clear();

            for (pos, pixel) in row.iter().enumerate() {
                if pos != 0 {
                    line.push(b' ');
                }
                write!(line, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
            }
            line.push(b'\n');

            sink.write_all(&line)?;
            written += line.len();
        }
        sink.flush()?;

        Ok(written)
    }
}
