/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use ppmfilters_core::bytestream::ByteReader;
use ppmfilters_core::log::{info, trace, warn};
use ppmfilters_core::options::DecoderOptions;
use ppmfilters_core::pixel::{Dimensions, Pixel, PixelBuffer};

/// Integers in the header after the magic token: width, height, max value
const HEADER_INTEGERS: usize = 3;

/// An instance of a plain PPM decoder
///
/// The decoder only understands the ASCII (P3) variant
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       usize,
    decoded_headers: bool,
    reader:          ByteReader<'a>,
    options:         DecoderOptions
}

pub enum PPMDecodeErrors {
    /// The first token was not `P3`
    InvalidMagic(String),
    /// The stream ended early
    TruncatedStream {
        section:  &'static str,
        expected: usize,
        found:    usize
    },
    /// A channel value outside `0..=255`
    MalformedPixelValue {
        value:   i64,
        x:       usize,
        y:       usize,
        channel: char
    },
    /// Something that is not a decimal integer, and its byte offset
    InvalidToken(String, usize),
    InvalidHeader(String),
    LargeDimensions(&'static str, usize, usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(found) => {
                writeln!(f, "Invalid magic number, expected `P3` but found `{found}`")
            }
            Self::TruncatedStream {
                section,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Truncated stream while reading {section}, expected {expected} values but found {found}"
                )
            }
            Self::MalformedPixelValue {
                value,
                x,
                y,
                channel
            } => {
                writeln!(
                    f,
                    "Channel {channel} of pixel ({x}, {y}) is {value}, expected a value between 0 and 255"
                )
            }
            Self::InvalidToken(token, offset) => {
                writeln!(f, "Expected an integer at byte {offset} but found `{token}`")
            }
            Self::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            Self::LargeDimensions(which, expected, found) => {
                writeln!(
                    f,
                    "Too large {which}, expected a value less than {expected} but found {found}"
                )
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: P3 encoded pixels
    ///
    /// # Example
    /// ```
    /// use ppmfilters_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use ppmfilters_core::options::DecoderOptions;
    /// use ppmfilters_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P3 2 1 255 0 0 0 0 0 0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false,
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op.
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        skip_spaces(&mut self.reader);

        if self.reader.eof() {
            return Err(PPMDecodeErrors::TruncatedStream {
                section:  "header",
                expected: HEADER_INTEGERS + 1,
                found:    0
            });
        }
        let magic = self.reader.take_while(|x| !x.is_ascii_whitespace());

        if magic != b"P3" {
            let found = String::from_utf8_lossy(magic).to_string();
            return Err(PPMDecodeErrors::InvalidMagic(found));
        }

        let mut header = [0_usize; HEADER_INTEGERS];

        for (found, value) in header.iter_mut().enumerate() {
            let integer = self.read_integer().ok_or(PPMDecodeErrors::TruncatedStream {
                section:  "header",
                expected: HEADER_INTEGERS + 1,
                found:    found + 1
            })??;

            *value = usize::try_from(integer).map_err(|_| {
                PPMDecodeErrors::InvalidHeader(format!("negative header value {integer}"))
            })?;
        }
        let [width, height, max_value] = header;

        if width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }
        if max_value != 255 {
            if self.options.get_strict_mode() {
                let msg = format!("max value {max_value} is not supported, only 255 is");
                return Err(PPMDecodeErrors::InvalidHeader(msg));
            }
            warn!("Max value {} is not 255, treating channels as 8 bit", max_value);
        }
        info!("Width: {}, height: {}", width, height);
        info!("Max value: {}", max_value);

        self.width = width;
        self.height = height;
        self.max_value = max_value;
        self.decoded_headers = true;

        Ok(())
    }

    /// Read the next whitespace separated integer
    ///
    /// Returns `None` at end of stream.
    fn read_integer(&mut self) -> Option<Result<i64, PPMDecodeErrors>> {
        skip_spaces(&mut self.reader);

        if self.reader.eof() {
            return None;
        }
        let start = self.reader.position();
        let negative = self.reader.peek_u8() == Some(b'-');

        if negative {
            self.reader.skip(1);
        }
        let digits = self.reader.take_while(|x| x.is_ascii_digit());

        let terminated = self
            .reader
            .peek_u8()
            .map_or(true, |x| x.is_ascii_whitespace() || x == b'#');

        if digits.is_empty() || !terminated {
            self.reader.rewind(self.reader.position() - start);
            let token = self.reader.take_while(|x| !x.is_ascii_whitespace());
            let token = String::from_utf8_lossy(token).to_string();

            return Some(Err(PPMDecodeErrors::InvalidToken(token, start)));
        }
        // overlong numbers saturate, they are out of range either way
        let value = digits.iter().fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

        Some(Ok(if negative { -value } else { value }))
    }

    /// Return the header max value or none if headers
    /// are not decoded
    pub const fn get_max_value(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<Dimensions> {
        if self.decoded_headers {
            Some(Dimensions::new(self.width, self.height))
        } else {
            None
        }
    }

    /// Decode a P3 encoded file and return its pixels
    pub fn decode(&mut self) -> Result<PixelBuffer, PPMDecodeErrors> {
        self.read_headers()?;

        let dimensions = Dimensions::new(self.width, self.height);

        let count = dimensions.pixel_count().ok_or_else(|| {
            PPMDecodeErrors::InvalidHeader(format!("dimensions {dimensions} overflow"))
        })?;
        let expected = count * 3;

        // Every channel needs at least two bytes, a digit and a separator,
        // so don't trust the header for the allocation size
        let mut pixels = Vec::with_capacity(count.min(self.reader.remaining() / 6 + 1));

        for y in 0..self.height {
            for x in 0..self.width {
                let mut channels = [0_u8; 3];

                for (pos, (channel, name)) in channels.iter_mut().zip(['R', 'G', 'B']).enumerate() {
                    let read = pixels.len() * 3 + pos;

                    let value = self.read_integer().ok_or(PPMDecodeErrors::TruncatedStream {
                        section: "pixels",
                        expected,
                        found: read
                    })??;

                    *channel = u8::try_from(value).map_err(|_| {
                        PPMDecodeErrors::MalformedPixelValue {
                            value,
                            x,
                            y,
                            channel: name
                        }
                    })?;
                }
                pixels.push(Pixel::from(channels));
            }
        }
        skip_spaces(&mut self.reader);

        if !self.reader.eof() {
            warn!(
                "Ignoring {} bytes of trailing data after pixels",
                self.reader.remaining()
            );
        }
        trace!("Decoded {} pixels", pixels.len());

        PixelBuffer::new(dimensions, pixels)
            .map_err(|e| PPMDecodeErrors::InvalidHeader(format!("{e:?}")))
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ByteReader) {
    while let Some(byte) = byte_stream.peek_u8() {
        if byte == b'#' {
            // skip the whole comment
            byte_stream.take_while(|x| x != b'\n');
        } else if byte.is_ascii_whitespace() {
            byte_stream.skip(1);
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use ppmfilters_core::options::DecoderOptions;
    use ppmfilters_core::pixel::{Dimensions, Pixel};

    use crate::decoder::{PPMDecodeErrors, PPMDecoder};

    #[test]
    fn decode_small_image() {
        let data = b"P3\n3 2\n255\n1 2 3 4 5 6 7 8 9\n10 11 12 13 14 15 16 17 18\n";
        let image = PPMDecoder::new(data).decode().unwrap();

        assert_eq!(image.dimensions(), Dimensions::new(3, 2));
        assert_eq!(image.get(0, 0), Some(Pixel::new(1, 2, 3)));
        assert_eq!(image.get(2, 0), Some(Pixel::new(7, 8, 9)));
        assert_eq!(image.get(0, 1), Some(Pixel::new(10, 11, 12)));
        assert_eq!(image.get(2, 1), Some(Pixel::new(16, 17, 18)));
    }

    #[test]
    fn comments_and_odd_whitespace() {
        let data = b"P3 # plain ppm\n# made by hand\n2\t1 255\r\n0 0 0   255 255 255 # end\n";
        let image = PPMDecoder::new(data).decode().unwrap();

        assert_eq!(image.pixels(), &[Pixel::new(0, 0, 0), Pixel::new(255, 255, 255)]);
    }

    #[test]
    fn wrong_magic_is_fatal() {
        let err = PPMDecoder::new(b"P6\n1 1\n255\n0 0 0").decode().unwrap_err();

        assert!(matches!(err, PPMDecodeErrors::InvalidMagic(ref m) if m == "P6"));
    }

    #[test]
    fn empty_stream_is_truncated() {
        let err = PPMDecoder::new(b"  \n").decode().unwrap_err();

        assert!(matches!(
            err,
            PPMDecodeErrors::TruncatedStream {
                section: "header",
                found: 0,
                ..
            }
        ));
    }

    #[test]
    fn missing_max_value_is_truncated() {
        let err = PPMDecoder::new(b"P3\n4 4\n").decode().unwrap_err();

        assert!(matches!(
            err,
            PPMDecodeErrors::TruncatedStream {
                section: "header",
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn truncated_pixels() {
        let err = PPMDecoder::new(b"P3\n2 2\n255\n1 2 3 4 5 6 7")
            .decode()
            .unwrap_err();

        assert!(matches!(
            err,
            PPMDecodeErrors::TruncatedStream {
                section: "pixels",
                expected: 12,
                found: 7
            }
        ));
    }

    #[test]
    fn out_of_range_channel() {
        let err = PPMDecoder::new(b"P3\n2 1\n255\n1 2 3 4 256 6")
            .decode()
            .unwrap_err();

        assert!(matches!(
            err,
            PPMDecodeErrors::MalformedPixelValue {
                value: 256,
                x: 1,
                y: 0,
                channel: 'G'
            }
        ));
    }

    #[test]
    fn negative_channel() {
        let err = PPMDecoder::new(b"P3\n1 1\n255\n-5 0 0").decode().unwrap_err();

        assert!(matches!(
            err,
            PPMDecodeErrors::MalformedPixelValue { value: -5, .. }
        ));
    }

    #[test]
    fn garbage_token() {
        let err = PPMDecoder::new(b"P3\n1 1\n255\n12a 0 0").decode().unwrap_err();

        assert!(matches!(err, PPMDecodeErrors::InvalidToken(ref t, 11) if t == "12a"));
    }

    #[test]
    fn large_dimensions_rejected() {
        let options = DecoderOptions::default().set_max_height(10);
        let err = PPMDecoder::new_with_options(options, b"P3\n1 11\n255\n")
            .decode()
            .unwrap_err();

        assert!(matches!(
            err,
            PPMDecodeErrors::LargeDimensions("height", 10, 11)
        ));
    }

    #[test]
    fn other_max_values() {
        let data = b"P3\n1 1\n15\n1 2 3";

        let image = PPMDecoder::new(data).decode().unwrap();
        assert_eq!(image.pixels(), &[Pixel::new(1, 2, 3)]);

        let strict = DecoderOptions::default().set_strict_mode(true);
        let err = PPMDecoder::new_with_options(strict, data)
            .decode()
            .unwrap_err();
        assert!(matches!(err, PPMDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn headers_without_pixels() {
        let mut decoder = PPMDecoder::new(b"P3 640 480 255");

        assert_eq!(decoder.get_dimensions(), None);
        decoder.read_headers().unwrap();
        assert_eq!(decoder.get_dimensions(), Some(Dimensions::new(640, 480)));
        assert_eq!(decoder.get_max_value(), Some(255));
    }

    #[test]
    fn random_bytes_never_panic() {
        use nanorand::Rng;

        let mut rand = nanorand::WyRand::new_seed(42);
        let mut data = vec![0_u8; 256];

        for _ in 0..64 {
            rand.fill(&mut data);
            data[..3].copy_from_slice(b"P3 ");
            let _ = PPMDecoder::new(&data).decode();
        }
    }
}
