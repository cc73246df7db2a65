/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert RGB pixels to gray by averaging channels
use ppmfilters_core::pixel::{Pixel, PixelBuffer};

use crate::traits::OperationsTrait;

/// Replace every channel with the floor average of the three
///
/// The image stays RGB, all three channels carry the same value.
#[derive(Default, Copy, Clone)]
pub struct RgbToGrayScale;

impl RgbToGrayScale {
    #[must_use]
    pub fn new() -> RgbToGrayScale {
        Self
    }
}

impl OperationsTrait for RgbToGrayScale {
    fn name(&self) -> &'static str {
        "gray scale"
    }

    fn execute_impl(&mut self, image: &PixelBuffer) -> PixelBuffer {
        image.copy_with(|pixels| {
            for pixel in pixels.iter_mut() {
                let gray = rgb_to_grayscale(*pixel);
                *pixel = Pixel::new(gray, gray, gray);
            }
        })
    }
}

#[inline(always)]
#[allow(clippy::cast_possible_truncation)]
pub fn rgb_to_grayscale(pixel: Pixel) -> u8 {
    let sum = u16::from(pixel.r) + u16::from(pixel.g) + u16::from(pixel.b);
    // at most 765 / 3
    (sum / 3) as u8
}

#[cfg(test)]
mod tests {
    use ppmfilters_core::pixel::{Dimensions, Pixel, PixelBuffer};

    use crate::grayscale::{rgb_to_grayscale, RgbToGrayScale};
    use crate::traits::OperationsTrait;

    #[test]
    fn floor_division() {
        assert_eq!(rgb_to_grayscale(Pixel::new(10, 11, 12)), 11);
        assert_eq!(rgb_to_grayscale(Pixel::new(1, 0, 0)), 0);
        assert_eq!(rgb_to_grayscale(Pixel::new(2, 2, 1)), 1);
        assert_eq!(rgb_to_grayscale(Pixel::new(255, 255, 255)), 255);
    }

    #[test]
    fn channels_are_equal() {
        let image = PixelBuffer::new(
            Dimensions::new(1, 2),
            vec![Pixel::new(10, 11, 12), Pixel::new(0, 100, 201)]
        )
        .unwrap();
        let out = RgbToGrayScale::new().execute(&image);

        assert_eq!(out.pixels(), &[Pixel::new(11, 11, 11), Pixel::new(100, 100, 100)]);
    }
}
