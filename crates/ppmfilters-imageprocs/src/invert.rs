/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Invert (negative) filter
use ppmfilters_core::pixel::PixelBuffer;

use crate::traits::OperationsTrait;

/// Invert an image, producing its negative
#[derive(Default, Copy, Clone)]
pub struct Invert;

impl Invert {
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "negative"
    }

    fn execute_impl(&mut self, image: &PixelBuffer) -> PixelBuffer {
        image.copy_with(|pixels| {
            for pixel in pixels.iter_mut() {
                *pixel = pixel.map_channels(invert);
            }
        })
    }
}

///Invert a channel
///
/// The formula for inverting a 8 bit channel
///  is `pixel[x,y] = 255-pixel[x,y]`
#[inline(always)]
pub const fn invert(value: u8) -> u8 {
    u8::MAX - value
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use ppmfilters_core::pixel::{Dimensions, Pixel, PixelBuffer};

    use crate::invert::{invert, Invert};
    use crate::traits::OperationsTrait;

    #[test]
    fn invert_twice_is_identity_for_all_values() {
        for value in 0..=255_u8 {
            assert_eq!(invert(invert(value)), value);
        }
        assert_eq!(invert(0), 255);
        assert_eq!(invert(200), 55);
    }

    #[test]
    fn invert_image_twice() {
        let mut rand = nanorand::WyRand::new_seed(7);
        let image = PixelBuffer::from_fn(Dimensions::new(17, 9), |_, _| {
            Pixel::new(rand.generate(), rand.generate(), rand.generate())
        });
        let mut op = Invert::new();

        let negative = op.execute(&image);
        assert_eq!(negative.get(3, 4).map(|p| p.r), image.get(3, 4).map(|p| 255 - p.r));
        assert_eq!(op.execute(&negative), image);
    }
}
