/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Binary threshold, used for the high contrast transform
use ppmfilters_core::pixel::PixelBuffer;

use crate::traits::OperationsTrait;

/// Threshold used by the high contrast transform
pub const HIGH_CONTRAST_THRESHOLD: u8 = 127;

/// Set every channel above `threshold` to 255 and every other channel to 0
#[derive(Copy, Clone, Debug)]
pub struct Threshold {
    threshold: u8
}

impl Threshold {
    #[must_use]
    pub fn new(threshold: u8) -> Threshold {
        Threshold { threshold }
    }

    /// The fixed high contrast threshold
    #[must_use]
    pub fn high_contrast() -> Threshold {
        Threshold::new(HIGH_CONTRAST_THRESHOLD)
    }
}

impl OperationsTrait for Threshold {
    fn name(&self) -> &'static str {
        "high contrast"
    }

    fn execute_impl(&mut self, image: &PixelBuffer) -> PixelBuffer {
        let value = self.threshold;

        image.copy_with(|pixels| {
            for pixel in pixels.iter_mut() {
                *pixel = pixel.map_channels(|x| threshold(x, value));
            }
        })
    }
}

#[inline(always)]
pub const fn threshold(value: u8, threshold: u8) -> u8 {
    if value > threshold {
        u8::MAX
    } else {
        u8::MIN
    }
}
