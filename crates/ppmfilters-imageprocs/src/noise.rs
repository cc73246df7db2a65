/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Uniform random noise
//!
//! Every channel is shifted by a value drawn from `[-amplitude, amplitude - 1]`
//! and clamped back into `0..=255`.
use nanorand::{Rng, WyRand};
use ppmfilters_core::pixel::PixelBuffer;

use crate::traits::OperationsTrait;

/// Amplitude used by the `random 50` transform
pub const DEFAULT_AMPLITUDE: u8 = 50;

/// Add uniform noise to every channel
///
/// The random source is owned by the operation, so running it
/// twice on the same image gives different results unless it is
/// recreated with the same seed.
pub struct Noise {
    amplitude: u8,
    rng:       WyRand
}

impl Noise {
    /// Create noise seeded from system entropy
    #[must_use]
    pub fn new(amplitude: u8) -> Noise {
        Noise::with_rng(amplitude, WyRand::new())
    }

    /// Create noise with a fixed seed, for reproducible output
    #[must_use]
    pub fn with_seed(amplitude: u8, seed: u64) -> Noise {
        Noise::with_rng(amplitude, WyRand::new_seed(seed))
    }

    /// Create noise drawing from `rng`
    #[must_use]
    pub fn with_rng(amplitude: u8, rng: WyRand) -> Noise {
        Noise { amplitude, rng }
    }
}

impl OperationsTrait for Noise {
    fn name(&self) -> &'static str {
        "random 50"
    }

    fn execute_impl(&mut self, image: &PixelBuffer) -> PixelBuffer {
        let amplitude = self.amplitude;
        let rng = &mut self.rng;

        image.copy_with(|pixels| {
            for pixel in pixels.iter_mut() {
                *pixel = pixel.map_channels(|x| add_noise(x, amplitude, &mut *rng));
            }
        })
    }
}

/// Shift `value` by a random offset in `[-amplitude, amplitude - 1]`, clamping the result
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn add_noise(value: u8, amplitude: u8, rng: &mut WyRand) -> u8 {
    if amplitude == 0 {
        return value;
    }
    let span = 2 * u16::from(amplitude);
    let offset = i32::from(rng.generate_range(0..span)) - i32::from(amplitude);

    (i32::from(value) + offset).clamp(0, 255) as u8
}
