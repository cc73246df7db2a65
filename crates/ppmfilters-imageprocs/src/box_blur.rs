/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Horizontal box blur
use ppmfilters_core::pixel::{Pixel, PixelBuffer};

use crate::traits::OperationsTrait;

/// Radius used by the `horizontal blur` transform
pub const DEFAULT_RADIUS: usize = 1;

/// Average every pixel with its neighbours on the same line
///
/// The window is `2 * radius + 1` pixels wide and is clipped at
/// line edges, so border pixels average fewer neighbours.
#[derive(Copy, Clone, Debug)]
pub struct BoxBlur {
    radius: usize
}

impl BoxBlur {
    #[must_use]
    pub fn new(radius: usize) -> BoxBlur {
        BoxBlur { radius }
    }
}

impl OperationsTrait for BoxBlur {
    fn name(&self) -> &'static str {
        "horizontal blur"
    }

    fn execute_impl(&mut self, image: &PixelBuffer) -> PixelBuffer {
        let width = image.width();
        let radius = self.radius;

        image.copy_with(|pixels| {
            if width == 0 {
                return;
            }
            for line in pixels.chunks_exact_mut(width) {
                box_blur_line(line, radius);
            }
        })
    }
}

/// Blur a single line in place
#[allow(clippy::cast_possible_truncation)]
pub fn box_blur_line(line: &mut [Pixel], radius: usize) {
    if radius == 0 || line.len() < 2 {
        return;
    }
    // Box blurs can be seen as the average of pixels in a sliding window
    //
    // pix[x] = (pix[x-r]...+pix[x]+...pix[x+r]) / (2r+1)
    //
    // so keep running sums and add the pixel entering the window
    // and subtract the one leaving it
    let source = line.to_vec();
    let width = source.len();

    let mut sums = [0_u32; 3];

    let add = |sums: &mut [u32; 3], pixel: Pixel| {
        for (sum, c) in sums.iter_mut().zip(pixel.channels()) {
            *sum += u32::from(c);
        }
    };

    for pixel in source.iter().take(radius.min(width)) {
        add(&mut sums, *pixel);
    }

    for (x, out) in line.iter_mut().enumerate() {
        // pixel entering on the right
        if let Some(entering) = source.get(x + radius) {
            add(&mut sums, *entering);
        }
        // pixel that left on the left
        if x > radius {
            for (sum, c) in sums.iter_mut().zip(source[x - radius - 1].channels()) {
                *sum -= u32::from(c);
            }
        }
        let start = x.saturating_sub(radius);
        let end = (x + radius).min(width - 1);
        let count = (end - start + 1) as u32;

        *out = Pixel::new(
            (sums[0] / count) as u8,
            (sums[1] / count) as u8,
            (sums[2] / count) as u8
        );
    }
}
