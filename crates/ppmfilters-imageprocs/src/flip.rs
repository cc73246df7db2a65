/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: reverse pixel order along one axis.
//!
use ppmfilters_core::pixel::PixelBuffer;

use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,

    /// Reverse the order of image lines
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    ///
    Vertical
}

/// Flip an image to a certain direction
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        match self.flip_direction {
            FlipDirection::Horizontal => "horizontal flip",
            FlipDirection::Vertical => "vertical flip"
        }
    }

    fn execute_impl(&mut self, image: &PixelBuffer) -> PixelBuffer {
        let width = image.width();

        match self.flip_direction {
            FlipDirection::Horizontal => image.copy_with(|pixels| flop(pixels, width)),
            FlipDirection::Vertical => image.copy_with(|pixels| vertical_flip(pixels, width))
        }
    }
}

/// Flip an image on the vertical axis
///
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
pub fn vertical_flip<T: Copy + Default>(channel: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    // Simply split the image in half
    // on one end read from the start to the halfway point
    // on the other end read from the end to the halfway point
    //
    // An odd middle line lands at the start of `bottom`
    // and rchunks never reaches it
    let height = channel.len() / width;

    let (top, bottom) = channel.split_at_mut((height / 2) * width);

    let mut stride = vec![T::default(); width];
    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        stride.copy_from_slice(t);
        t.copy_from_slice(b);
        b.copy_from_slice(&stride);
    }
}

/// Flop an image
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
///
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        width_chunks.reverse();
    }
}

#[cfg(test)]
mod tests {
    use ppmfilters_core::pixel::{Dimensions, Pixel, PixelBuffer};

    use crate::flip::{flop, vertical_flip, Flip, FlipDirection};
    use crate::traits::OperationsTrait;

    fn numbered(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::from_fn(Dimensions::new(width, height), |x, y| {
            Pixel::new(x as u8, y as u8, (x + y * width) as u8)
        })
    }

    #[test]
    fn flop_reverses_each_line() {
        let mut data = [1, 2, 3, 4, 5, 6];
        flop(&mut data, 3);
        assert_eq!(data, [3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn vertical_flip_odd_height() {
        let mut data = [1, 2, 3, 4, 5, 6];
        vertical_flip(&mut data, 2);
        assert_eq!(data, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn horizontal_flip_twice_is_identity() {
        let image = numbered(5, 3);
        let mut flip = Flip::new(FlipDirection::Horizontal);

        let once = flip.execute(&image);
        assert_ne!(once, image);
        assert_eq!(flip.execute(&once), image);
    }

    #[test]
    fn horizontal_flip_emission_order() {
        let image = numbered(3, 2);
        let flipped = Flip::new(FlipDirection::Horizontal).execute(&image);

        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(flipped.get(x, y), image.get(2 - x, y));
            }
        }
    }

    #[test]
    fn single_line_image() {
        let image = numbered(4, 1);

        let vertical = Flip::new(FlipDirection::Vertical).execute(&image);
        assert_eq!(vertical, image);

        let horizontal = Flip::new(FlipDirection::Horizontal).execute(&image);
        let mut expected = image.pixels().to_vec();
        expected.reverse();
        assert_eq!(horizontal.pixels(), expected.as_slice());
    }

    #[test]
    fn single_column_image_lines_reverse() {
        let image = numbered(1, 4);

        let vertical = Flip::new(FlipDirection::Vertical).execute(&image);
        let lines: Vec<u8> = vertical.pixels().iter().map(|p| p.g).collect();
        assert_eq!(lines, [3, 2, 1, 0]);

        let horizontal = Flip::new(FlipDirection::Horizontal).execute(&image);
        assert_eq!(horizontal, image);
    }

    #[test]
    fn empty_images() {
        let image = PixelBuffer::new(Dimensions::new(0, 3), vec![]).unwrap();

        assert_eq!(Flip::new(FlipDirection::Horizontal).execute(&image), image);
        assert_eq!(Flip::new(FlipDirection::Vertical).execute(&image), image);
    }
}
