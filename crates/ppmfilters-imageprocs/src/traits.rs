/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmfilters_core::log::trace;
use ppmfilters_core::pixel::PixelBuffer;

/// An image operation
///
/// Operations read an image and produce a new image whose pixels are
/// in the order they should be written out.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Run the operation
    ///
    /// Implementations must return an image with the same
    /// dimensions as `image`
    fn execute_impl(&mut self, image: &PixelBuffer) -> PixelBuffer;

    /// Run the operation and check the result
    ///
    /// This is what callers should use, it wraps
    /// [`execute_impl`](OperationsTrait::execute_impl)
    fn execute(&mut self, image: &PixelBuffer) -> PixelBuffer {
        trace!("Running {} on a {} image", self.name(), image.dimensions());

        let output = self.execute_impl(image);

        assert_eq!(
            output.dimensions(),
            image.dimensions(),
            "{} changed image dimensions",
            self.name()
        );
        output
    }
}
