/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Zero out one color channel
use ppmfilters_core::pixel::PixelBuffer;

use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue
}

/// Force one channel to zero, leaving the other two untouched
#[derive(Copy, Clone, Debug)]
pub struct RemoveChannel {
    channel: ColorChannel
}

impl RemoveChannel {
    #[must_use]
    pub fn new(channel: ColorChannel) -> RemoveChannel {
        RemoveChannel { channel }
    }
}

impl OperationsTrait for RemoveChannel {
    fn name(&self) -> &'static str {
        match self.channel {
            ColorChannel::Red => "remove red",
            ColorChannel::Green => "remove green",
            ColorChannel::Blue => "remove blue"
        }
    }

    fn execute_impl(&mut self, image: &PixelBuffer) -> PixelBuffer {
        let channel = self.channel;

        image.copy_with(|pixels| {
            for pixel in pixels.iter_mut() {
                match channel {
                    ColorChannel::Red => pixel.r = 0,
                    ColorChannel::Green => pixel.g = 0,
                    ColorChannel::Blue => pixel.b = 0
                }
            }
        })
    }
}
