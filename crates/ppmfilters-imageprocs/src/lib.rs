/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `ppmfilters`
//!
//! Every routine reads a [`PixelBuffer`](ppmfilters_core::pixel::PixelBuffer)
//! and returns a new one, the input is never modified.
//!
//! They all implement [`OperationsTrait`](crate::traits::OperationsTrait),
//! and [`Transform`](crate::transform::Transform) names the fixed catalog
//! the command line applies.
//!
//! # Example
//! - Invert an image
//! ```
//! use ppmfilters_core::pixel::{Dimensions, Pixel, PixelBuffer};
//! use ppmfilters_imageprocs::invert::Invert;
//! use ppmfilters_imageprocs::traits::OperationsTrait;
//!
//! let image = PixelBuffer::from_fn(Dimensions::new(4, 4), |_, _| Pixel::new(10, 20, 30));
//! let inverted = Invert::new().execute(&image);
//!
//! assert!(inverted.pixels().iter().all(|p| *p == Pixel::new(245, 235, 225)));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod box_blur;
pub mod flip;
pub mod grayscale;
pub mod invert;
pub mod noise;
pub mod remove_channel;
pub mod threshold;
pub mod traits;
pub mod transform;
