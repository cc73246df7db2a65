/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain (P3) Portable Pixmap decoder and encoder
//!
//! Only the ASCII RGB variant is supported, with 8 bit channels.
//!
//! # Example
//! ```
//! use ppmfilters_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut decoder = PPMDecoder::new(b"P3\n2 1\n255\n255 0 0 0 0 255\n");
//! let image = decoder.decode().unwrap();
//!
//! let mut out = vec![];
//! PPMEncoder::new(&image).encode(&mut out).unwrap();
//!
//! assert_eq!(out, b"P3\n2 1\n255\n255 0 0 0 0 255\n");
//! ```
pub use decoder::*;
pub use encoder::*;
pub use ppmfilters_core;

mod decoder;
mod encoder;
