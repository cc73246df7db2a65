/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all ppmfilters libraries
//!
//! This crate provides the small set of types the reader,
//! writer and transforms agree on
//!
//! It currently contains
//!
//! - An RGB pixel and an immutable pixel buffer with its dimensions
//! - A byte cursor used by the text PPM parser
//! - Decoder options (size limits, strictness)
//! - Logging macros that forward to `log` when the `log` feature is on
//!
//! # Features
//!  - `log`: Route internal logging through the `log` facade.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod bytestream;
pub mod log;
pub mod options;
pub mod pixel;
pub mod serde;
