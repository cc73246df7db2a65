/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use ppmfilters_core::pixel::Dimensions;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information printed by `--probe`
pub struct Metadata {
    file:       OsString,
    size:       u64,
    dimensions: Dimensions,
    max_value:  usize
}

impl Metadata {
    pub fn new(file: OsString, size: u64, dimensions: Dimensions, max_value: usize) -> Metadata {
        Metadata {
            file,
            size,
            dimensions,
            max_value
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 5)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", "P3")?;
        state.serialize_field("dimensions", &self.dimensions)?;
        state.serialize_field("max_value", &self.max_value)?;

        state.end()
    }
}
