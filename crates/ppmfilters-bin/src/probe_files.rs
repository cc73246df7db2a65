/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use ppmfilters_core::options::DecoderOptions;
use ppmfilters_ppm::PPMDecoder;

use crate::errors::WorkflowErrors;
use crate::file_io::read_input;
use crate::serde::Metadata;

/// Read the headers of `path` and describe them as pretty printed json
pub fn probe_input_file(path: &Path) -> Result<String, WorkflowErrors> {
    let data = read_input(path)?;

    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::default()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let mut decoder = PPMDecoder::new_with_options(options, &data);

    decoder
        .read_headers()
        .map_err(|err| WorkflowErrors::DecodeErrors(path.to_path_buf(), err))?;

    let (Some(dimensions), Some(max_value)) = (decoder.get_dimensions(), decoder.get_max_value())
    else {
        return Err(WorkflowErrors::GenericString(
            "Headers were read but not stored".to_string()
        ));
    };

    let metadata = Metadata::new(
        path.as_os_str().to_os_string(),
        data.len() as u64,
        dimensions,
        max_value
    );

    Ok(serde_json::to_string_pretty(&metadata)?)
}
