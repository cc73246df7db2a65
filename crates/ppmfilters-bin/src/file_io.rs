/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading the input, naming and writing outputs, and the interactive prompts
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::warn;
use ppmfilters_core::pixel::PixelBuffer;
use ppmfilters_imageprocs::transform::Transform;
use ppmfilters_ppm::PPMEncoder;

use crate::errors::WorkflowErrors;

/// Read the whole input file
///
/// The file is closed before this returns.
pub fn read_input(path: &Path) -> Result<Vec<u8>, WorkflowErrors> {
    let mut file =
        File::open(path).map_err(|err| WorkflowErrors::FileNotFound(path.to_path_buf(), err))?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)?;

    Ok(data)
}

/// Where the output of `transform` on `input` goes
///
/// `dir/name.ppm` becomes `dir/name_<transform suffix>.ppm`, or
/// `output_dir/name_<transform suffix>.ppm` when an output directory is given.
pub fn output_path(input: &Path, output_dir: Option<&Path>, transform: Transform) -> PathBuf {
    let mut file_name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();

    file_name.push("_");
    file_name.push(transform.file_suffix());
    file_name.push(".ppm");

    let dir = output_dir
        .or_else(|| input.parent())
        .unwrap_or_else(|| Path::new(""));

    dir.join(file_name)
}

/// Encode `image` to a new file at `path`, returning bytes written
///
/// A partially written file is removed on failure.
pub fn write_output(image: &PixelBuffer, path: &Path) -> Result<usize, WorkflowErrors> {
    let file = File::create(path).map_err(|err| WorkflowErrors::CreateFile(path.to_path_buf(), err))?;

    let result = PPMEncoder::new(image).encode(BufWriter::new(file));

    match result {
        Ok(written) => Ok(written),
        Err(err) => {
            if let Err(remove_err) = fs::remove_file(path) {
                warn!("Could not remove partial output {:?}: {}", path, remove_err);
            }
            Err(WorkflowErrors::EncodeErrors(path.to_path_buf(), err))
        }
    }
}

/// Ask for the input file name
///
/// The answer is trimmed and lower cased.
pub fn prompt_for_filename<R: BufRead, W: Write>(
    mut input: R, mut output: W
) -> Result<PathBuf, WorkflowErrors> {
    write!(output, "Enter the input filename: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let name = line.trim().to_lowercase();

    if name.is_empty() {
        return Err(WorkflowErrors::NoInput);
    }
    Ok(PathBuf::from(name))
}

/// Block until a line is read from `input`
pub fn wait_for_enter<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<(), WorkflowErrors> {
    writeln!(output, "Press Enter to Close")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(())
}
