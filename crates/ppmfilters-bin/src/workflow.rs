/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Read once, then transform and write once per selected transform
use std::io::{stdin, stdout};
use std::path::{Path, PathBuf};

use log::Level::Debug;
use log::{debug, error, info, log_enabled};
use ppmfilters_core::options::DecoderOptions;
use ppmfilters_core::pixel::PixelBuffer;
use ppmfilters_imageprocs::traits::OperationsTrait;
use ppmfilters_imageprocs::transform::{Transform, TransformOptions};
use ppmfilters_ppm::PPMDecoder;

use crate::errors::WorkflowErrors;
use crate::file_io::{output_path, prompt_for_filename, read_input, wait_for_enter, write_output};
use crate::probe_files::probe_input_file;
use crate::CmdOptions;

/// Outcome of a single transform, the written file or why it was not written
pub type TransformResult = (Transform, Result<PathBuf, WorkflowErrors>);

/// Read and decode the whole input image
///
/// The input file is closed before this returns.
pub fn load_image(path: &Path, options: &DecoderOptions) -> Result<PixelBuffer, WorkflowErrors> {
    info!("Reading {:?}", path);

    let data = read_input(path)?;

    let mut decoder = PPMDecoder::new_with_options(*options, &data);

    let image = decoder
        .decode()
        .map_err(|err| WorkflowErrors::DecodeErrors(path.to_path_buf(), err))?;

    info!("Image dimensions: {}", image.dimensions());

    Ok(image)
}

fn run_transform(
    transform: Transform, image: &PixelBuffer, out_path: PathBuf, options: &TransformOptions
) -> Result<PathBuf, WorkflowErrors> {
    info!("Applying {} and writing to {:?}", transform, out_path);

    let mut operation = transform.operation(options);
    let result = operation.execute(image);

    let written = write_output(&result, &out_path)?;

    debug!("Finished applying {}, wrote {} bytes", transform, written);

    Ok(out_path)
}

/// Apply every transform in `options` to `image` and write the results
///
/// Outputs are named after `input`. Results come back in the order the
/// transforms were requested, a failed transform does not stop the others.
pub fn apply_transforms(
    image: &PixelBuffer, input: &Path, options: &CmdOptions
) -> Vec<TransformResult> {
    let jobs: Vec<(Transform, PathBuf)> = options
        .transforms
        .iter()
        .map(|transform| {
            let path = output_path(input, options.output_dir.as_deref(), *transform);
            (*transform, path)
        })
        .collect();

    #[cfg(feature = "threads")]
    {
        std::thread::scope(|s| {
            let handles: Vec<_> = jobs
                .into_iter()
                .map(|(transform, path)| {
                    let handle = std::thread::Builder::new()
                        .name(transform.file_suffix())
                        .spawn_scoped(s, move || {
                            run_transform(transform, image, path, &options.transform_options)
                        });
                    (transform, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(transform, handle)| {
                    let result = match handle {
                        Ok(handle) => handle.join().unwrap_or_else(|_| {
                            Err(WorkflowErrors::GenericString(format!(
                                "Thread running {transform} panicked"
                            )))
                        }),
                        Err(err) => Err(WorkflowErrors::IoErrors(err))
                    };
                    (transform, result)
                })
                .collect()
        })
    }
    #[cfg(not(feature = "threads"))]
    {
        jobs.into_iter()
            .map(|(transform, path)| {
                let result = run_transform(transform, image, path, &options.transform_options);
                (transform, result)
            })
            .collect()
    }
}

fn run(input: &Path, options: &CmdOptions) -> Result<(), WorkflowErrors> {
    if options.probe {
        println!("{}", probe_input_file(input)?);
        return Ok(());
    }

    let image = load_image(input, &options.decoder_options)?;

    let results = apply_transforms(&image, input, options);

    let mut failed = 0;

    for (transform, result) in &results {
        match result {
            Ok(path) => {
                if log_enabled!(Debug) {
                    debug!("{} written to {:?}", transform, path);
                }
            }
            Err(err) => {
                failed += 1;
                error!("Could not apply {}: {:?}", transform, err);
            }
        }
    }
    if failed != 0 {
        return Err(WorkflowErrors::TransformsFailed(failed, results.len()));
    }
    info!("Wrote {} images", results.len());

    Ok(())
}

/// Run the whole command line workflow
///
/// When no input was given the file name is asked for on standard input,
/// and with `pause` set the program waits for Enter before returning,
/// whether the run succeeded or not.
pub fn create_and_exec_workflow_from_cmd(options: &CmdOptions) -> Result<(), WorkflowErrors> {
    info!("Creating workflows from input");

    let (input, prompted) = match &options.input {
        Some(input) => (input.clone(), false),
        None => (prompt_for_filename(stdin().lock(), stdout())?, true)
    };

    let result = run(&input, options);

    if prompted && options.pause {
        if let Err(err) = &result {
            error!("{:?}", err);
        }
        wait_for_enter(stdin().lock(), stdout())?;
    }
    result
}
