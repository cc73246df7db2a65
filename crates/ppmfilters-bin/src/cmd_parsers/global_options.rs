/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};
use ppmfilters_core::options::DecoderOptions;
use ppmfilters_imageprocs::transform::{Transform, TransformOptions};

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    /// Input file, `None` means ask for it
    pub input:             Option<PathBuf>,
    /// Where outputs go, `None` means next to the input
    pub output_dir:        Option<PathBuf>,
    pub transforms:        Vec<Transform>,
    pub transform_options: TransformOptions,
    pub decoder_options:   DecoderOptions,
    pub probe:             bool,
    /// Wait for Enter before exiting when the file name was prompted for
    pub pause:             bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            input:             None,
            output_dir:        None,
            transforms:        Transform::DEFAULT_RUN.to_vec(),
            transform_options: TransformOptions::default(),
            decoder_options:   DecoderOptions::default(),
            probe:             false,
            pause:             true
        }
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.input = options.get_one::<PathBuf>("in").cloned();
    cmd_options.output_dir = options.get_one::<PathBuf>("out-dir").cloned();

    if let Some(transforms) = options.get_many::<Transform>("transform") {
        cmd_options.transforms = transforms.copied().collect();
        info!("Running selected transforms {:?}", cmd_options.transforms);
    }
    if let Some(seed) = options.get_one::<u64>("seed") {
        info!("Seeding noise with {}", seed);
        cmd_options.transform_options.noise_seed = Some(*seed);
    }
    cmd_options.decoder_options = get_decoder_options(options);
    cmd_options.probe = options.get_flag("probe");
    cmd_options.pause = !options.get_flag("no-pause");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("warn") {
        Level::Warn
    } else {
        Level::Info
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
