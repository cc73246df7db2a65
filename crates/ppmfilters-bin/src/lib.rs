/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line driver for the ppmfilters transforms
//!
//! Reads one P3 image and writes one `<name>_<transform>.ppm`
//! file per selected transform.
use std::process::exit;

use log::error;

pub use crate::cmd_parsers::global_options::CmdOptions;
use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
pub mod errors;
pub mod file_io;
mod probe_files;
mod serde;
pub mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    if let Err(err) = create_and_exec_workflow_from_cmd(&parsed_opts) {
        error!(" Could not complete workflow, reason {:?}", err);
        exit(-1);
    }
}
