/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::parse_transform;
use crate::cmd_args::help_strings::{AFTER_HELP, TRANSFORM_HELP};

pub mod arg_parsers;
pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppmfilters")
        .about("Apply a fixed set of filters to a plain (P3) PPM image")
        .after_help(AFTER_HELP)
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .long_help("Input file to read data from.\nWhen absent the file name is asked for interactively")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("out-dir")
            .short('o')
            .long("output-dir")
            .help("Directory to write results to, defaults to the input's directory")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("transform")
            .short('t')
            .long("transform")
            .help("Transform to apply, may be repeated")
            .long_help(TRANSFORM_HELP)
            .action(ArgAction::Append)
            .value_parser(parse_transform))
        .arg(Arg::new("seed")
            .long("seed")
            .help("Seed for the random noise transform")
            .long_help("Seed for the random noise transform.\nThe same seed and input always produce the same output")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print information about the input image as JSON and exit"))
        .arg(Arg::new("no-pause")
            .long("no-pause")
            .action(ArgAction::SetTrue)
            .help("Do not wait for Enter before exiting after an interactive prompt"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display progress information, the default"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an input image")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an input image")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Reject images whose max value is not 255"))
}
