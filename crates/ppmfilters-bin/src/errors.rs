/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible while running a workflow
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use ppmfilters_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// All errors the command line can report
///
/// Each carries the file it concerns so messages can be acted on
pub enum WorkflowErrors {
    /// The input could not be opened
    FileNotFound(PathBuf, io::Error),
    /// The input was opened but is not a valid P3 image
    DecodeErrors(PathBuf, PPMDecodeErrors),
    /// Writing one output failed
    EncodeErrors(PathBuf, PPMEncodeErrors),
    /// An output file could not be created
    CreateFile(PathBuf, io::Error),
    /// No file name was typed at the prompt
    NoInput,
    /// Some transforms failed, (failed, total)
    TransformsFailed(usize, usize),
    IoErrors(io::Error),
    GenericString(String)
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path, err) => {
                writeln!(f, "Could not open {path:?}: {err}")
            }
            Self::DecodeErrors(path, err) => {
                writeln!(f, "Could not read {path:?} as a P3 image: {err:?}")
            }
            Self::EncodeErrors(path, err) => {
                writeln!(f, "Could not write {path:?}: {err:?}")
            }
            Self::CreateFile(path, err) => {
                writeln!(f, "Could not create {path:?}: {err}")
            }
            Self::NoInput => writeln!(f, "No input file name given"),
            Self::TransformsFailed(failed, total) => {
                writeln!(f, "{failed} of {total} transforms failed")
            }
            Self::IoErrors(err) => writeln!(f, "{err}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for WorkflowErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileNotFound(_, err) | Self::CreateFile(_, err) | Self::IoErrors(err) => {
                Some(err)
            }
            Self::DecodeErrors(_, err) => Some(err),
            Self::EncodeErrors(_, err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for WorkflowErrors {
    fn from(err: io::Error) -> Self {
        WorkflowErrors::IoErrors(err)
    }
}

impl From<serde_json::Error> for WorkflowErrors {
    fn from(err: serde_json::Error) -> Self {
        WorkflowErrors::GenericString(err.to_string())
    }
}
