/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The fixed catalog of named transforms
//!
//! Each transform has a spaced display name (`"horizontal flip"`)
//! and a file suffix derived from it (`"horizontal_flip"`).
use std::fmt::{Display, Formatter};

use crate::box_blur::{BoxBlur, DEFAULT_RADIUS};
use crate::flip::{Flip, FlipDirection};
use crate::grayscale::RgbToGrayScale;
use crate::invert::Invert;
use crate::noise::{Noise, DEFAULT_AMPLITUDE};
use crate::remove_channel::{ColorChannel, RemoveChannel};
use crate::threshold::Threshold;
use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Transform {
    HorizontalFlip,
    VerticalFlip,
    HorizontalBlur,
    Negative,
    HighContrast,
    Random50,
    GrayScale,
    RemoveRed,
    RemoveGreen,
    RemoveBlue
}

/// Inputs shared by all transforms
///
/// Transforms take no parameters of their own, the only
/// knob is where random noise comes from.
#[derive(Copy, Clone, Debug, Default)]
pub struct TransformOptions {
    /// Seed for `random 50`, `None` draws from system entropy
    pub noise_seed: Option<u64>
}

impl Transform {
    /// Transforms applied when none are requested, in order.
    ///
    /// `horizontal blur` is only run on request.
    pub const DEFAULT_RUN: [Transform; 9] = [
        Transform::HorizontalFlip,
        Transform::VerticalFlip,
        Transform::Negative,
        Transform::HighContrast,
        Transform::RemoveRed,
        Transform::RemoveGreen,
        Transform::RemoveBlue,
        Transform::GrayScale,
        Transform::Random50
    ];

    /// Every transform in the catalog
    pub const ALL: [Transform; 10] = [
        Transform::HorizontalFlip,
        Transform::VerticalFlip,
        Transform::HorizontalBlur,
        Transform::Negative,
        Transform::HighContrast,
        Transform::Random50,
        Transform::GrayScale,
        Transform::RemoveRed,
        Transform::RemoveGreen,
        Transform::RemoveBlue
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Transform::HorizontalFlip => "horizontal flip",
            Transform::VerticalFlip => "vertical flip",
            Transform::HorizontalBlur => "horizontal blur",
            Transform::Negative => "negative",
            Transform::HighContrast => "high contrast",
            Transform::Random50 => "random 50",
            Transform::GrayScale => "gray scale",
            Transform::RemoveRed => "remove red",
            Transform::RemoveGreen => "remove green",
            Transform::RemoveBlue => "remove blue"
        }
    }

    /// Name with spaces replaced by underscores, used in output file names
    pub fn file_suffix(self) -> String {
        self.name().replace(' ', "_")
    }

    /// Look up a transform by name
    ///
    /// Case is ignored and words may be separated by spaces,
    /// underscores or hyphens, so `"Gray-Scale"` finds [`Transform::GrayScale`]
    pub fn from_name(name: &str) -> Option<Transform> {
        let wanted: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '-' => ' ',
                c => c.to_ascii_lowercase()
            })
            .collect();

        Transform::ALL
            .into_iter()
            .find(|transform| transform.name() == wanted)
    }

    /// Create the operation implementing this transform
    pub fn operation(self, options: &TransformOptions) -> Box<dyn OperationsTrait + Send> {
        match self {
            Transform::HorizontalFlip => Box::new(Flip::new(FlipDirection::Horizontal)),
            Transform::VerticalFlip => Box::new(Flip::new(FlipDirection::Vertical)),
            Transform::HorizontalBlur => Box::new(BoxBlur::new(DEFAULT_RADIUS)),
            Transform::Negative => Box::new(Invert::new()),
            Transform::HighContrast => Box::new(Threshold::high_contrast()),
            Transform::Random50 => match options.noise_seed {
                Some(seed) => Box::new(Noise::with_seed(DEFAULT_AMPLITUDE, seed)),
                None => Box::new(Noise::new(DEFAULT_AMPLITUDE))
            },
            Transform::GrayScale => Box::new(RgbToGrayScale::new()),
            Transform::RemoveRed => Box::new(RemoveChannel::new(ColorChannel::Red)),
            Transform::RemoveGreen => Box::new(RemoveChannel::new(ColorChannel::Green)),
            Transform::RemoveBlue => Box::new(RemoveChannel::new(ColorChannel::Blue))
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
