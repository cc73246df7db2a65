/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmfilters_imageprocs::transform::Transform;

/// Parse a transform name given on the command line
pub fn parse_transform(value: &str) -> Result<Transform, String> {
    Transform::from_name(value).ok_or_else(|| {
        let known: Vec<String> = Transform::ALL.iter().map(|t| t.file_suffix()).collect();

        format!(
            "unknown transform `{value}`, accepted values are {}",
            known.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use ppmfilters_imageprocs::transform::Transform;

    use crate::cmd_args::arg_parsers::parse_transform;

    #[test]
    fn parse_names() {
        assert_eq!(parse_transform("high-contrast"), Ok(Transform::HighContrast));
        assert!(parse_transform("blur").unwrap_err().contains("horizontal_blur"));
    }
}
