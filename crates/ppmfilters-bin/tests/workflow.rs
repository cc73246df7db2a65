/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::{Path, PathBuf};

use ppmfilters_bin::errors::WorkflowErrors;
use ppmfilters_bin::workflow::{apply_transforms, create_and_exec_workflow_from_cmd, load_image};
use ppmfilters_bin::CmdOptions;
use ppmfilters_core::options::DecoderOptions;
use ppmfilters_core::pixel::Pixel;
use ppmfilters_imageprocs::transform::Transform;
use ppmfilters_ppm::{PPMDecodeErrors, PPMDecoder};

const IMAGE: &str = "P3\n3 2\n255\n10 20 30 40 50 60 70 80 90\n200 150 100 0 0 0 255 255 255\n";

/// A fresh directory holding `image.ppm` with `contents`
fn setup(test_name: &str, contents: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!(
        "ppmfilters-{}-{}",
        test_name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let input = dir.join("image.ppm");
    fs::write(&input, contents).unwrap();

    (dir, input)
}

fn options_for(input: &Path) -> CmdOptions {
    let mut options = CmdOptions::new();
    options.input = Some(input.to_path_buf());
    options.pause = false;
    options
}

fn decode_file(path: &Path) -> Vec<Pixel> {
    let data = fs::read(path).unwrap();
    PPMDecoder::new(&data).decode().unwrap().into_pixels()
}

fn ppm_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn default_run_writes_nine_images() {
    let (dir, input) = setup("default-run", IMAGE);

    create_and_exec_workflow_from_cmd(&options_for(&input)).unwrap();

    assert_eq!(
        ppm_files(&dir),
        [
            "image.ppm",
            "image_gray_scale.ppm",
            "image_high_contrast.ppm",
            "image_horizontal_flip.ppm",
            "image_negative.ppm",
            "image_random_50.ppm",
            "image_remove_blue.ppm",
            "image_remove_green.ppm",
            "image_remove_red.ppm",
            "image_vertical_flip.ppm"
        ]
    );

    let negative = decode_file(&dir.join("image_negative.ppm"));
    assert_eq!(negative[0], Pixel::new(245, 235, 225));
    assert_eq!(negative[4], Pixel::new(255, 255, 255));

    let remove_red = decode_file(&dir.join("image_remove_red.ppm"));
    assert_eq!(remove_red[3], Pixel::new(0, 150, 100));

    let vertical = decode_file(&dir.join("image_vertical_flip.ppm"));
    assert_eq!(vertical[0], Pixel::new(200, 150, 100));
    assert_eq!(vertical[5], Pixel::new(70, 80, 90));

    let written = fs::read_to_string(dir.join("image_horizontal_flip.ppm")).unwrap();
    assert_eq!(
        written,
        "P3\n3 2\n255\n70 80 90 40 50 60 10 20 30\n255 255 255 0 0 0 200 150 100\n"
    );

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn truncated_input_writes_nothing() {
    let (dir, input) = setup("truncated", "P3\n3 2\n255\n10 20 30 40 50\n");

    let result = create_and_exec_workflow_from_cmd(&options_for(&input));

    assert!(matches!(
        result,
        Err(WorkflowErrors::DecodeErrors(
            _,
            PPMDecodeErrors::TruncatedStream { .. }
        ))
    ));
    assert_eq!(ppm_files(&dir), ["image.ppm"]);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn missing_input_is_reported() {
    let (dir, input) = setup("missing", IMAGE);
    let missing = dir.join("not-here.ppm");

    let result = create_and_exec_workflow_from_cmd(&options_for(&missing));
    assert!(matches!(result, Err(WorkflowErrors::FileNotFound(path, _)) if path == missing));

    fs::remove_file(input).unwrap();
    assert!(ppm_files(&dir).is_empty());

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn seeded_noise_is_reproducible() {
    let (dir, input) = setup("seeded-noise", IMAGE);

    let mut options = options_for(&input);
    options.transforms = vec![Transform::Random50];
    options.transform_options.noise_seed = Some(7);

    let output = dir.join("image_random_50.ppm");

    create_and_exec_workflow_from_cmd(&options).unwrap();
    let first = fs::read(&output).unwrap();

    create_and_exec_workflow_from_cmd(&options).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn blur_only_when_selected() {
    let (dir, input) = setup("blur", IMAGE);

    let image = load_image(&input, &DecoderOptions::default()).unwrap();

    let mut options = options_for(&input);
    let results = apply_transforms(&image, &input, &options);
    assert!(results
        .iter()
        .all(|(transform, _)| *transform != Transform::HorizontalBlur));
    assert!(!dir.join("image_horizontal_blur.ppm").exists());

    options.transforms = vec![Transform::HorizontalBlur];
    let results = apply_transforms(&image, &input, &options);

    assert_eq!(results.len(), 1);
    let (transform, result) = &results[0];
    assert_eq!(*transform, Transform::HorizontalBlur);
    assert_eq!(
        result.as_ref().unwrap(),
        &dir.join("image_horizontal_blur.ppm")
    );

    let blurred = decode_file(&dir.join("image_horizontal_blur.ppm"));
    // (10+40)/2, (20+50)/2, (30+60)/2
    assert_eq!(blurred[0], Pixel::new(25, 35, 45));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn results_follow_request_order() {
    let (dir, input) = setup("order", IMAGE);

    let image = load_image(&input, &DecoderOptions::default()).unwrap();
    let results = apply_transforms(&image, &input, &options_for(&input));

    let order: Vec<Transform> = results.iter().map(|(transform, _)| *transform).collect();
    assert_eq!(order, Transform::DEFAULT_RUN);
    assert!(results.iter().all(|(_, result)| result.is_ok()));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn output_directory_is_honoured() {
    let (dir, input) = setup("output-dir", IMAGE);
    let out_dir = dir.join("out");
    fs::create_dir(&out_dir).unwrap();

    let mut options = options_for(&input);
    options.output_dir = Some(out_dir.clone());
    options.transforms = vec![Transform::Negative, Transform::GrayScale];

    create_and_exec_workflow_from_cmd(&options).unwrap();

    assert_eq!(
        ppm_files(&out_dir),
        ["image_gray_scale.ppm", "image_negative.ppm"]
    );
    assert_eq!(ppm_files(&dir), ["image.ppm", "out"]);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn failed_writes_are_counted() {
    let (dir, input) = setup("failed-writes", IMAGE);

    let mut options = options_for(&input);
    options.output_dir = Some(dir.join("does-not-exist"));
    options.transforms = vec![Transform::Negative, Transform::VerticalFlip];

    let result = create_and_exec_workflow_from_cmd(&options);
    assert!(matches!(result, Err(WorkflowErrors::TransformsFailed(2, 2))));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn probe_writes_nothing() {
    let (dir, input) = setup("probe", IMAGE);

    let mut options = options_for(&input);
    options.probe = true;

    create_and_exec_workflow_from_cmd(&options).unwrap();
    assert_eq!(ppm_files(&dir), ["image.ppm"]);

    fs::remove_dir_all(dir).unwrap();
}
