pub static TRANSFORM_HELP: &str = "Transform to apply, may be repeated

Accepted names, words may be separated by spaces, '_' or '-':
  horizontal-flip, vertical-flip, horizontal-blur, negative,
  high-contrast, random-50, gray-scale, remove-red,
  remove-green, remove-blue

When absent every transform except horizontal-blur is applied.";

pub static AFTER_HELP: &str = "Each transform writes <input stem>_<transform>.ppm,
e.g. image.ppm with negative produces image_negative.ppm";
