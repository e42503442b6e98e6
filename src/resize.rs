//! Aspect-preserving resize stage.

use image::imageops::FilterType;
use image::DynamicImage;

use crate::ascii::fit_dimensions;

/// Downscale `img` to fit within `max_width` x `max_height` without
/// distorting its aspect ratio.
///
/// Resampling uses Lanczos3: a windowed-sinc filter keeps edges and
/// gradients legible at ASCII resolutions where box or nearest-neighbor
/// filtering visibly smears detail.
///
/// Produces a new image; the source is left untouched.
pub fn resize(img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (new_width, new_height) =
        fit_dimensions(img.width(), img.height(), max_width, max_height);
    // fit_dimensions already settled the aspect fit, so resize to exactly
    // those dimensions rather than letting the resampler re-fit.
    img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
