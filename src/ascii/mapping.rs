//! Brightness to character mapping: the ASCII conversion stage.

use image::{DynamicImage, GenericImageView};

use crate::ascii::charset::BRIGHTNESS_RAMP;
use crate::ascii::dimensions::fit_dimensions;
use crate::cli::RenderMode;

/// Convert an image into a multi-line ASCII string.
///
/// The fit against `max_width` x `max_height` is recomputed here from the
/// image's own bounds: the mapper does not trust its input to be pre-sized,
/// so even an unresized image renders within the caps. For input the resize
/// stage already capped, the recompute lands on the input's own dimensions
/// and is a no-op. The result is clamped to the actual bounds so sampling
/// never goes out of range.
///
/// In [`RenderMode::Hack`] every odd row is skipped entirely, compensating
/// for terminal character cells being roughly twice as tall as wide.
///
/// Numeric contract: channels are widened to the 16-bit scale, averaged, and
/// shifted back down (`((r + g + b) / 3) >> 8`, alpha ignored); the ramp
/// index is the truncating proportion `gray * (len - 1) / 255`. Division
/// truncates throughout, so mid-range values bias toward the darker
/// character.
///
/// This stage never fails; a degenerate image yields an empty string.
pub fn convert(img: &DynamicImage, max_width: u32, max_height: u32, mode: RenderMode) -> String {
    let (fit_width, fit_height) = fit_dimensions(img.width(), img.height(), max_width, max_height);
    let width = fit_width.min(img.width());
    let height = fit_height.min(img.height());

    let mut art = String::with_capacity((width as usize + 1) * height as usize);

    for y in 0..height {
        if mode == RenderMode::Hack && y % 2 == 1 {
            continue;
        }
        for x in 0..width {
            let pixel = img.get_pixel(x, y);
            // Widen to the 16-bit channel scale before averaging.
            let r = u32::from(pixel[0]) * 257;
            let g = u32::from(pixel[1]) * 257;
            let b = u32::from(pixel[2]) * 257;
            let gray = ((r + g + b) / 3) >> 8;

            let index = gray * (BRIGHTNESS_RAMP.len() as u32 - 1) / 255;
            art.push(BRIGHTNESS_RAMP[index as usize]);
        }
        art.push('\n');
    }

    art
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn gray_pixel(value: u8) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([value, value, value, 255])))
    }

    #[test]
    fn test_extremes_hit_ramp_ends() {
        assert_eq!(convert(&gray_pixel(0), 1, 1, RenderMode::Normal), " \n");
        assert_eq!(convert(&gray_pixel(255), 1, 1, RenderMode::Normal), "#\n");
    }

    #[test]
    fn test_index_truncates_not_rounds() {
        // gray 128 -> 128 * 9 / 255 = 4.51..., truncated to 4 ('=')
        assert_eq!(convert(&gray_pixel(128), 1, 1, RenderMode::Normal), "=\n");
    }

    #[test]
    fn test_zero_area_image_yields_empty_string() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        assert_eq!(convert(&img, 200, 200, RenderMode::Normal), "");
    }
}
