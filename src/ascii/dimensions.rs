//! Aspect-fit dimension calculation.

/// Compute output dimensions that fit within `max_width` x `max_height`
/// while preserving the source aspect ratio.
///
/// Landscape sources (`orig_width > orig_height`) anchor the width to its cap
/// first; portrait and square sources anchor the height. If the derived
/// secondary dimension overflows its own cap, both dimensions are re-derived
/// anchored on the secondary axis, so the result never exceeds the box in
/// either direction.
///
/// All arithmetic is truncating integer proportion, matching the mapper's
/// brightness math; no rounding correction is applied anywhere.
///
/// # Arguments
/// * `orig_width` - Width of the source image in pixels
/// * `orig_height` - Height of the source image in pixels
/// * `max_width` - Maximum output width
/// * `max_height` - Maximum output height
///
/// # Returns
/// A `(width, height)` pair within the box, both at least 1, or `(0, 0)` when
/// any input is zero.
pub fn fit_dimensions(
    orig_width: u32,
    orig_height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if orig_width == 0 || orig_height == 0 || max_width == 0 || max_height == 0 {
        return (0, 0);
    }

    // Widen so the cross products cannot overflow.
    let (ow, oh) = (u64::from(orig_width), u64::from(orig_height));
    let (mw, mh) = (u64::from(max_width), u64::from(max_height));

    let (new_width, new_height) = if ow > oh {
        // Landscape: scale the width to the cap first.
        let height = oh * mw / ow;
        if height > mh {
            (ow * mh / oh, mh)
        } else {
            (mw, height)
        }
    } else {
        // Portrait (ties included): scale the height to the cap first.
        let width = ow * mh / oh;
        if width > mw {
            (mw, oh * mw / ow)
        } else {
            (width, mh)
        }
    };

    // Truncation can drop an extreme aspect ratio to zero; keep the grid
    // at least one cell wide on each axis.
    (new_width.max(1) as u32, new_height.max(1) as u32)
}
