//! ASCII conversion module.
//!
//! Turns a decoded image into lines of ramp characters:
//!
//! 1. **Aspect fit** - bound the output grid while preserving aspect ratio
//! 2. **Brightness** - average the RGB channels, alpha ignored
//! 3. **Character mapping** - map brightness to the fixed 10-level ramp

mod charset;
mod dimensions;
mod mapping;

pub use charset::BRIGHTNESS_RAMP;
pub use dimensions::fit_dimensions;
pub use mapping::convert;
