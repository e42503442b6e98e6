//! Character ramp definition for ASCII rendering.

/// Brightness ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (#).
/// Fixed process-wide: every pixel of every render maps into this table.
pub const BRIGHTNESS_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '%', '@', '#'];
