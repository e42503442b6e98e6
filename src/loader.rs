//! Image loading stage: open a file and decode it into pixels.

use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::AsciiArtError;

/// Open `path` and decode it against the registered formats (PNG, JPEG).
///
/// The file handle lives only for the duration of this call and is released
/// on every exit path. Failure to open and failure to decode are reported as
/// distinct errors so a bad path can be told apart from a bad file.
///
/// Zero-area images are rejected here so the later stages never see one.
pub fn load(path: &Path) -> Result<DynamicImage, AsciiArtError> {
    let reader = ImageReader::open(path).map_err(|e| AsciiArtError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    // Sniff the real format from the byte stream rather than trusting the
    // file extension.
    let reader = reader.with_guessed_format().map_err(|e| AsciiArtError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let img = reader.decode().map_err(|e| AsciiArtError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    if img.width() == 0 || img.height() == 0 {
        return Err(AsciiArtError::EmptyImage {
            path: path.to_path_buf(),
            width: img.width(),
            height: img.height(),
        });
    }

    Ok(img)
}
