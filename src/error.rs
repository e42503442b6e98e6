//! Error taxonomy for the ASCII art pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning an image into ASCII art.
///
/// Every variant is terminal for the process: nothing is retried, and the
/// output file is only touched after the whole pipeline has succeeded.
#[derive(Debug, Error)]
pub enum AsciiArtError {
    /// No image path was given on the command line.
    #[error("provide image's path as argument")]
    MissingPath,

    /// The input file could not be opened for reading.
    #[error("error opening image file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes were not recognized by any registered decoder, or
    /// decoding failed mid-stream.
    #[error("error decoding image file '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded image has a zero-length axis.
    #[error("image file '{path}' has zero area ({width}x{height})")]
    EmptyImage {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// Writing the rendered art to the output sink failed.
    #[error("error writing to file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_path_wording() {
        assert_eq!(
            AsciiArtError::MissingPath.to_string(),
            "provide image's path as argument"
        );
    }

    #[test]
    fn test_stage_errors_name_the_file() {
        let open = AsciiArtError::Open {
            path: PathBuf::from("photo.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = open.to_string();
        assert!(msg.contains("error opening image file"));
        assert!(msg.contains("photo.png"));

        let write = AsciiArtError::Write {
            path: PathBuf::from("out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = write.to_string();
        assert!(msg.contains("error writing to file"));
        assert!(msg.contains("out.txt"));
    }

    #[test]
    fn test_config_error_passes_through() {
        let source = crate::config::ConfigError::Io {
            path: PathBuf::from("config.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let wrapped = AsciiArtError::from(source);
        assert!(wrapped.to_string().contains("config.toml"));
    }
}
