//! Stage orchestration: load, resize, map, write.

use std::path::PathBuf;

use crate::cli::RenderMode;
use crate::error::AsciiArtError;
use crate::{ascii, loader, resize, writer};

/// Everything one pipeline run needs, resolved from CLI and config.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Path to the input image.
    pub image: PathBuf,
    /// Bounding-box caps for the rendered grid.
    pub max_width: u32,
    pub max_height: u32,
    /// Row-skip compensation toggle.
    pub mode: RenderMode,
    /// Output sink.
    pub output: PathBuf,
}

/// Run the full pipeline: decode, aspect-fit Lanczos resample, map each pixel
/// to the brightness ramp, write the result.
///
/// Stages run strictly in order on a single thread; the first failure aborts
/// the run, and the output file is only touched after every earlier stage has
/// succeeded.
pub fn run(opts: &PipelineOptions) -> Result<(), AsciiArtError> {
    let img = loader::load(&opts.image)?;
    log::info!(
        "decoded {} ({}x{})",
        opts.image.display(),
        img.width(),
        img.height()
    );

    let resized = resize::resize(&img, opts.max_width, opts.max_height);
    log::info!("resized to {}x{}", resized.width(), resized.height());

    let art = ascii::convert(&resized, opts.max_width, opts.max_height, opts.mode);
    log::debug!("rendered {} lines", art.lines().count());

    writer::write(&opts.output, &art)?;
    log::info!("wrote {}", opts.output.display());
    Ok(())
}
