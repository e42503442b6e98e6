use std::path::PathBuf;

use clap::Parser;

use img2ascii::cli::{Args, RenderMode};
use img2ascii::config::Config;
use img2ascii::error::AsciiArtError;
use img2ascii::pipeline::{self, PipelineOptions};

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match run(&args) {
        Ok(output) => {
            println!("ASCII art has been written to {}!", output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Resolve options (CLI args > config file > built-in defaults) and run the
/// pipeline. Returns the output path for the confirmation message.
fn run(args: &Args) -> Result<PathBuf, AsciiArtError> {
    let cfg = Config::load(args.config.as_deref())?;

    let image = args.image.clone().ok_or(AsciiArtError::MissingPath)?;

    // The positional flag wins over the config file's mode.
    let mode = match args.mode.as_deref() {
        Some(flag) => RenderMode::from_flag(Some(flag)),
        None => RenderMode::from_flag(cfg.render.mode.as_deref()),
    };

    let opts = PipelineOptions {
        image,
        max_width: args.width.unwrap_or(cfg.render.max_width.max(1)),
        max_height: args.height.unwrap_or(cfg.render.max_height.max(1)),
        mode,
        output: args.output.clone().unwrap_or(cfg.output.path),
    };

    pipeline::run(&opts)?;
    Ok(opts.output)
}
