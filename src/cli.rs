//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse and validate a bounding-box cap (must be greater than 0)
fn parse_cap(s: &str) -> Result<u32, String> {
    let cap: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid dimension", s))?;
    if cap == 0 {
        return Err("Dimension caps must be greater than 0".to_string());
    }
    Ok(cap)
}

/// Render a PNG or JPEG image as ASCII art in a text file.
///
/// The auto short help flag is disabled because `-h` is a recognized value of
/// the mode positional (it enables the row-skip hack); `--help` is re-added
/// explicitly.
#[derive(Parser, Debug)]
#[command(name = "img2ascii")]
#[command(version, about = "Turn a PNG/JPEG image into ASCII art", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Path to the PNG or JPEG image to render
    pub image: Option<PathBuf>,

    /// Rendering mode flag: `-h`, `hack`, or `--mode=hack` skip every other
    /// row to compensate for tall terminal character cells
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Maximum output width in characters
    #[arg(long, value_parser = parse_cap)]
    pub width: Option<u32>,

    /// Maximum output height in characters
    #[arg(long, value_parser = parse_cap)]
    pub height: Option<u32>,

    /// Output file path (default: output.txt)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Rendering mode for the ASCII mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Emit every row.
    #[default]
    Normal,
    /// Skip odd rows to compensate for ~2:1 terminal character cells.
    Hack,
}

impl RenderMode {
    /// Recognize the mode flag from the command line or config file.
    ///
    /// Recognized hack spellings: `-h`, `hack`, `--mode=hack`. Anything else
    /// (or nothing) renders every row.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("-h") | Some("hack") | Some("--mode=hack") => RenderMode::Hack,
            _ => RenderMode::Normal,
        }
    }
}
