// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command-line entry point: extract GPS positions and thumbnails from a
// photo directory into the gallery catalog.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use photo_atlas::ExtractConfig;
use photo_atlas::constant::{
    DEFAULT_ORIGINALS_DIR, DEFAULT_OUTPUT, DEFAULT_THUMBS_DIR, THUMBNAIL_QUALITY, THUMBNAIL_SIZE,
};

/// Extract GPS coordinates and thumbnails from a directory of photos.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Directory with photo files.
    #[arg(long)]
    pub input: PathBuf,

    /// Path to write JSON data.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Directory to write thumbnails.
    #[arg(long, default_value = DEFAULT_THUMBS_DIR)]
    pub thumbs_dir: PathBuf,

    /// Directory to copy original images.
    #[arg(long, default_value = DEFAULT_ORIGINALS_DIR)]
    pub originals_dir: PathBuf,

    /// Thumbnail bounding box in pixels.
    #[arg(long, default_value_t = THUMBNAIL_SIZE)]
    pub thumb_size: u32,

    /// Thumbnail JPEG quality (1-100).
    #[arg(long, default_value_t = THUMBNAIL_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Log every photo, not just the summary.
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for ExtractConfig {
    fn from(args: Args) -> Self {
        Self {
            input_dir: args.input,
            output_path: args.output,
            thumbs_dir: args.thumbs_dir,
            originals_dir: args.originals_dir,
            thumbnail_size: args.thumb_size,
            jpeg_quality: args.quality,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ExtractConfig::from(args);
    let summary = photo_atlas::app::run(&config)?;
    if summary.written == 0 {
        log::warn!(
            "No geotagged photos found in {}",
            config.input_dir.display()
        );
    }
    Ok(())
}
