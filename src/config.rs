// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Configuration for a catalog extraction run.

use std::path::{Path, PathBuf};

use crate::constant::{
    DEFAULT_ORIGINALS_DIR, DEFAULT_OUTPUT, DEFAULT_THUMBS_DIR, THUMBNAIL_QUALITY, THUMBNAIL_SIZE,
};

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Directory scanned (recursively) for photos.
    pub input_dir: PathBuf,
    /// Where `photos.json` is written. Its parent is the public web root.
    pub output_path: PathBuf,
    /// Thumbnail tree, mirrored from `input_dir`.
    pub thumbs_dir: PathBuf,
    /// Copies of the originals, mirrored from `input_dir`.
    pub originals_dir: PathBuf,
    /// Thumbnail bounding box edge in pixels.
    pub thumbnail_size: u32,
    /// Thumbnail JPEG quality (1-100).
    pub jpeg_quality: u8,
}

impl ExtractConfig {
    /// Default output layout under `site/public` for the given input.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            thumbs_dir: PathBuf::from(DEFAULT_THUMBS_DIR),
            originals_dir: PathBuf::from(DEFAULT_ORIGINALS_DIR),
            thumbnail_size: THUMBNAIL_SIZE,
            jpeg_quality: THUMBNAIL_QUALITY,
        }
    }

    /// Directory that public URLs are relative to.
    pub fn public_dir(&self) -> &Path {
        self.output_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Check that generated files can be addressed from the public dir.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.input_dir.is_dir() {
            return Err(anyhow::anyhow!(
                "Input directory {} does not exist",
                self.input_dir.display()
            ));
        }
        let public_dir = self.public_dir();
        for (label, dir) in [
            ("thumbnail", &self.thumbs_dir),
            ("originals", &self.originals_dir),
        ] {
            if !dir.starts_with(public_dir) {
                return Err(anyhow::anyhow!(
                    "The {label} directory {} is not inside the public directory {}",
                    dir.display(),
                    public_dir.display()
                ));
            }
        }
        for (label, dir) in [
            ("thumbnail", &self.thumbs_dir),
            ("originals", &self.originals_dir),
        ] {
            if same_dir(&self.input_dir, dir) {
                return Err(anyhow::anyhow!(
                    "The {label} directory {} is the input directory; photos would be overwritten",
                    dir.display()
                ));
            }
        }
        if self.thumbnail_size == 0 {
            return Err(anyhow::anyhow!("Thumbnail size must be at least 1 pixel"));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(anyhow::anyhow!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            ));
        }
        Ok(())
    }
}

/// Whether both paths resolve to the same existing directory.
fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
