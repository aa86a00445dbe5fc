// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/thumbnail.rs
//
// JPEG thumbnails for the gallery markers.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageReader};

/// Shrink `image` to fit a `size` x `size` box, keeping the aspect ratio.
/// Images that already fit are returned unchanged.
pub fn fit_within(image: DynamicImage, size: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width <= size && height <= size {
        image
    } else {
        image.thumbnail(size, size)
    }
}

/// Decode `source`, shrink it and write it to `dest` as an RGB JPEG.
///
/// Parent directories of `dest` are created. Returns the thumbnail
/// dimensions.
pub fn write_thumbnail(
    source: &Path,
    dest: &Path,
    size: u32,
    quality: u8,
) -> anyhow::Result<(u32, u32)> {
    let image = ImageReader::open(source)
        .with_context(|| format!("Failed to open {}", source.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to detect format of {}", source.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", source.display()))?;

    let thumb = DynamicImage::ImageRgb8(fit_within(image, size).to_rgb8());

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file =
        File::create(dest).with_context(|| format!("Failed to create {}", dest.display()))?;
    let mut writer = BufWriter::new(file);
    thumb
        .write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
        .with_context(|| format!("Failed to encode thumbnail {}", dest.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    log::debug!("Wrote thumbnail {}", dest.display());
    Ok(thumb.dimensions())
}
