// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/catalog.rs
//
// Build the gallery catalog from a directory of geotagged photos.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use super::{gps, thumbnail};
use crate::config::ExtractConfig;
use crate::constant::{IMAGE_EXTENSIONS, THUMBNAIL_EXT};
use crate::domain::{Photo, PhotoCatalog};

/// Outcome of an extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Photo files looked at.
    pub scanned: usize,
    /// Photos written to the catalog.
    pub written: usize,
    /// Photos left out (no GPS position or unreadable).
    pub skipped: usize,
}

/// Whether `path` has one of the scanned photo extensions.
pub fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Join the components of a relative path with forward slashes.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Site-absolute URL (`/thumbs/a.jpg`) of a file below `public_dir`.
pub fn public_url(public_dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(public_dir).ok()?;
    Some(format!("/{}", to_slash_path(relative)))
}

/// Photo files below `input_dir`, in sorted path order.
///
/// Symlinked files are included; symlinked directories are not descended.
pub fn collect_photo_paths(input_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(input_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.path().is_file() && is_photo(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Whether both paths resolve to the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Produce the catalog entry for one photo.
///
/// Returns `Ok(None)` when the photo carries no GPS position. Thumbnail
/// and original copy are only written for geotagged photos.
fn build_entry(config: &ExtractConfig, path: &Path) -> anyhow::Result<Option<Photo>> {
    let Some(location) = gps::read_gps(path)? else {
        return Ok(None);
    };

    let relative = path
        .strip_prefix(&config.input_dir)
        .with_context(|| format!("{} is outside the input directory", path.display()))?;
    let public_dir = config.public_dir();

    let thumb_path = config
        .thumbs_dir
        .join(relative.with_extension(THUMBNAIL_EXT));
    let original_path = config.originals_dir.join(relative);
    for dest in [&thumb_path, &original_path] {
        if same_file(path, dest) {
            return Err(anyhow::anyhow!(
                "Refusing to overwrite {} with its own copy",
                path.display()
            ));
        }
    }
    thumbnail::write_thumbnail(
        path,
        &thumb_path,
        config.thumbnail_size,
        config.jpeg_quality,
    )?;

    if let Some(parent) = original_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::copy(path, &original_path).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            path.display(),
            original_path.display()
        )
    })?;

    let thumb = public_url(public_dir, &thumb_path)
        .ok_or_else(|| anyhow::anyhow!("{} is not public", thumb_path.display()))?;
    let original = public_url(public_dir, &original_path)
        .ok_or_else(|| anyhow::anyhow!("{} is not public", original_path.display()))?;

    Ok(Some(Photo {
        id: to_slash_path(relative),
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        location,
        thumb,
        original,
    }))
}

/// Scan the input directory and build catalog entries, writing thumbnails
/// and original copies along the way.
pub fn extract_catalog(config: &ExtractConfig) -> anyhow::Result<(PhotoCatalog, ExtractSummary)> {
    config.validate()?;
    for dir in [&config.thumbs_dir, &config.originals_dir] {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let mut summary = ExtractSummary::default();
    let mut photos = Vec::new();

    log::info!("Scanning {}", config.input_dir.display());
    for path in collect_photo_paths(&config.input_dir) {
        summary.scanned += 1;
        match build_entry(config, &path) {
            Ok(Some(photo)) => {
                log::debug!("{} at {}, {}", photo.id, photo.location.lat, photo.location.lon);
                photos.push(photo);
                summary.written += 1;
                if summary.written % 100 == 0 {
                    log::info!("Processed {} geotagged photos...", summary.written);
                }
            }
            Ok(None) => {
                log::debug!("No GPS position in {}", path.display());
                summary.skipped += 1;
            }
            Err(e) => {
                log::warn!("Skipping {}: {e:#}", path.display());
                summary.skipped += 1;
            }
        }
    }

    Ok((PhotoCatalog::new(photos), summary))
}

/// Run a full extraction and write the catalog JSON.
pub fn run(config: &ExtractConfig) -> anyhow::Result<ExtractSummary> {
    let (catalog, summary) = extract_catalog(config)?;

    if let Some(parent) = config.output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = catalog
        .to_json_pretty()
        .context("Failed to serialize photo catalog")?;
    fs::write(&config.output_path, json)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    log::info!(
        "Wrote {} photos to {} ({} scanned, {} skipped)",
        summary.written,
        config.output_path.display(),
        summary.scanned,
        summary.skipped
    );
    Ok(summary)
}
