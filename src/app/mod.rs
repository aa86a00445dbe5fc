// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Catalog extraction: EXIF GPS decoding, thumbnails and the photos.json
// writer.

pub mod catalog;
pub mod gps;
pub mod thumbnail;

pub use catalog::{ExtractSummary, extract_catalog, run};
