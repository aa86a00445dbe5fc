// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/photo.rs
//
// Photo records and the catalog document consumed by the gallery.

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// A geotagged photo as listed in the gallery catalog.
///
/// Only `id` is interpreted by this crate; the other fields are carried
/// through for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique identifier (relative path with forward slashes).
    pub id: String,
    /// File name of the original.
    pub name: String,
    /// Where the photo was taken.
    #[serde(flatten)]
    pub location: Coordinate,
    /// Public URL of the thumbnail.
    pub thumb: String,
    /// Public URL of the original file.
    pub original: String,
}

impl Photo {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Top-level catalog document: `{"photos": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoCatalog {
    pub photos: Vec<Photo>,
}

impl PhotoCatalog {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
