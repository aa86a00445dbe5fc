// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/download.rs
//
// Download plan derived from the current selection.

use serde::Serialize;

use super::photo::Photo;
use super::selection::SelectionSet;

/// What a download action should do for the current selection.
///
/// Borrows from the photo list it was computed from; recompute it whenever
/// the selection changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DownloadPlan<'a> {
    /// Nothing selected.
    None,
    /// Exactly one photo: download the file directly.
    Single { photo: &'a Photo },
    /// Two or more photos, in gallery order: download as a batch.
    Multi { photos: Vec<&'a Photo> },
}

impl<'a> DownloadPlan<'a> {
    pub fn from_selection(photos: &'a [Photo], selection: &SelectionSet) -> Self {
        let mut selected = selection.selected_photos(photos);
        match selected.len() {
            0 => Self::None,
            1 => Self::Single {
                photo: selected.remove(0),
            },
            _ => Self::Multi { photos: selected },
        }
    }

    /// Every photo covered by the plan, in gallery order.
    pub fn photos(&self) -> Vec<&'a Photo> {
        match self {
            Self::None => Vec::new(),
            Self::Single { photo } => vec![*photo],
            Self::Multi { photos } => photos.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single { .. } => 1,
            Self::Multi { photos } => photos.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}
