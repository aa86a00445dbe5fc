// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Library root: gallery helpers and catalog extraction.

//! Helpers for a map-based photo gallery.
//!
//! - [`domain`] holds the pure model used by the front-end: coordinate
//!   parsing, photo selection, download plans and spiral marker layout.
//! - [`app`] (feature `extract`) builds the `photos.json` catalog from a
//!   directory of geotagged photos.

pub mod config;
pub mod constant;
pub mod domain;

#[cfg(feature = "extract")]
pub mod app;

pub use config::ExtractConfig;
pub use domain::{
    Coordinate, DownloadPlan, Photo, PhotoCatalog, SelectionSet, SpiralLayout, SpiralOffset,
    parse_jump_coordinates, spiral_offset,
};
