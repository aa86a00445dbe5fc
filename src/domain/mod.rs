// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure gallery model: coordinates, photos, selection, download plans and
// marker layout. No I/O.

pub mod coordinate;
pub mod download;
pub mod photo;
pub mod selection;
pub mod spiral;

pub use coordinate::{Coordinate, parse_jump_coordinates};
pub use download::DownloadPlan;
pub use photo::{Photo, PhotoCatalog};
pub use selection::SelectionSet;
pub use spiral::{SpiralLayout, SpiralOffset, spiral_offset};
