// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/coordinate.rs
//
// Geographic coordinate and free-text "jump to" parsing.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Both components are always finite when produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Parse user input of the form `"<lat>,<lon>"`.
///
/// Only the first comma separates the components; whitespace around each
/// component is ignored. Returns `None` when either side is missing, not a
/// number, or not finite (`inf`, `NaN`). Each component must be a number
/// in full: trailing text such as `"12abc"` or `"2,3"` (from `"1,2,3"`) is
/// rejected rather than truncated to its numeric prefix.
#[must_use]
pub fn parse_jump_coordinates(text: &str) -> Option<Coordinate> {
    let (lat_text, lon_text) = text.split_once(',')?;
    let lat = parse_finite(lat_text)?;
    let lon = parse_finite(lon_text)?;
    Some(Coordinate { lat, lon })
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
