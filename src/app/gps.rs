// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/gps.rs
//
// GPS position from EXIF metadata (kamadak-exif).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use exif::{Exif, In, Tag, Value};

use crate::constant::{MINUTES_PER_DEGREE, NEGATIVE_GPS_REFS, SECONDS_PER_DEGREE};
use crate::domain::Coordinate;

/// Convert an EXIF rational to a float. Zero denominators are rejected.
pub fn rational_to_f64(num: f64, denom: f64) -> Option<f64> {
    if denom == 0.0 {
        None
    } else {
        Some(num / denom)
    }
}

/// Degrees/minutes/seconds to signed decimal degrees.
///
/// `reference` is the EXIF hemisphere letter; `S` and `W` are negative.
pub fn dms_to_decimal(dms: [f64; 3], reference: &str) -> f64 {
    let [degrees, minutes, seconds] = dms;
    let decimal = degrees + minutes / MINUTES_PER_DEGREE + seconds / SECONDS_PER_DEGREE;
    if NEGATIVE_GPS_REFS
        .iter()
        .any(|r| r.eq_ignore_ascii_case(reference.trim()))
    {
        -decimal
    } else {
        decimal
    }
}

/// Read the degrees/minutes/seconds triplet of a GPS field.
fn dms_components(value: &Value) -> Option<[f64; 3]> {
    let parts: Vec<f64> = match value {
        Value::Rational(rationals) => rationals
            .iter()
            .map(|r| rational_to_f64(f64::from(r.num), f64::from(r.denom)))
            .collect::<Option<_>>()?,
        Value::SRational(rationals) => rationals
            .iter()
            .map(|r| rational_to_f64(f64::from(r.num), f64::from(r.denom)))
            .collect::<Option<_>>()?,
        _ => return None,
    };
    match parts.as_slice() {
        [degrees, minutes, seconds, ..] => Some([*degrees, *minutes, *seconds]),
        _ => None,
    }
}

/// Read a hemisphere letter (`N`, `S`, `E`, `W`).
fn hemisphere(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(strings) => {
            let first = strings.first()?;
            let text = String::from_utf8_lossy(first);
            let text = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
            (!text.is_empty()).then(|| text.to_string())
        }
        _ => None,
    }
}

/// Build a coordinate from the four GPS field values.
pub fn gps_from_values(
    latitude: &Value,
    latitude_ref: &Value,
    longitude: &Value,
    longitude_ref: &Value,
) -> Option<Coordinate> {
    let lat = dms_to_decimal(dms_components(latitude)?, &hemisphere(latitude_ref)?);
    let lon = dms_to_decimal(dms_components(longitude)?, &hemisphere(longitude_ref)?);
    (lat.is_finite() && lon.is_finite()).then(|| Coordinate::new(lat, lon))
}

/// Extract the GPS position from parsed EXIF data.
///
/// Returns `None` if any of the latitude/longitude fields or their
/// hemisphere references is missing or malformed.
pub fn extract_gps(exif: &Exif) -> Option<Coordinate> {
    let field = |tag: Tag| exif.get_field(tag, In::PRIMARY).map(|f| &f.value);
    gps_from_values(
        field(Tag::GPSLatitude)?,
        field(Tag::GPSLatitudeRef)?,
        field(Tag::GPSLongitude)?,
        field(Tag::GPSLongitudeRef)?,
    )
}

/// Read the GPS position of an image file.
///
/// Files without any EXIF data yield `Ok(None)`; unreadable files and
/// corrupt EXIF blocks are errors.
pub fn read_gps(path: &Path) -> anyhow::Result<Option<Coordinate>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Ok(extract_gps(&exif)),
        Err(exif::Error::NotFound(_)) => Ok(None),
        Err(e) => Err(anyhow::anyhow!(
            "Failed to read EXIF from {}: {e}",
            path.display()
        )),
    }
}
