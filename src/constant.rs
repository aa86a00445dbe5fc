// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

use std::f64::consts::PI;

/// Radius scale of the marker spiral: marker `n` sits at `MARKER_SPACING * sqrt(n)`.
pub const MARKER_SPACING: f64 = 80.0;

/// Square root of five, correctly rounded (same bits as `5.0_f64.sqrt()`).
const SQRT_5: f64 = 2.236_067_977_499_79;

/// Golden angle in radians: `π · (3 − √5)` ≈ 2.3999632 rad ≈ 137.5°.
pub const GOLDEN_ANGLE: f64 = PI * (3.0 - SQRT_5);

/// Minutes per degree (GPS coordinate conversion: DMS to decimal degrees).
pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// Seconds per degree (GPS coordinate conversion: DMS to decimal degrees).
pub const SECONDS_PER_DEGREE: f64 = 3600.0;

/// Hemisphere references that flip the sign of a GPS component.
pub const NEGATIVE_GPS_REFS: [&str; 2] = ["S", "W"];

/// File extensions (lowercase) scanned for geotagged photos.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "tif", "tiff"];

/// Maximum thumbnail edge in pixels (square bounding box).
pub const THUMBNAIL_SIZE: u32 = 256;

/// JPEG quality used for thumbnails.
pub const THUMBNAIL_QUALITY: u8 = 85;

/// Thumbnail file extension.
pub const THUMBNAIL_EXT: &str = "jpg";

/// Default catalog output path.
pub const DEFAULT_OUTPUT: &str = "site/public/photos.json";

/// Default thumbnail directory.
pub const DEFAULT_THUMBS_DIR: &str = "site/public/thumbs";

/// Default directory for copied originals.
pub const DEFAULT_ORIGINALS_DIR: &str = "site/public/photos";
