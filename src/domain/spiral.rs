// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/spiral.rs
//
// Golden-angle (Vogel) spiral placement for markers sharing a location.

use crate::constant::{GOLDEN_ANGLE, MARKER_SPACING};

/// Displacement of a marker from the spiral center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpiralOffset {
    pub x: f64,
    pub y: f64,
}

impl SpiralOffset {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Distance from the center.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Spiral layout with a configurable radius scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralLayout {
    pub spacing: f64,
}

impl Default for SpiralLayout {
    fn default() -> Self {
        Self {
            spacing: MARKER_SPACING,
        }
    }
}

impl SpiralLayout {
    pub fn new(spacing: f64) -> Self {
        Self { spacing }
    }

    /// Offset of the `index`-th marker.
    ///
    /// Index 0 is the center. Marker `n` sits at radius `spacing * sqrt(n)`
    /// and angle `n * GOLDEN_ANGLE`; the angle is not reduced modulo 2π.
    #[allow(clippy::cast_precision_loss)]
    pub fn offset(&self, index: usize) -> SpiralOffset {
        if index == 0 {
            return SpiralOffset::ORIGIN;
        }
        let n = index as f64;
        let radius = self.spacing * n.sqrt();
        let angle = n * GOLDEN_ANGLE;
        SpiralOffset {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Offsets for markers `0..count`.
    pub fn offsets(&self, count: usize) -> impl Iterator<Item = SpiralOffset> + '_ {
        (0..count).map(move |index| self.offset(index))
    }
}

/// Offset of the `index`-th marker using the default spacing.
#[must_use]
pub fn spiral_offset(index: usize) -> SpiralOffset {
    SpiralLayout::default().offset(index)
}
