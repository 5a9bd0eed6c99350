use serde::{Deserialize, Serialize};

use crate::chain::{Palette, Rgb};

/// Colors and stroke metrics for the chain renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Per-residue palette, cycled by residue index.
    pub palette: Palette,
    /// Fill for the chain origin (point 0).
    pub origin: Rgb,
    /// Stroke for a segment whose residue is missing.
    pub segment_fallback: Rgb,
    /// Fill for a point whose residue is missing.
    pub point_fallback: Rgb,
    /// Segment stroke width.
    pub line_width: f64,
    /// Point radius at a perspective scale of 100.
    pub point_radius: f64,
    /// Smallest radius a point is drawn with.
    pub min_point_radius: f64,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            origin: Rgb::new(0xE7, 0x4C, 0x3C),
            segment_fallback: Rgb::new(0x4A, 0x90, 0xE2),
            point_fallback: Rgb::new(0x34, 0x98, 0xDB),
            line_width: 2.0,
            point_radius: 5.0,
            min_point_radius: 1.0,
        }
    }
}

impl ColorOptions {
    /// Palette color for a residue's color tag, or `fallback` when there is
    /// no residue.
    #[must_use]
    pub fn residue_color(&self, tag: Option<usize>, fallback: Rgb) -> Rgb {
        tag.map_or(fallback, |tag| self.palette.color(tag))
    }

    /// Radius for a point projected at `scale`:
    /// `max(min_point_radius, point_radius · scale / 100)`.
    ///
    /// A NaN scale yields the minimum radius.
    #[must_use]
    pub fn point_radius_at(&self, scale: f64) -> f64 {
        self.min_point_radius.max(self.point_radius * scale / 100.0)
    }
}
