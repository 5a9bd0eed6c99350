//! Drawing projected chains onto a 2D surface.
//!
//! The renderer only needs three primitives from its host (clear, stroked
//! line, filled circle), captured by [`DrawSurface`]. Hosts provided here:
//!
//! - [`command::CommandList`]: records a display list (tests, replay)
//! - [`svg::SvgSurface`]: headless SVG snapshots
//! - `web::CanvasSurface` (feature `web`): a browser canvas

/// Recorded draw commands.
pub mod command;
/// SVG document output.
pub mod svg;

use glam::DVec2;

use crate::camera::ProjectedPoint;
use crate::chain::{Chain, Rgb};
use crate::options::{ColorOptions, ViewportOptions};

/// Minimal 2D drawing host.
pub trait DrawSurface {
    /// Clear the rectangle from the origin to `(width, height)`.
    fn clear(&mut self, width: f64, height: f64);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64);

    /// Fill a full circle.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb);
}

/// Draws a projected chain: every bond first, then every vertex on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChainRenderer {
    /// Palette, fallbacks, and stroke metrics.
    pub colors: ColorOptions,
    /// Area cleared before drawing.
    pub viewport: ViewportOptions,
}

impl ChainRenderer {
    /// Renderer with the given colors and surface size.
    #[must_use]
    pub fn new(colors: ColorOptions, viewport: ViewportOptions) -> Self {
        Self { colors, viewport }
    }

    /// Stroke color for segment `i` (from point `i` to point `i + 1`).
    #[must_use]
    pub fn segment_color(&self, chain: &Chain, i: usize) -> Rgb {
        self.colors.residue_color(
            chain.residue(i).map(|r| r.color_tag()),
            self.colors.segment_fallback,
        )
    }

    /// Fill color for point `i`. Point 0 is the origin; point `i > 0`
    /// belongs to residue `i - 1`.
    #[must_use]
    pub fn point_color(&self, chain: &Chain, i: usize) -> Rgb {
        let Some(residue_index) = i.checked_sub(1) else {
            return self.colors.origin;
        };
        self.colors.residue_color(
            chain.residue(residue_index).map(|r| r.color_tag()),
            self.colors.point_fallback,
        )
    }

    /// Clear the surface and draw `points` (projected chain coordinates).
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        points: &[ProjectedPoint],
        chain: &Chain,
    ) {
        surface.clear(self.viewport.width, self.viewport.height);

        for (i, pair) in points.windows(2).enumerate() {
            surface.stroke_line(
                DVec2::new(pair[0].x, pair[0].y),
                DVec2::new(pair[1].x, pair[1].y),
                self.segment_color(chain, i),
                self.colors.line_width,
            );
        }

        for (i, p) in points.iter().enumerate() {
            surface.fill_circle(
                DVec2::new(p.x, p.y),
                self.colors.point_radius_at(p.scale),
                self.point_color(chain, i),
            );
        }
    }
}
