use std::path::Path;

use ::svg::node::element::{Circle, Line, Rectangle};
use ::svg::{Document, Node};
use glam::DVec2;

use super::DrawSurface;
use crate::chain::Rgb;
use crate::error::ChainViewError;

/// Renders draw calls into a standalone SVG document.
///
/// Coordinates are rounded to two decimals; the surface size given at
/// construction becomes the document's `viewBox`.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Rgb>,
    document: Document,
}

fn rounded(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl SvgSurface {
    /// Empty transparent document of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            document: Self::blank(width, height),
        }
    }

    fn blank(width: f64, height: f64) -> Document {
        Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"))
    }

    /// Paint cleared areas with `color` instead of leaving them transparent.
    #[must_use]
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    /// The complete SVG document for everything drawn since the last clear.
    #[must_use]
    pub fn to_document(&self) -> String {
        self.document.to_string()
    }

    /// Write the document to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ChainViewError> {
        ::svg::save(path, &self.document)?;
        log::info!("wrote snapshot to {}", path.display());
        Ok(())
    }
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.document = Self::blank(self.width, self.height);
        if let Some(bg) = self.background {
            self.document.append(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", rounded(width))
                    .set("height", rounded(height))
                    .set("fill", bg.to_hex()),
            );
        }
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgb, width: f64) {
        self.document.append(
            Line::new()
                .set("x1", rounded(from.x))
                .set("y1", rounded(from.y))
                .set("x2", rounded(to.x))
                .set("y2", rounded(to.y))
                .set("stroke", color.to_hex())
                .set("stroke-width", rounded(width)),
        );
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.document.append(
            Circle::new()
                .set("cx", rounded(center.x))
                .set("cy", rounded(center.y))
                .set("r", rounded(radius))
                .set("fill", color.to_hex()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::RAINBOW;

    #[test]
    fn document_contains_primitives_in_order() {
        let mut svg = SvgSurface::new(600.0, 500.0);
        svg.clear(600.0, 500.0);
        svg.stroke_line(DVec2::ZERO, DVec2::new(10.0, 5.504), RAINBOW[0], 2.0);
        svg.fill_circle(DVec2::new(10.0, 5.5), 1.0, RAINBOW[6]);
        let doc = svg.to_document();

        assert!(doc.contains("<svg"));
        assert!(doc.contains("viewBox=\"0 0 600 500\""));
        let line = doc.find("<line").unwrap();
        let circle = doc.find("<circle").unwrap();
        assert!(line < circle);

        let line_tag = &doc[line..doc[line..].find("/>").unwrap() + line];
        for attr in ["x2=\"10\"", "y2=\"5.5\"", "stroke=\"#FF0000\""] {
            assert!(line_tag.contains(attr), "{attr} missing in {line_tag}");
        }
        assert!(doc[circle..].contains("fill=\"#9400D3\""));
    }

    #[test]
    fn clear_discards_previous_frame() {
        let mut svg = SvgSurface::new(10.0, 10.0).with_background(RAINBOW[2]);
        svg.fill_circle(DVec2::ZERO, 1.0, RAINBOW[0]);
        svg.clear(10.0, 10.0);
        let doc = svg.to_document();
        assert!(!doc.contains("<circle"));
        assert!(doc.contains("<rect"));
        assert!(doc.contains("fill=\"#FFFF00\""));
    }

    #[test]
    fn save_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chain.svg");
        let mut svg = SvgSurface::new(20.0, 20.0);
        svg.fill_circle(DVec2::new(4.0, 4.0), 2.0, RAINBOW[3]);
        svg.save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<circle"));
        assert!(written.contains("fill=\"#00FF00\""));
    }
}
