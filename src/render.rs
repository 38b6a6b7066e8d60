//! Rendering the demo state.
//!
//! The engine never calls a renderer; hosts pass a [`DemoSnapshot`] to one after
//! each engine call. [`SvgRenderer`] draws points as circles (grey while
//! unassigned, palette-coloured afterwards) and centroids as outlined squares.

use crate::demo::DemoSnapshot;
use std::fmt::Write;

/// Something that can draw a snapshot of the demo.
pub trait Renderer {
    type Output;

    fn render(&mut self, snapshot: &DemoSnapshot) -> Self::Output;
}

/// Cluster colours, cycled by cluster index.
pub const PALETTE: [&str; 8] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#f9ca24", "#f0932b", "#eb4d4b", "#6c5ce7", "#a29bfe",
];

const UNASSIGNED_FILL: &str = "#666";

/// Renders a snapshot to a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub width: f32,
    pub height: f32,
    pub point_radius: f32,
    pub centroid_size: f32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            point_radius: 4.0,
            centroid_size: 12.0,
        }
    }
}

impl SvgRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn to_svg(&self, snapshot: &DemoSnapshot) -> String {
        let mut out = String::with_capacity(128 + 96 * snapshot.points.len());
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut out, snapshot);
        out
    }

    fn write_svg(&self, out: &mut String, snapshot: &DemoSnapshot) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;

        for p in &snapshot.points {
            let fill = p.cluster.map_or(UNASSIGNED_FILL, color_for);
            writeln!(
                out,
                r##"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="#333" stroke-width="1"/>"##,
                p.position.x, p.position.y, self.point_radius, fill
            )?;
        }

        let half = self.centroid_size / 2.0;
        for (j, c) in snapshot.centroids.iter().enumerate() {
            writeln!(
                out,
                r##"  <rect x="{:.2}" y="{:.2}" width="{s}" height="{s}" fill="{}" stroke="#000" stroke-width="2"/>"##,
                c.x - half,
                c.y - half,
                color_for(j),
                s = self.centroid_size,
            )?;
        }

        writeln!(out, "</svg>")
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&mut self, snapshot: &DemoSnapshot) -> String {
        self.to_svg(snapshot)
    }
}

/// Palette colour for cluster `j`.
pub fn color_for(j: usize) -> &'static str {
    PALETTE[j % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{Point, Status};
    use crate::geometry::Vec2;

    fn snapshot() -> DemoSnapshot {
        DemoSnapshot {
            points: vec![
                Point {
                    position: Vec2::new(60.0, 70.0),
                    cluster: None,
                },
                Point {
                    position: Vec2::new(200.0, 120.0),
                    cluster: Some(9),
                },
            ],
            centroids: vec![Vec2::new(100.0, 100.0)],
            iteration: 1,
            status: Status::Stopped,
            inertia: Some(3.0),
            inertia_history: vec![5.0, 3.0],
        }
    }

    #[test]
    fn one_shape_per_point_and_centroid() {
        let svg = SvgRenderer::default().render(&snapshot());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains(r#"viewBox="0 0 500 300""#));
    }

    #[test]
    fn colours_follow_cluster_index() {
        let svg = SvgRenderer::default().to_svg(&snapshot());
        assert!(svg.contains(r##"fill="#666""##));
        // Cluster 9 wraps to palette slot 1.
        assert!(svg.contains(r##"fill="#4ecdc4""##));
        // Centroid 0 is centred on its position.
        assert!(svg.contains(r#"x="94.00" y="94.00""#));
    }
}
