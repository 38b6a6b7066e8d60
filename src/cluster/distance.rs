//! Distance functions on the 2D canvas.
//!
//! The interactive engine always uses [`Metric::Euclidean`]. The other metrics
//! exist for side-by-side comparisons (the same data clustered under different
//! notions of "close").

use crate::geometry::Vec2;
use serde::{Deserialize, Serialize};

/// A distance metric between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Straight-line (L2) distance.
    #[default]
    Euclidean,
    /// City-block (L1) distance.
    Manhattan,
    /// `1 - cos θ` between the two position vectors.
    Cosine,
}

impl Metric {
    /// Distance between `a` and `b` under this metric.
    #[inline]
    pub fn distance(self, a: Vec2, b: Vec2) -> f32 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => (a.x - b.x).abs() + (a.y - b.y).abs(),
            Metric::Cosine => cosine(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
            Metric::Cosine => "cosine",
        }
    }
}

#[inline]
pub fn squared_euclidean(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[inline]
pub fn euclidean(a: Vec2, b: Vec2) -> f32 {
    squared_euclidean(a, b).sqrt()
}

/// Cosine distance. A zero-length vector has no direction, so it is treated as
/// maximally dissimilar to everything (`1.0`).
fn cosine(a: Vec2, b: Vec2) -> f32 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 1.0;
    }
    1.0 - (a.dot(b) / denom).clamp(-1.0, 1.0)
}
