//! 2D primitives shared by the engine, the metrics and the renderer.

use serde::{Deserialize, Serialize};

/// A position on the demo canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, half-open on the upper edges: `x ∈ [min_x, max_x)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x < self.max_x && p.y >= self.min_y && p.y < self.max_y
    }

    /// Pull `p` inside the rectangle.
    ///
    /// The upper edges are exclusive, so values at or past them land on the
    /// largest representable value below the edge. NaN lands on the lower edge.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: clamp_half_open(p.x, self.min_x, self.max_x),
            y: clamp_half_open(p.y, self.min_y, self.max_y),
        }
    }

    /// Smallest rectangle covering `points`, or `None` for an empty slice.
    ///
    /// The upper edges are nudged up one ulp so every point is contained.
    pub fn covering(points: &[Vec2]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Self::new(first.x, first.x, first.y, first.y);
        for p in &points[1..] {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }
        b.max_x = b.max_x.next_up();
        b.max_y = b.max_y.next_up();
        Some(b)
    }
}

impl Default for Bounds {
    /// The tutorial canvas: a 500x300 view box with a 50 unit margin.
    fn default() -> Self {
        Self::new(50.0, 450.0, 50.0, 250.0)
    }
}

fn clamp_half_open(v: f32, lo: f32, hi: f32) -> f32 {
    if v.is_nan() || v < lo {
        lo
    } else if v >= hi {
        hi.next_down().max(lo)
    } else {
        v
    }
}
