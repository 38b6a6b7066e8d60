//! Centroid seeding strategies.
//!
//! - [`Init::Uniform`]: k positions drawn uniformly from a rectangle. This is
//!   the demo's default and often produces a centroid that wins no points.
//! - [`Init::RandomPoints`]: k data points picked at random (distinct while
//!   `k <= n`).
//! - [`Init::KmeansPlusPlus`]: the first centroid is a random data point; each
//!   next one is a data point drawn with probability proportional to its squared
//!   distance from the nearest centroid chosen so far (Arthur & Vassilvitskii,
//!   2007). Spreads the seeds out and usually cuts the number of Lloyd
//!   iterations.
//!
//! Strategies that need data fall back to `Uniform` when `points` is empty.

use super::distance::squared_euclidean;
use crate::geometry::{Bounds, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How initial centroids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Init {
    /// Uniform positions inside the bounds.
    #[default]
    Uniform,
    /// Random data points.
    RandomPoints,
    /// k-means++ (D² weighting).
    KmeansPlusPlus,
}

/// Produce `k` centroids.
///
/// `bounds` is only consulted by [`Init::Uniform`] and by the empty-data
/// fallback.
pub fn seed_centroids<R: Rng + ?Sized>(
    rng: &mut R,
    init: Init,
    points: &[Vec2],
    bounds: &Bounds,
    k: usize,
) -> Vec<Vec2> {
    if points.is_empty() {
        return uniform(rng, bounds, k);
    }
    match init {
        Init::Uniform => uniform(rng, bounds, k),
        Init::RandomPoints => random_points(rng, points, k),
        Init::KmeansPlusPlus => kmeans_plus_plus(rng, points, k),
    }
}

/// `k` positions uniform in `bounds`, clamped so float rounding in the range
/// sampler cannot land on an open edge.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds, k: usize) -> Vec<Vec2> {
    (0..k)
        .map(|_| {
            let p = Vec2::new(
                sample_axis(rng, bounds.min_x, bounds.max_x),
                sample_axis(rng, bounds.min_y, bounds.max_y),
            );
            bounds.clamp(p)
        })
        .collect()
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo && (hi - lo).is_finite() {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

fn random_points<R: Rng + ?Sized>(rng: &mut R, points: &[Vec2], k: usize) -> Vec<Vec2> {
    let n = points.len();
    let distinct = k.min(n);
    let mut out: Vec<Vec2> = rand::seq::index::sample(rng, n, distinct)
        .into_iter()
        .map(|i| points[i])
        .collect();
    // More centroids than points: repeats are unavoidable.
    while out.len() < k {
        out.push(points[rng.random_range(0..n)]);
    }
    out
}

fn kmeans_plus_plus<R: Rng + ?Sized>(rng: &mut R, points: &[Vec2], k: usize) -> Vec<Vec2> {
    let n = points.len();
    let mut centroids = Vec::with_capacity(k);
    if k == 0 {
        return centroids;
    }

    let first = points[rng.random_range(0..n)];
    centroids.push(first);

    // Squared distance from each point to its nearest chosen centroid.
    let mut d2: Vec<f64> = points
        .iter()
        .map(|p| f64::from(squared_euclidean(*p, first)))
        .collect();

    while centroids.len() < k {
        let total: f64 = d2.iter().sum();
        let next = if total > 0.0 && total.is_finite() {
            let target = rng.random::<f64>() * total;
            let mut acc = 0.0;
            // Rounding can leave `acc` just under `target`; fall back to the
            // last point with nonzero weight.
            let mut pick = d2.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1);
            for (i, &w) in d2.iter().enumerate() {
                acc += w;
                if w > 0.0 && acc >= target {
                    pick = i;
                    break;
                }
            }
            pick
        } else {
            // Every point already coincides with a centroid.
            rng.random_range(0..n)
        };

        let c = points[next];
        centroids.push(c);
        for (w, p) in d2.iter_mut().zip(points) {
            *w = w.min(f64::from(squared_euclidean(*p, c)));
        }
    }
    centroids
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn three_groups() -> Vec<Vec2> {
        let mut pts = Vec::new();
        for (cx, cy) in [(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)] {
            for i in 0..5 {
                pts.push(Vec2::new(cx + i as f32 * 0.1, cy));
            }
        }
        pts
    }

    #[test]
    fn uniform_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let b = Bounds::default();
        let c = seed_centroids(&mut rng, Init::Uniform, &three_groups(), &b, 20);
        assert_eq!(c.len(), 20);
        assert!(c.iter().all(|p| b.contains(*p)));
    }

    #[test]
    fn random_points_are_data_points() {
        let mut rng = StdRng::seed_from_u64(2);
        let data = three_groups();
        let c = seed_centroids(&mut rng, Init::RandomPoints, &data, &Bounds::default(), 4);
        assert_eq!(c.len(), 4);
        assert!(c.iter().all(|p| data.contains(p)));

        // k > n repeats points rather than failing.
        let c = seed_centroids(&mut rng, Init::RandomPoints, &data[..2], &Bounds::default(), 5);
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn kmeans_plus_plus_spreads_over_groups() {
        let data = three_groups();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let c = seed_centroids(&mut rng, Init::KmeansPlusPlus, &data, &Bounds::default(), 3);
            assert_eq!(c.len(), 3);
            assert!(c.iter().all(|p| data.contains(p)));

            // Within-group spread is 0.4 and groups are ~100 apart, so the D²
            // weighting lands one seed in each group (a miss has odds near 1e-5).
            let mut groups: Vec<usize> = c
                .iter()
                .map(|p| data.iter().position(|q| q == p).unwrap() / 5)
                .collect();
            groups.sort_unstable();
            assert_eq!(groups, vec![0, 1, 2], "seed {seed}");
        }
    }

    #[test]
    fn kmeans_plus_plus_handles_duplicates() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = vec![Vec2::new(1.0, 1.0); 4];
        let c = seed_centroids(&mut rng, Init::KmeansPlusPlus, &data, &Bounds::default(), 3);
        assert_eq!(c, vec![Vec2::new(1.0, 1.0); 3]);
    }

    #[test]
    fn empty_data_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(4);
        let b = Bounds::default();
        let c = seed_centroids(&mut rng, Init::KmeansPlusPlus, &[], &b, 2);
        assert_eq!(c.len(), 2);
        assert!(c.iter().all(|p| b.contains(*p)));
    }
}
