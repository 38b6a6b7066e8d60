//! Lloyd iteration kernels: assignment and centroid update.
//!
//! These are free functions over slices so the stateful demo engine and the
//! batch [`Kmeans`](super::Kmeans) estimator share one implementation.
//!
//! Contracts the callers rely on:
//! - Ties in the assignment step go to the lowest centroid index.
//! - A centroid that receives no points keeps its previous position; there is
//!   no reseeding and no division by a zero cluster size.

use super::distance::{squared_euclidean, Metric};
use crate::geometry::Vec2;

/// Index of the centroid closest to `p`, or `None` if `centroids` is empty.
///
/// Scans in ascending index order and only replaces the current best on a
/// strictly smaller distance, so ties resolve to the lowest index.
pub fn nearest(p: Vec2, centroids: &[Vec2], metric: Metric) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (j, &c) in centroids.iter().enumerate() {
        let d = metric.distance(p, c);
        if d.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((j, d));
        }
    }
    // All distances NaN: fall back to the first centroid.
    best.map(|(j, _)| j)
        .or_else(|| (!centroids.is_empty()).then_some(0))
}

/// Assign every point to its nearest centroid.
///
/// `labels` must have the same length as `points`. Returns the number of
/// labels that changed.
pub fn assign(
    points: &[Vec2],
    centroids: &[Vec2],
    metric: Metric,
    labels: &mut [Option<usize>],
) -> usize {
    debug_assert_eq!(points.len(), labels.len());
    let mut changed = 0;
    for (p, label) in points.iter().zip(labels.iter_mut()) {
        let next = nearest(*p, centroids, metric);
        if *label != next {
            *label = next;
            changed += 1;
        }
    }
    changed
}

/// Move each centroid to the mean of its assigned points.
///
/// Unassigned points and out-of-range labels are ignored. Returns the largest
/// (Euclidean) distance any centroid moved.
pub fn update_centroids(points: &[Vec2], labels: &[Option<usize>], centroids: &mut [Vec2]) -> f32 {
    debug_assert_eq!(points.len(), labels.len());
    let k = centroids.len();
    let mut sums = vec![(0.0f64, 0.0f64); k];
    let mut counts = vec![0usize; k];

    for (p, label) in points.iter().zip(labels) {
        if let Some(j) = *label {
            if j < k {
                sums[j].0 += f64::from(p.x);
                sums[j].1 += f64::from(p.y);
                counts[j] += 1;
            }
        }
    }

    let mut max_shift = 0.0f32;
    for (j, c) in centroids.iter_mut().enumerate() {
        if counts[j] == 0 {
            continue;
        }
        let n = counts[j] as f64;
        let next = Vec2::new((sums[j].0 / n) as f32, (sums[j].1 / n) as f32);
        max_shift = max_shift.max(squared_euclidean(*c, next).sqrt());
        *c = next;
    }
    max_shift
}

/// Within-cluster sum of squared Euclidean distances.
///
/// Only points with a label that indexes into `centroids` contribute; with no
/// such points the result is 0.
pub fn inertia(points: &[Vec2], labels: &[Option<usize>], centroids: &[Vec2]) -> f32 {
    points
        .iter()
        .zip(labels)
        .filter_map(|(p, label)| {
            label
                .and_then(|j| centroids.get(j))
                .map(|c| squared_euclidean(*p, *c))
        })
        .sum()
}
