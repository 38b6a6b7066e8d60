//! Clustering quality scores.

use super::distance::Metric;
use crate::geometry::Vec2;

pub use super::lloyd::inertia;

/// Mean silhouette coefficient of a labelling.
///
/// For a point in cluster `A`, `a` is its mean distance to the other members of
/// `A` (0 for a singleton) and `b` is the smallest mean distance to the members
/// of any other non-empty cluster. The point scores `(b - a) / max(a, b)`.
///
/// Unlabelled points are ignored. Points for which `b` is undefined (only one
/// non-empty cluster) or zero are skipped. Returns 0 when no point qualifies.
///
/// O(n²); intended for demo-sized datasets.
pub fn silhouette_score(points: &[Vec2], labels: &[Option<usize>], metric: Metric) -> f32 {
    debug_assert_eq!(points.len(), labels.len());
    let k = labels.iter().flatten().max().map_or(0, |&m| m + 1);
    if k < 2 {
        return 0.0;
    }

    let mut sizes = vec![0usize; k];
    for &j in labels.iter().flatten() {
        sizes[j] += 1;
    }

    let mut total = 0.0f64;
    let mut counted = 0usize;
    let mut sums = vec![0.0f64; k];

    for (i, (&p, label)) in points.iter().zip(labels).enumerate() {
        let Some(own) = *label else { continue };

        sums.iter_mut().for_each(|s| *s = 0.0);
        for (other_idx, (&q, other_label)) in points.iter().zip(labels).enumerate() {
            if other_idx == i {
                continue;
            }
            if let Some(j) = *other_label {
                sums[j] += f64::from(metric.distance(p, q));
            }
        }

        let a = if sizes[own] > 1 {
            sums[own] / (sizes[own] - 1) as f64
        } else {
            0.0
        };

        let b = (0..k)
            .filter(|&j| j != own && sizes[j] > 0)
            .map(|j| sums[j] / sizes[j] as f64)
            .fold(f64::INFINITY, f64::min);

        if !b.is_finite() || b <= 0.0 {
            continue;
        }

        total += (b - a) / a.max(b);
        counted += 1;
    }

    if counted == 0 {
        0.0
    } else {
        (total / counted as f64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blobs() -> (Vec<Vec2>, Vec<Option<usize>>) {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(101.0, 100.0),
            Vec2::new(100.0, 101.0),
        ];
        let labels = vec![Some(0), Some(0), Some(0), Some(1), Some(1), Some(1)];
        (points, labels)
    }

    #[test]
    fn well_separated_blobs_score_high() {
        let (points, labels) = two_blobs();
        let s = silhouette_score(&points, &labels, Metric::Euclidean);
        assert!(s > 0.95, "silhouette = {s}");
    }

    #[test]
    fn swapped_labels_score_negative() {
        let (points, _) = two_blobs();
        // Each cluster straddles both blobs.
        let labels = vec![Some(0), Some(1), Some(1), Some(0), Some(1), Some(1)];
        let s = silhouette_score(&points, &labels, Metric::Euclidean);
        assert!(s < 0.0, "silhouette = {s}");
    }

    #[test]
    fn single_cluster_scores_zero() {
        let (points, _) = two_blobs();
        let labels = vec![Some(0); points.len()];
        assert_eq!(silhouette_score(&points, &labels, Metric::Euclidean), 0.0);
    }

    #[test]
    fn unlabelled_scores_zero() {
        let (points, _) = two_blobs();
        let labels = vec![None; points.len()];
        assert_eq!(silhouette_score(&points, &labels, Metric::Euclidean), 0.0);
    }
}
