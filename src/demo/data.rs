//! Synthetic 2D datasets.

use crate::cluster::init;
use crate::config::DemoConfig;
use crate::geometry::{Bounds, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How [`generate_data`](super::ClusteringDemo::generate_data) lays out points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    /// Each coordinate drawn independently and uniformly from the bounds.
    #[default]
    UniformRandom,
    /// Points placed round-robin around the configured blob centres.
    Blobs,
}

/// Generate `count` points according to `mode`. Every point lies inside
/// `config.bounds`.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    config: &DemoConfig,
    count: usize,
    mode: DataMode,
) -> Vec<Vec2> {
    match mode {
        DataMode::UniformRandom => init::uniform(rng, &config.bounds, count),
        DataMode::Blobs => blobs(
            rng,
            &config.bounds,
            &config.blob_centers,
            config.blob_spread,
            count,
        ),
    }
}

fn blobs<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &Bounds,
    centers: &[Vec2],
    spread: Vec2,
    count: usize,
) -> Vec<Vec2> {
    debug_assert!(!centers.is_empty(), "validated configs carry a blob preset");
    (0..count)
        .map(|i| {
            let c = centers[i % centers.len()];
            let dx = (rng.random::<f32>() - 0.5) * 2.0 * spread.x;
            let dy = (rng.random::<f32>() - 0.5) * 2.0 * spread.y;
            bounds.clamp(Vec2::new(c.x + dx, c.y + dy))
        })
        .collect()
}
