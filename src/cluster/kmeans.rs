//! One-shot k-means over a slice of points.
//!
//! Where [`ClusteringDemo`](crate::demo::ClusteringDemo) exposes every Lloyd
//! iteration for animation, [`Kmeans`] runs to completion and returns the
//! final partition. It also accepts a non-Euclidean [`Metric`] for the
//! assignment step, which is how the "same data, different distance" comparison
//! is produced. The update step is always the arithmetic mean.
//!
//! Seeding defaults to k-means++; [`Init::RandomPoints`] reproduces the plain
//! "pick k data points" start used for side-by-side initialization comparisons.

use super::distance::Metric;
use super::init::{self, Init};
use super::lloyd;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::geometry::{Bounds, Vec2};
use rand::prelude::*;
use tracing::debug;

/// K-means estimator configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    tol: f32,
    metric: Metric,
    init: Init,
    seed: Option<u64>,
}

/// Result of [`Kmeans::fit`].
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Final centroid positions; index is the cluster label.
    pub centroids: Vec<Vec2>,
    /// One label per input point.
    pub labels: Vec<usize>,
    /// Within-cluster sum of squared Euclidean distances.
    pub inertia: f32,
    /// Number of Lloyd iterations performed.
    pub iterations: usize,
    /// Whether the centroid shift fell below the tolerance before `max_iter`.
    pub converged: bool,
}

impl Kmeans {
    /// Create a new estimator for `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            tol: 1.0,
            metric: Metric::Euclidean,
            init: Init::KmeansPlusPlus,
            seed: None,
        }
    }

    /// Set the iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance (largest centroid movement, in canvas units).
    pub fn with_tol(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Set the metric used by the assignment step.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the seeding strategy.
    ///
    /// [`Init::Uniform`] draws from the smallest rectangle covering the data.
    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Fix the RNG seed for reproducible seeding.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run k-means to convergence or the iteration cap.
    pub fn fit(&self, data: &[Vec2]) -> Result<KmeansFit> {
        let n = data.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 {
            return Err(Error::InvalidArgument {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }
        if self.tol.is_nan() || self.tol <= 0.0 {
            return Err(Error::InvalidArgument {
                name: "tol",
                message: "must be positive",
            });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let bounds = Bounds::covering(data).ok_or(Error::EmptyInput)?;
        let mut centroids = init::seed_centroids(&mut rng, self.init, data, &bounds, self.k);

        let mut labels: Vec<Option<usize>> = vec![None; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            let changed = lloyd::assign(data, &centroids, self.metric, &mut labels);
            let shift = lloyd::update_centroids(data, &labels, &mut centroids);
            iterations += 1;
            debug!(iteration = iterations, changed, shift, "kmeans iteration");

            if shift < self.tol {
                converged = true;
                break;
            }
        }

        // Labels must reflect the final centroids, including when we stopped at the cap.
        lloyd::assign(data, &centroids, self.metric, &mut labels);
        let inertia = lloyd::inertia(data, &labels, &centroids);

        // `k >= 1`, so `nearest` always returns a label.
        let labels = labels.into_iter().map(|l| l.unwrap_or(0)).collect();

        Ok(KmeansFit {
            centroids,
            labels,
            inertia,
            iterations,
            converged,
        })
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec2]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
