//! Demo engine configuration.
//!
//! Defaults reproduce the tutorial canvas: points live in `[50, 450) x [50, 250)`,
//! blobs sit at three fixed centres, a step is "converged" once no centroid
//! moves a full unit, and an animated run advances once per second for at most
//! 100 iterations.

use crate::cluster::Init;
use crate::error::{Error, Result};
use crate::geometry::{Bounds, Vec2};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`ClusteringDemo`](crate::demo::ClusteringDemo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Region all generated points and initial centroids are drawn from.
    pub bounds: Bounds,

    /// Centres used by blob generation; point `i` goes to centre `i % len`.
    pub blob_centers: Vec<Vec2>,

    /// Half-width of the uniform offset around a blob centre, per axis.
    pub blob_spread: Vec2,

    /// A step converges when every centroid moves strictly less than this.
    pub convergence_threshold: f32,

    /// Iteration cap for [`run`](crate::demo::ClusteringDemo::run).
    pub max_iterations: usize,

    /// Delay a host timer should leave between run ticks.
    pub step_interval_ms: u64,

    /// Cluster count used when a run starts without centroids.
    pub default_k: usize,

    /// How centroids are placed by `initialize_centroids` and at the start of a run.
    pub init: Init,

    /// Suggested point count for a fresh dataset.
    pub default_points: usize,

    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            blob_centers: vec![
                Vec2::new(150.0, 100.0),
                Vec2::new(350.0, 100.0),
                Vec2::new(250.0, 200.0),
            ],
            blob_spread: Vec2::new(40.0, 30.0),
            convergence_threshold: 1.0,
            max_iterations: 100,
            step_interval_ms: 1000,
            default_k: 3,
            init: Init::Uniform,
            default_points: 50,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_default_k(mut self, k: usize) -> Self {
        self.default_k = k;
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f32) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Check that the configuration describes a usable demo.
    pub fn validate(&self) -> Result<()> {
        let b = &self.bounds;
        let finite = [b.min_x, b.max_x, b.min_y, b.max_y]
            .iter()
            .all(|v| v.is_finite());
        // Endpoints can be finite while their difference overflows to infinity.
        let spans_finite = b.width().is_finite() && b.height().is_finite();
        if !finite || !spans_finite || b.width() <= 0.0 || b.height() <= 0.0 {
            return Err(Error::InvalidArgument {
                name: "bounds",
                message: "must be finite with min < max and a finite span on both axes",
            });
        }
        if self.blob_centers.is_empty() {
            return Err(Error::InvalidArgument {
                name: "blob_centers",
                message: "must contain at least one centre",
            });
        }
        if self
            .blob_centers
            .iter()
            .any(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(Error::InvalidArgument {
                name: "blob_centers",
                message: "must be finite",
            });
        }
        let spread = self.blob_spread;
        if !(spread.x.is_finite() && spread.y.is_finite() && spread.x >= 0.0 && spread.y >= 0.0) {
            return Err(Error::InvalidArgument {
                name: "blob_spread",
                message: "must be finite and non-negative",
            });
        }
        if self.convergence_threshold.is_nan() || self.convergence_threshold <= 0.0 {
            return Err(Error::InvalidArgument {
                name: "convergence_threshold",
                message: "must be positive",
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidArgument {
                name: "max_iterations",
                message: "must be at least 1",
            });
        }
        if self.default_k == 0 {
            return Err(Error::InvalidArgument {
                name: "default_k",
                message: "must be at least 1",
            });
        }
        if self.default_points == 0 {
            return Err(Error::InvalidArgument {
                name: "default_points",
                message: "must be at least 1",
            });
        }
        Ok(())
    }
}
