//! The interactive k-means engine.
//!
//! [`ClusteringDemo`] owns one demo session: a dataset of 2D points, the current
//! centroids, and the run state (iteration counter, running flag, convergence
//! flag). A controller drives it (generate, step, run, reset) and a renderer
//! reads [`ClusteringDemo::snapshot`] after each call.
//!
//! ## Step semantics
//!
//! One [`step`](ClusteringDemo::step) is one Lloyd iteration:
//!
//! 1. **Assign**: every point goes to its nearest centroid (Euclidean). Ties go
//!    to the lowest centroid index.
//! 2. **Update**: every centroid moves to the mean of its points. A centroid with
//!    no points stays where it is.
//!
//! The step has converged when every centroid moved strictly less than
//! [`DemoConfig::convergence_threshold`].
//!
//! Stepping with no data or no centroids is a guarded no-op that reports
//! convergence; it is not an error.
//!
//! ## Runs
//!
//! [`run`](ClusteringDemo::run) behaves like the tutorial's "Run" button: it
//! seeds `k` fresh centroids (the current `k`, or `default_k` when there are
//! none), zeroes the iteration counter, and then steps until convergence, the
//! iteration cap, or cancellation. [`resume`](ClusteringDemo::resume) keeps the
//! current centroids and counter instead, for "step a few times, then let it
//! finish".
//!
//! ## Example
//!
//! ```rust
//! use kmeans_demo::{ClusteringDemo, DataMode, DemoConfig};
//!
//! let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(7).with_default_k(3)).unwrap();
//! demo.generate_data(60, DataMode::Blobs).unwrap();
//!
//! // A run seeds fresh centroids and restarts the iteration counter.
//! for report in demo.run() {
//!     // A host would redraw here and wait for its timer.
//!     assert!(report.iteration <= 100);
//! }
//! assert!(!demo.is_running());
//! assert!(demo.points().all(|p| p.cluster.is_some_and(|c| c < 3)));
//! ```

mod data;
mod run;

pub use data::{generate, DataMode};
pub use run::{FinishReason, Run, RunTick, StepReport};

use crate::cluster::distance::Metric;
use crate::cluster::init::{self, Init};
use crate::cluster::{lloyd, metrics};
use crate::config::DemoConfig;
use crate::error::{Error, Result};
use crate::geometry::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// A dataset point and its current cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub position: Vec2,
    /// Index into the centroid sequence, `None` until the first assignment.
    pub cluster: Option<usize>,
}

impl Point {
    /// Cluster as a signed label, `-1` when unassigned.
    pub fn label(&self) -> i64 {
        self.cluster.map_or(-1, |c| c as i64)
    }
}

/// Coarse run status, for status text in a host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No iteration has run since the last reset.
    Ready,
    /// A run is in progress.
    Running,
    /// The most recent step converged.
    Converged,
    /// Iterations ran but the last one did not converge (manual stepping,
    /// cancellation, or the iteration cap).
    Stopped,
}

/// Everything a renderer or controller needs to display the current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSnapshot {
    pub points: Vec<Point>,
    pub centroids: Vec<Vec2>,
    pub iteration: usize,
    pub status: Status,
    /// Inertia, once at least one iteration has run.
    pub inertia: Option<f32>,
    /// Inertia after each iteration since centroids were last placed.
    pub inertia_history: Vec<f32>,
}

/// Stateful k-means demo engine.
///
/// Generic over the random source so tests can inject a seeded RNG.
#[derive(Debug, Clone)]
pub struct ClusteringDemo<R = StdRng> {
    config: DemoConfig,
    rng: R,
    positions: Vec<Vec2>,
    labels: Vec<Option<usize>>,
    centroids: Vec<Vec2>,
    iteration: usize,
    running: bool,
    converged: bool,
    finish: Option<FinishReason>,
    history: Vec<f32>,
}

impl ClusteringDemo<StdRng> {
    /// Create an engine seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: DemoConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> ClusteringDemo<R> {
    /// Create an engine that draws from `rng`. `config.seed` is ignored.
    pub fn with_rng(config: DemoConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            positions: Vec::new(),
            labels: Vec::new(),
            centroids: Vec::new(),
            iteration: 0,
            running: false,
            converged: false,
            finish: None,
            history: Vec::new(),
        })
    }

    /// Replace the dataset with `count` fresh points, then reset.
    ///
    /// Centroids are cleared as part of the reset.
    pub fn generate_data(&mut self, count: usize, mode: DataMode) -> Result<()> {
        if count == 0 {
            warn!("generate_data called with count = 0");
            return Err(Error::InvalidArgument {
                name: "count",
                message: "must be at least 1",
            });
        }
        self.positions = data::generate(&mut self.rng, &self.config, count, mode);
        self.labels = vec![None; count];
        self.reset();
        debug!(count, ?mode, "generated dataset");
        Ok(())
    }

    /// Replace the dataset with caller-supplied points, then reset.
    ///
    /// Points are kept as given; they are not clamped into the bounds.
    pub fn load_points(&mut self, points: impl IntoIterator<Item = Vec2>) {
        self.positions = points.into_iter().collect();
        self.labels = vec![None; self.positions.len()];
        self.reset();
    }

    /// Place `k` centroids with the configured [`Init`] strategy
    /// (uniformly inside the bounds by default).
    ///
    /// Starts a fresh run: iteration counter, flags, inertia history and point
    /// assignments are cleared. The dataset is untouched.
    pub fn initialize_centroids(&mut self, k: usize) -> Result<()> {
        self.initialize_centroids_with(k, self.config.init)
    }

    /// Place `k` centroids with an explicit seeding strategy.
    ///
    /// Data-driven strategies fall back to uniform placement when the dataset
    /// is empty.
    pub fn initialize_centroids_with(&mut self, k: usize, init: Init) -> Result<()> {
        if k == 0 {
            warn!("initialize_centroids called with k = 0");
            return Err(Error::InvalidArgument {
                name: "k",
                message: "must be at least 1",
            });
        }
        self.seed(k, init);
        Ok(())
    }

    fn seed(&mut self, k: usize, init: Init) {
        let centroids =
            init::seed_centroids(&mut self.rng, init, &self.positions, &self.config.bounds, k);
        self.set_centroids(centroids);
        debug!(k, ?init, "initialized centroids");
    }

    /// Use caller-chosen starting centroids. Same run-state effects as
    /// [`initialize_centroids`](Self::initialize_centroids).
    pub fn set_centroids(&mut self, centroids: impl IntoIterator<Item = Vec2>) {
        self.centroids = centroids.into_iter().collect();
        self.clear_run_state();
    }

    /// Perform one Lloyd iteration and return whether it converged.
    pub fn step(&mut self) -> bool {
        self.advance().map_or(true, |report| report.converged)
    }

    /// One Lloyd iteration with its full report, or `None` when there is
    /// nothing to cluster (no points or no centroids).
    pub fn step_report(&mut self) -> Option<StepReport> {
        self.advance()
    }

    fn advance(&mut self) -> Option<StepReport> {
        if self.positions.is_empty() || self.centroids.is_empty() {
            debug!(
                points = self.positions.len(),
                centroids = self.centroids.len(),
                "nothing to step"
            );
            return None;
        }

        let changed = lloyd::assign(
            &self.positions,
            &self.centroids,
            Metric::Euclidean,
            &mut self.labels,
        );
        let max_shift = lloyd::update_centroids(&self.positions, &self.labels, &mut self.centroids);
        self.iteration += 1;
        self.converged = max_shift < self.config.convergence_threshold;

        let report = StepReport {
            iteration: self.iteration,
            converged: self.converged,
            max_shift,
            changed,
            inertia: self.compute_inertia(),
        };
        self.history.push(report.inertia);
        debug!(
            iteration = report.iteration,
            changed,
            max_shift,
            inertia = report.inertia,
            converged = report.converged,
            "lloyd step"
        );
        Some(report)
    }

    /// Start a fresh run and return an iterator over its steps.
    ///
    /// See [`start_run`](Self::start_run) for the starting conditions.
    pub fn run(&mut self) -> Run<'_, R> {
        self.start_run();
        Run { demo: self }
    }

    /// Continue from the current centroids and iteration counter.
    ///
    /// See [`resume_run`](Self::resume_run).
    pub fn resume(&mut self) -> Run<'_, R> {
        self.resume_run();
        Run { demo: self }
    }

    /// Seed fresh centroids, zero the iteration counter and set the running flag.
    ///
    /// The run keeps the current `k`, or uses `config.default_k` when there are
    /// no centroids. With an empty dataset the run finishes immediately as
    /// converged.
    pub fn start_run(&mut self) {
        if self.finish_if_empty() {
            return;
        }
        let k = match self.centroids.len() {
            0 => self.config.default_k,
            k => k,
        };
        self.seed(k, self.config.init);
        self.begin();
    }

    /// Set the running flag without reseeding.
    ///
    /// Without centroids this is [`start_run`](Self::start_run). A counter
    /// already at `max_iterations` makes the first tick finish the run.
    pub fn resume_run(&mut self) {
        if self.finish_if_empty() {
            return;
        }
        if self.centroids.is_empty() {
            self.start_run();
            return;
        }
        self.begin();
    }

    fn finish_if_empty(&mut self) -> bool {
        if !self.positions.is_empty() {
            return false;
        }
        self.running = false;
        self.converged = true;
        self.finish = Some(FinishReason::Converged);
        debug!("run requested on an empty dataset");
        true
    }

    fn begin(&mut self) {
        self.running = true;
        self.finish = None;
        debug!(
            k = self.centroids.len(),
            iteration = self.iteration,
            "run started"
        );
    }

    /// Perform the next scheduled iteration of a run.
    ///
    /// Does no work and returns [`RunTick::Idle`] when no run is active. The
    /// tick that ends the run returns [`RunTick::Finished`], carrying the step
    /// it performed if there was one, and clears the running flag.
    pub fn tick(&mut self) -> RunTick {
        if !self.running {
            return RunTick::Idle;
        }
        if self.iteration >= self.config.max_iterations {
            self.finish_run(FinishReason::IterationCap);
            return RunTick::Finished {
                reason: FinishReason::IterationCap,
                report: None,
            };
        }

        let Some(report) = self.advance() else {
            self.finish_run(FinishReason::Converged);
            return RunTick::Finished {
                reason: FinishReason::Converged,
                report: None,
            };
        };

        let reason = if report.converged {
            FinishReason::Converged
        } else if self.iteration >= self.config.max_iterations {
            FinishReason::IterationCap
        } else {
            return RunTick::Stepped(report);
        };
        self.finish_run(reason);
        RunTick::Finished {
            reason,
            report: Some(report),
        }
    }

    /// Clear the running flag. Takes effect before the next tick.
    pub fn stop(&mut self) {
        if self.running {
            self.finish_run(FinishReason::Cancelled);
        }
    }

    fn finish_run(&mut self, reason: FinishReason) {
        self.running = false;
        self.finish = Some(reason);
        info!(
            ?reason,
            iterations = self.iteration,
            inertia = self.compute_inertia(),
            "run finished"
        );
    }

    /// Clear centroids and run state; unassign every point. Keeps the dataset.
    pub fn reset(&mut self) {
        self.centroids.clear();
        self.clear_run_state();
    }

    fn clear_run_state(&mut self) {
        self.iteration = 0;
        self.running = false;
        self.converged = false;
        self.finish = None;
        self.history.clear();
        self.labels.iter_mut().for_each(|l| *l = None);
    }

    /// Sum of squared distances from assigned points to their centroid.
    pub fn compute_inertia(&self) -> f32 {
        lloyd::inertia(&self.positions, &self.labels, &self.centroids)
    }

    /// Inertia after each iteration since centroids were last placed, for a
    /// convergence plot.
    pub fn inertia_history(&self) -> &[f32] {
        &self.history
    }

    /// Mean silhouette of the current assignment, `None` before any assignment.
    pub fn silhouette(&self) -> Option<f32> {
        if self.labels.iter().all(Option::is_none) {
            return None;
        }
        Some(metrics::silhouette_score(
            &self.positions,
            &self.labels,
            Metric::Euclidean,
        ))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions
            .iter()
            .zip(&self.labels)
            .map(|(&position, &cluster)| Point { position, cluster })
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    pub fn centroids(&self) -> &[Vec2] {
        &self.centroids
    }

    /// Number of centroids in the current run.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Result of the last step (or of a run on an empty dataset).
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish
    }

    pub fn status(&self) -> Status {
        if self.running {
            Status::Running
        } else if self.converged {
            Status::Converged
        } else if self.iteration == 0 {
            Status::Ready
        } else {
            Status::Stopped
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Delay a host timer should leave between ticks.
    pub fn step_interval(&self) -> Duration {
        self.config.step_interval()
    }

    pub fn snapshot(&self) -> DemoSnapshot {
        DemoSnapshot {
            points: self.points().collect(),
            centroids: self.centroids.clone(),
            iteration: self.iteration,
            status: self.status(),
            inertia: (self.iteration > 0).then(|| self.compute_inertia()),
            inertia_history: self.history.clone(),
        }
    }
}
