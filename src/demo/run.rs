//! Cooperative, cancellable runs.
//!
//! A run never blocks: each call to [`ClusteringDemo::tick`] (or each
//! [`Run::next`]) performs at most one Lloyd iteration and hands control back
//! to the caller, who can render, wait for a timer, or cancel before asking
//! for the next one.

use super::ClusteringDemo;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of one Lloyd iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Iteration counter after this step.
    pub iteration: usize,
    /// Every centroid moved less than the convergence threshold.
    pub converged: bool,
    /// Largest centroid movement in this step.
    pub max_shift: f32,
    /// Number of points whose cluster changed.
    pub changed: usize,
    /// Inertia after the update.
    pub inertia: f32,
}

/// Why the most recent run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Centroids settled, or there was nothing to cluster.
    Converged,
    /// The iteration counter reached `max_iterations`.
    IterationCap,
    /// The running flag was cleared before the run finished.
    Cancelled,
}

/// Result of one [`ClusteringDemo::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunTick {
    /// One iteration ran and the run continues.
    Stepped(StepReport),
    /// The run ended on this tick. `report` is the iteration performed on the
    /// way out, if any: a tick that finds the counter already at the cap, or
    /// nothing to cluster, ends the run without stepping.
    Finished {
        reason: FinishReason,
        report: Option<StepReport>,
    },
    /// No run was active; nothing happened.
    Idle,
}

impl RunTick {
    /// The iteration this tick performed, if any.
    pub fn report(&self) -> Option<&StepReport> {
        match self {
            RunTick::Stepped(report) => Some(report),
            RunTick::Finished { report, .. } => report.as_ref(),
            RunTick::Idle => None,
        }
    }

    pub fn into_report(self) -> Option<StepReport> {
        self.report().copied()
    }

    /// Whether a host timer should schedule another tick.
    pub fn is_stepped(&self) -> bool {
        matches!(self, RunTick::Stepped(_))
    }
}

/// Borrowing iterator over the steps of a run.
///
/// Created by [`ClusteringDemo::run`] and [`ClusteringDemo::resume`]. Dropping it early leaves the running
/// flag set, so a timer-driven host can keep calling
/// [`tick`](ClusteringDemo::tick); call [`cancel`](Run::cancel) to end the run.
pub struct Run<'a, R> {
    pub(super) demo: &'a mut ClusteringDemo<R>,
}

impl<'a, R: Rng> Run<'a, R> {
    /// Read-only view of the engine between steps.
    pub fn demo(&self) -> &ClusteringDemo<R> {
        &*self.demo
    }

    /// Clear the running flag; the next call to `next` returns `None`.
    pub fn cancel(&mut self) {
        self.demo.stop();
    }

    /// Drive the run to its end and return the final report, if any step ran.
    pub fn finish(self) -> Option<StepReport> {
        self.last()
    }
}

impl<'a, R: Rng> Iterator for Run<'a, R> {
    type Item = StepReport;

    fn next(&mut self) -> Option<StepReport> {
        self.demo.tick().into_report()
    }
}
