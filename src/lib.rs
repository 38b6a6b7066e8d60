//! Step-wise k-means for interactive clustering tutorials.
//!
//! `kmeans_demo` owns the state behind a "watch k-means work" widget: it
//! generates a synthetic 2D dataset, places centroids, advances Lloyd's
//! algorithm one iteration at a time (or as a cancellable run a UI timer can
//! drive), and reports iteration count, inertia and convergence.
//!
//! - [`demo`]: the stateful [`ClusteringDemo`] engine.
//! - [`cluster`]: Lloyd kernels, distance metrics, quality metrics, and a
//!   one-shot [`Kmeans`] estimator.
//! - [`render`]: the [`Renderer`] seam and an SVG implementation.
//! - [`config`]: [`DemoConfig`].

#![forbid(unsafe_code)]

pub mod cluster;
pub mod config;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod render;

pub use cluster::{Clustering, Init, Kmeans, KmeansFit, Metric};
pub use config::DemoConfig;
pub use demo::{
    ClusteringDemo, DataMode, DemoSnapshot, FinishReason, Point, Run, RunTick, Status, StepReport,
};
pub use error::{Error, Result};
pub use geometry::{Bounds, Vec2};
pub use render::{Renderer, SvgRenderer};
