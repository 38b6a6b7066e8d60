//! Clustering building blocks on 2D points.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat.
//!
//! **Objective**: Minimize within-cluster sum of squares (inertia, WCSS):
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! Each Lloyd iteration can only lower `J` (or leave it unchanged), which is
//! what makes the step-by-step animation monotone.
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ## Layout
//!
//! - [`lloyd`]: the assign and update kernels, shared by everything else.
//! - [`Kmeans`]: one-shot estimator behind the [`Clustering`] trait.
//! - [`init`]: uniform, random-point and k-means++ seeding.
//! - [`distance`]: Euclidean, Manhattan and cosine metrics.
//! - [`metrics`]: inertia and silhouette.
//!
//! ## Usage
//!
//! ```rust
//! use kmeans_demo::cluster::{Clustering, Kmeans};
//! use kmeans_demo::Vec2;
//!
//! let data = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(0.1, 0.1),
//!     Vec2::new(10.0, 10.0),
//!     Vec2::new(10.1, 10.1),
//! ];
//!
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//! ```

pub mod distance;
pub mod init;
mod kmeans;
pub mod lloyd;
pub mod metrics;
mod traits;

pub use distance::Metric;
pub use init::Init;
pub use kmeans::{Kmeans, KmeansFit};
pub use traits::Clustering;
