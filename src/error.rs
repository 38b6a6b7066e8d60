use thiserror::Error;

/// Errors returned by the demo engine and the clustering routines in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid argument or configuration value.
    #[error("invalid argument {name}: {message}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Configuration could not be parsed.
    #[error("config: {0}")]
    Config(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
