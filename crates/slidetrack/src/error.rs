//! Error types for slidetrack.

use std::path::PathBuf;

/// Result type alias for slidetrack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or initializing a track.
///
/// Runtime interaction never fails: dragging past an edge or navigating beyond
/// the first/last slide are ordinary no-ops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The surface has no items to slide between.
    #[error("Track surface has no slide items")]
    NoSlides,

    /// The requested start index does not name an item.
    #[error("Start index {index} is out of range for {len} slides")]
    StartIndexOutOfRange { index: usize, len: usize },

    /// The track has not been initialized yet.
    #[error("Track is not initialized; call init() first")]
    NotInitialized,

    /// A configuration value is outside its valid range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// The configuration document could not be parsed.
    #[error("Track config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("Failed to read track config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration value error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
