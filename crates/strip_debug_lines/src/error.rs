// crates/strip_debug_lines/src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a strip run. None of them are retried.
#[derive(Debug, Error)]
pub enum StripError {
    /// The target could not be read; nothing was written.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The filtered content could not be written back.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No line is exactly equal to the marker.
    #[error("marker line '{marker}' not found")]
    MarkerNotFound { marker: String },
}

impl StripError {
    pub fn marker_not_found(marker: &[u8]) -> Self {
        StripError::MarkerNotFound {
            marker: String::from_utf8_lossy(marker).into_owned(),
        }
    }
}

/// Result type for strip operations
pub type Result<T> = std::result::Result<T, StripError>;
