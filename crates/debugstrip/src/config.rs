// crates/debugstrip/src/config.rs

use debug_marker::{DEBUG_MARKER, DEBUG_TOKEN, TARGET_PATH};
use std::path::PathBuf;

/// The three recognized options of a strip run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripConfig {
    /// File rewritten in place.
    pub target_path: PathBuf,
    /// Exact line at which the kept section ends.
    pub marker: String,
    /// Lines containing this are dropped from the kept section.
    pub forbidden: String,
}

impl StripConfig {
    /// Default marker and token, applied to a different file.
    pub fn for_target(target_path: impl Into<PathBuf>) -> Self {
        Self {
            target_path: target_path.into(),
            ..Self::default()
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from(TARGET_PATH),
            marker: DEBUG_MARKER.to_string(),
            forbidden: DEBUG_TOKEN.to_string(),
        }
    }
}
