// crates/debugstrip/src/lib.rs

use std::fs;

use strip_debug_lines::strip_debug_section_with_report;
pub use strip_debug_lines::{Result, StripError, StripReport};

mod config;
mod replace;

pub use config::StripConfig;
pub use replace::replace_file;

/// Strips the debug section from the configured file and rewrites it.
///
/// The file is read once, filtered in memory and then atomically replaced.
/// A read failure or a missing marker returns before anything is written.
pub fn strip_file(config: &StripConfig) -> Result<StripReport> {
    let path = &config.target_path;
    log::debug!("Using config: {:?}", config);

    let content = fs::read(path).map_err(|source| StripError::Read {
        path: path.clone(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", content.len(), path.display());

    let (output, report) = strip_debug_section_with_report(
        &content,
        config.marker.as_bytes(),
        config.forbidden.as_bytes(),
    )?;

    replace_file(path, &output).map_err(|source| StripError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!(
        "Kept {} line(s), filtered {}, dropped {} from the marker on",
        report.kept,
        report.filtered,
        report.dropped_after_marker
    );

    Ok(report)
}
