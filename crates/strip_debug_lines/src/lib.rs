// crates/strip_debug_lines/src/lib.rs

//! Byte-level stripping of a debug section from source text.
//!
//! Everything from the marker line onward is discarded, and any remaining
//! line containing the forbidden token is removed. The file system is not
//! touched here; see the `debugstrip` crate for the in-place rewrite.

mod error;
mod lines;

pub use error::{Result, StripError};
pub use lines::{contains_bytes, join_lines, split_lines};

/// Line counts for one strip run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StripReport {
    /// Lines in the input document.
    pub lines_read: usize,
    /// Zero-based index of the marker line.
    pub marker_index: usize,
    /// The marker line plus everything after it.
    pub dropped_after_marker: usize,
    /// Pre-marker lines removed for containing the forbidden token.
    pub filtered: usize,
    /// Lines written to the output.
    pub kept: usize,
}

/// Returns the index of the first line exactly equal to `marker`.
pub fn find_marker(lines: &[&[u8]], marker: &[u8]) -> Result<usize> {
    lines
        .iter()
        .position(|line| *line == marker)
        .ok_or_else(|| StripError::marker_not_found(marker))
}

/// Strips the debug section from `content` and returns the new file bytes.
///
/// Lines before the first exact `marker` line are kept unless they contain
/// `forbidden`; survivors are joined with `\n` and no trailing newline.
pub fn strip_debug_section(content: &[u8], marker: &[u8], forbidden: &[u8]) -> Result<Vec<u8>> {
    strip_debug_section_with_report(content, marker, forbidden).map(|(output, _)| output)
}

/// Same as [`strip_debug_section`], also returning the line counts.
pub fn strip_debug_section_with_report(
    content: &[u8],
    marker: &[u8],
    forbidden: &[u8],
) -> Result<(Vec<u8>, StripReport)> {
    let lines = split_lines(content);
    let marker_index = find_marker(&lines, marker)?;
    log::debug!("Marker found at line {} of {}", marker_index + 1, lines.len());

    let kept: Vec<&[u8]> = lines[..marker_index]
        .iter()
        .copied()
        .filter(|line| !contains_bytes(line, forbidden))
        .collect();

    let report = StripReport {
        lines_read: lines.len(),
        marker_index,
        dropped_after_marker: lines.len() - marker_index,
        filtered: marker_index - kept.len(),
        kept: kept.len(),
    };
    Ok((join_lines(&kept), report))
}
