// crates/debug_marker/src/lib.rs

//! Fixed values shared by the debug-stripping tool‑chain.

/// File rewritten by `debugstrip`, relative to the working directory.
pub const TARGET_PATH: &str = "msgpack.nvgt";

/// Sentinel line. It and everything after it are discarded.
pub const DEBUG_MARKER: &str = "/// BEGIN DEBUG ///";

/// Any line containing this token is removed from the kept section.
pub const DEBUG_TOKEN: &str = "dbgout";
