// crates/debugstrip/src/replace.rs

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the contents of `path` by writing a sibling temporary file and
/// renaming it over the original. On failure the original is left as it was.
///
/// Symlinks are resolved first so the file they point at is the one replaced.
/// A file with other hard links is rewritten in place instead, since a rename
/// would detach it from them.
pub fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let metadata = fs::metadata(&target)?;

    if has_other_links(&metadata) {
        log::debug!("{} has other hard links; rewriting in place", target.display());
        return fs::write(&target, contents);
    }

    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;

    if let Err(err) = fs::set_permissions(temp.path(), metadata.permissions()) {
        log::debug!("Could not carry permissions over to {}: {}", temp.path().display(), err);
    }

    log::debug!("Renaming {} over {}", temp.path().display(), target.display());
    temp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(unix)]
fn has_other_links(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_metadata: &fs::Metadata) -> bool {
    false
}
