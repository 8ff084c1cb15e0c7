//! Static asset copying.

use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Copy every file under `from` into `to`, keeping relative paths.
/// A missing source directory copies nothing. Returns the file count.
pub fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    if !from.is_dir() {
        tracing::debug!(dir = %from.display(), "no assets directory, skipping");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry.with_context(|| format!("failed to walk {}", from.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(from)
            .context("asset outside of its directory")?;
        let target = to.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::copy(entry.path(), &target).with_context(|| {
            format!(
                "failed to copy {} to {}",
                entry.path().display(),
                target.display()
            )
        })?;
        tracing::trace!(asset = %relative.display(), "copied");
        copied += 1;
    }

    Ok(copied)
}
