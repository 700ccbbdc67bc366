use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::model::BackupConfig;

/// Linking export of the newest settled backup.
///
/// Backups are dated subdirectories of `backups.dir`, so name order is age
/// order. The newest `skip_newest` are passed over. The export inside the
/// chosen backup is named `<dir name>_<file_name>`.
pub fn recent_linking_file(backups: &BackupConfig) -> Result<PathBuf> {
    let mut dirs = Vec::new();
    let entries = fs::read_dir(&backups.dir)
        .with_context(|| format!("read backup dir {}", backups.dir.display()))?;
    for entry in entries {
        let entry = entry.context("read backup dir entry")?;
        let file_type = entry.file_type().context("read backup entry type")?;
        if file_type.is_dir() {
            dirs.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    dirs.sort();

    if dirs.len() <= backups.skip_newest {
        anyhow::bail!(
            "not enough backups in {} (found {}, skipping newest {})",
            backups.dir.display(),
            dirs.len(),
            backups.skip_newest
        );
    }
    let name = &dirs[dirs.len() - 1 - backups.skip_newest];
    let path = backups
        .dir
        .join(name)
        .join(format!("{}_{}", name, backups.file_name));
    debug!(backup = %name, path = %path.display(), "selected recent backup");

    if !path.is_file() {
        anyhow::bail!("linking export missing from backup: {}", path.display());
    }
    Ok(path)
}

#[cfg(test)]
#[path = "../tests/source/recent_tests.rs"]
mod tests;
