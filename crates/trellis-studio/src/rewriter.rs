//! Overwrites a layout file with its re-formatted text, keeping a
//! timestamped copy of the previous version.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an existing backup-location block at the head of a file.
static BACKUP_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)# This file has been automatically re-formatted\..*?##").expect("valid pattern")
});

/// Where archived copies go when no directory is given.
pub fn default_backup_dir(original: &Path) -> PathBuf {
    match dirs::data_local_dir() {
        Some(data) => data.join("trellis"),
        None => original.parent().unwrap_or(Path::new(".")).join(".trellis-archive"),
    }
}

/// Copy `original` into `backup_dir`, then replace it with `formatted`
/// headed by a comment naming `backup_dir`. Returns the archive path.
pub fn overwrite_original(original: &Path, formatted: &str, backup_dir: &Path) -> Result<PathBuf> {
    let archived = archive(original, backup_dir)?;
    let text = with_backup_comment(formatted, backup_dir);
    fs::write(original, text)
        .with_context(|| format!("Failed to overwrite {}", original.display()))?;
    log::info!("re-formatted {}, previous version at {}", original.display(), archived.display());
    Ok(archived)
}

fn archive(original: &Path, backup_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(backup_dir)
        .with_context(|| format!("Failed to create {}", backup_dir.display()))?;

    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let mut target = backup_dir.join(format!("archived_input-{stamp}.txt"));
    let mut n = 1;
    while target.exists() {
        target = backup_dir.join(format!("archived_input-{stamp}-{n}.txt"));
        n += 1;
    }

    fs::copy(original, &target).with_context(|| {
        format!("Failed to back up {} to {}", original.display(), target.display())
    })?;
    Ok(target)
}

/// Head `text` with the backup-location block, replacing an earlier one.
pub fn with_backup_comment(text: &str, backup_dir: &Path) -> String {
    let block = format!(
        "# This file has been automatically re-formatted.\n\
         # Previous versions can be found here:\n\
         # {}\n\
         ##",
        backup_dir.display()
    );
    if BACKUP_BLOCK.is_match(text) {
        BACKUP_BLOCK.replace(text, regex::NoExpand(&block)).into_owned()
    } else {
        format!("{block}\n{text}")
    }
}
