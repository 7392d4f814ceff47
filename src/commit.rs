//! Backup and atomic-enough catalog writing.
//!
//! Before overwriting an existing catalog, a copy goes to the archive
//! directory under `<basename>.bak.<YYYYMMDDHHMMSS>` (local clock, second
//! precision). The write itself replaces the file wholesale; there is no
//! partial-update path. Filesystem failures here are fatal and propagate —
//! unlike a broken prior catalog, a failed backup or write has no safe
//! fallback.

use crate::catalog::Product;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a commit did, for reporting.
#[derive(Debug)]
pub struct CommitReport {
    /// Path of the timestamped backup, when a prior catalog existed.
    pub backup: Option<PathBuf>,
    /// Number of products written.
    pub count: usize,
}

/// Back up any existing file at `output`, then write `products` as pretty
/// JSON.
///
/// serde_json writes non-ASCII characters literally, so accented catalog
/// text survives as-is. Key order per record is fixed: id, name, price,
/// description, category, images.
pub fn commit(
    products: &[Product],
    output: &Path,
    archive_dir: &Path,
) -> Result<CommitReport, CommitError> {
    let backup = if output.exists() {
        Some(back_up(output, archive_dir)?)
    } else {
        None
    };

    let json = serde_json::to_string_pretty(products)?;
    fs::write(output, json)?;

    Ok(CommitReport {
        backup,
        count: products.len(),
    })
}

fn back_up(output: &Path, archive_dir: &Path) -> Result<PathBuf, std::io::Error> {
    fs::create_dir_all(archive_dir)?;

    let basename = output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "catalog.json".to_string());
    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    let backup_path = archive_dir.join(format!("{basename}.bak.{timestamp}"));

    fs::copy(output, &backup_path)?;
    Ok(backup_path)
}
