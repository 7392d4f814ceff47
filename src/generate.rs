//! The full catalog generation pipeline: list → parse/group → build → commit.
//!
//! One synchronous pass with no retries. Expected empty-input conditions
//! (missing image directory, no recognized images) are outcomes, not errors:
//! the run reports them and exits cleanly without touching the output file.
//! Only filesystem failures during listing, backup, or write surface as
//! errors.

use crate::catalog::{self, PriorCatalog};
use crate::commit::{self, CommitError, CommitReport};
use crate::{group, scan};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Commit(#[from] CommitError),
}

/// How a run ended. The first two variants write nothing.
#[derive(Debug)]
pub enum Outcome {
    /// The image directory does not exist.
    MissingImageDir(PathBuf),
    /// The directory exists but holds no recognized image files.
    NoImages(PathBuf),
    /// Catalog written. `ids_reset` is set when a prior catalog existed but
    /// was unreadable, so ids restarted at 1.
    Written {
        report: CommitReport,
        ids_reset: bool,
    },
}

/// Run the pipeline: regenerate the catalog at `output` from the images in
/// `img_dir`, archiving any prior catalog into `archive_dir` first.
pub fn generate(
    img_dir: &Path,
    output: &Path,
    archive_dir: &Path,
) -> Result<Outcome, GenerateError> {
    if !img_dir.is_dir() {
        return Ok(Outcome::MissingImageDir(img_dir.to_path_buf()));
    }

    let files = scan::list_images(img_dir)?;
    if files.is_empty() {
        return Ok(Outcome::NoImages(img_dir.to_path_buf()));
    }

    // Relative image paths start with the directory's own name, the way the
    // site consuming the catalog references them.
    let dir_name = img_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let groups = group::group_files(&files, &dir_name);

    let prior = catalog::read_prior(output);
    let ids_reset = prior == PriorCatalog::Unreadable;
    let products = catalog::build_products(groups, prior.next_id());

    let report = commit::commit(&products, output, archive_dir)?;
    Ok(Outcome::Written { report, ids_reset })
}
