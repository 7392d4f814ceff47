//! Directory listing for the image source folder.
//!
//! The catalog is generated from a single flat directory: every entry whose
//! extension matches a recognized image format becomes a candidate, everything
//! else is ignored. Listing order is lexicographic by filename so re-runs over
//! the same directory always see the same sequence.

use std::fs;
use std::io;
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// List image filenames in `dir`, sorted lexicographically.
///
/// Only plain files with a recognized extension (case-insensitive) are
/// returned; subdirectories and other files are skipped. The caller decides
/// what an empty result means.
pub fn list_images(dir: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| is_image(name))
        .collect();

    names.sort();
    Ok(names)
}

fn is_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}
