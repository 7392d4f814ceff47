//! Shared test utilities for the catalog-gen test suite.
//!
//! Fixtures are built on the fly in temp directories: an `img/` subdirectory
//! with placeholder image files (the pipeline never decodes pixels, only
//! names), plus helpers to run the pipeline against the standard layout and
//! read the result back.

use std::fs;
use tempfile::TempDir;

use crate::catalog::Product;
use crate::generate::{self, GenerateError, Outcome};

/// Create a temp project root with an `img/` directory holding the given
/// filenames as placeholder files.
pub fn setup_img_dir(filenames: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let img = tmp.path().join("img");
    fs::create_dir_all(&img).unwrap();
    for name in filenames {
        fs::write(img.join(name), "fake image").unwrap();
    }
    tmp
}

/// Run the pipeline with the standard layout: `img/`, `products.json`,
/// `archive/`, all under the fixture root.
pub fn run(tmp: &TempDir) -> Result<Outcome, GenerateError> {
    generate::generate(
        &tmp.path().join("img"),
        &tmp.path().join("products.json"),
        &tmp.path().join("archive"),
    )
}

/// Read the generated catalog back as typed products. Panics on a missing
/// or malformed file — tests calling this expect a successful write.
pub fn read_catalog(tmp: &TempDir) -> Vec<Product> {
    let path = tmp.path().join("products.json");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("malformed catalog at {}: {e}", path.display()))
}

/// Find a product by name. Panics with the available names on a miss.
pub fn find_product<'a>(products: &'a [Product], name: &str) -> &'a Product {
    products.iter().find(|p| p.name == name).unwrap_or_else(|| {
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        panic!("product '{name}' not found. Available: {names:?}")
    })
}

/// Filenames of all backups in the fixture's archive directory, sorted.
pub fn archive_entries(tmp: &TempDir) -> Vec<String> {
    let archive = tmp.path().join("archive");
    if !archive.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(&archive)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
