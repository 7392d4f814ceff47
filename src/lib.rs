//! # catalog-gen
//!
//! Generate a product catalog JSON file from a directory of image files.
//! Your filesystem is the data source: each image filename encodes a
//! category, a product slug, and an optional caption, and files sharing a
//! slug merge into one product with multiple images.
//!
//! # Architecture: One Linear Pipeline
//!
//! A single batch pass, no stages to cache or resume:
//!
//! ```text
//! 1. Scan     img/            →  sorted image filenames
//! 2. Group    filenames       →  products keyed by slug (first-seen order)
//! 3. Build    groups + prior  →  product records with continued ids
//! 4. Commit   products        →  archive/ backup + products.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`parse`] | `category__slug__caption` filename convention, tiered fallbacks, name synthesis |
//! | [`scan`] | Flat directory listing filtered to recognized image extensions |
//! | [`group`] | Slug-keyed merging with first-seen insertion order |
//! | [`catalog`] | Product records, prior-catalog id continuity, catalog construction |
//! | [`commit`] | Timestamped backup of the prior catalog, pretty-JSON write |
//! | [`generate`] | Pipeline orchestration and run outcomes |
//! | [`output`] | CLI output formatting — pure format functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Parsing Is Total
//!
//! Every filename parses. Files outside the convention land in an
//! "uncategorized" bucket with the stem as slug rather than being skipped —
//! an operator dropping a stray `photo1.jpg` into `img/` still sees it in
//! the catalog and can rename it from there.
//!
//! ## Id Continuity Over Id Stability
//!
//! Regeneration replaces the whole catalog, but new ids continue from the
//! highest id in the prior file rather than restarting. Ids stay unique
//! across the catalog's lifetime, which is what the consuming cart
//! persistence needs; per-product id stability across runs is explicitly
//! not promised.
//!
//! ## A Broken Prior Catalog Never Blocks a Run
//!
//! The prior catalog is read only for id allocation. The three cases —
//! absent, valid, unreadable — are modeled explicitly
//! ([`catalog::PriorCatalog`]); unreadable warns and restarts ids at 1
//! instead of aborting, since the regenerated file is about to replace the
//! broken one anyway.
//!
//! ## Backup Before Overwrite
//!
//! An existing catalog is copied to `archive/<name>.bak.<timestamp>` before
//! the write. The tool is meant for manual, one-at-a-time runs; there is no
//! locking against concurrent invocations.

pub mod catalog;
pub mod commit;
pub mod generate;
pub mod group;
pub mod output;
pub mod parse;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
