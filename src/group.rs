//! Grouping of parsed image files into products.
//!
//! Files sharing a slug (case-insensitive) belong to the same product. The
//! group order follows the first occurrence of each slug in the file listing,
//! kept stable with an explicit ordered map: a `Vec` of groups plus a lookup
//! from slug key to index. Plain hash map iteration order would not do.

use crate::parse::{self, parse_filename};
use std::collections::HashMap;

/// All files collected under one slug key.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGroup {
    /// Title-cased category from the first file seen for this slug.
    pub category: String,
    /// Slug with the original casing of the first file seen for this key.
    pub slug: String,
    /// Relative image paths, in file listing order.
    pub images: Vec<String>,
    /// Captions parallel to `images`; entries may be empty.
    pub captions: Vec<String>,
}

/// Fold a sorted file listing into product groups, preserving first-seen
/// slug order.
///
/// `img_dir_name` prefixes every relative path (forward slashes), so entries
/// read `img/ropa__bufanda__detalle-1.jpg`.
///
/// A later file whose category differs from an earlier file with the same
/// slug does not overwrite the group's category: first write wins.
pub fn group_files(files: &[String], img_dir_name: &str) -> Vec<ProductGroup> {
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for file in files {
        let parsed = parse_filename(file);
        let key = parsed.slug.to_lowercase();

        let rel = if img_dir_name.is_empty() {
            file.clone()
        } else {
            format!("{img_dir_name}/{file}")
        };

        let idx = match index.get(&key) {
            Some(&i) => i,
            None => {
                groups.push(ProductGroup {
                    category: parse::title_case(&parsed.category),
                    slug: parsed.slug.clone(),
                    images: Vec::new(),
                    captions: Vec::new(),
                });
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };

        groups[idx].images.push(rel);
        groups[idx].captions.push(parsed.caption);
    }

    groups
}
