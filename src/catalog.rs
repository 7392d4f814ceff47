//! Product records, ID allocation, and catalog construction.
//!
//! Regeneration replaces the whole catalog but keeps ids moving forward: new
//! products continue from the highest id found in the prior file. A missing
//! prior catalog and an unreadable one both restart at 1, but the two cases
//! are kept distinct so the caller can warn about the latter instead of
//! silently resetting.

use crate::group::ProductGroup;
use crate::parse::slug_to_title;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One catalog record. Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Always 0.0 at generation time; priced by hand afterwards.
    pub price: f64,
    pub description: String,
    pub category: String,
    pub images: Vec<String>,
}

/// What was found at the output path before this run.
#[derive(Debug, Clone, PartialEq)]
pub enum PriorCatalog {
    /// No file at the path.
    Absent,
    /// Parsed fine; ids continue from the highest one found.
    Valid { next_id: u64 },
    /// File exists but could not be read or parsed. Ids restart at 1;
    /// the run continues.
    Unreadable,
}

impl PriorCatalog {
    /// First id to assign in this run.
    pub fn next_id(&self) -> u64 {
        match self {
            PriorCatalog::Valid { next_id } => *next_id,
            PriorCatalog::Absent | PriorCatalog::Unreadable => 1,
        }
    }
}

/// Inspect a prior catalog file for id continuity.
///
/// Records missing an `id` count as 0. An empty array, or one with no object
/// records, starts from 1. Read and parse failures yield
/// [`PriorCatalog::Unreadable`] rather than an error: a broken catalog must
/// not block regeneration.
pub fn read_prior(path: &Path) -> PriorCatalog {
    if !path.exists() {
        return PriorCatalog::Absent;
    }
    let Ok(content) = fs::read_to_string(path) else {
        return PriorCatalog::Unreadable;
    };
    let Ok(value) = serde_json::from_str::<serde_json::Value>(&content) else {
        return PriorCatalog::Unreadable;
    };
    let Some(records) = value.as_array() else {
        return PriorCatalog::Unreadable;
    };

    let ids: Vec<u64> = records
        .iter()
        .filter_map(|r| r.as_object())
        .map(|o| o.get("id").and_then(|v| v.as_u64()).unwrap_or(0))
        .collect();

    match ids.iter().max() {
        Some(&max) => PriorCatalog::Valid { next_id: max + 1 },
        None => PriorCatalog::Valid { next_id: 1 },
    }
}

/// Convert groups into products, assigning contiguous ids from `start_id`.
///
/// The description is the first non-empty caption; when every caption is
/// empty a stock sentence is synthesized from name and category.
pub fn build_products(groups: Vec<ProductGroup>, start_id: u64) -> Vec<Product> {
    groups
        .into_iter()
        .enumerate()
        .map(|(i, group)| {
            let name = slug_to_title(&group.slug);
            let description = group
                .captions
                .iter()
                .find(|c| !c.is_empty())
                .cloned()
                .unwrap_or_else(|| {
                    format!("Product {name} in category {}.", group.category)
                });

            Product {
                id: start_id + i as u64,
                name,
                price: 0.0,
                description,
                category: group.category,
                images: group.images,
            }
        })
        .collect()
}
