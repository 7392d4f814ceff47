//! Filename parsing for the `category__slug__caption` convention.
//!
//! Product images encode their catalog metadata directly in the filename:
//!
//! ```text
//! ropa__bufanda-colorida__detalle-1.jpg   → category=ropa, slug=bufanda-colorida, caption=detalle-1
//! regalos__muneco-tejido__frente.jpg      → category=regalos, slug=muneco-tejido, caption=frente
//! ropa_bufanda_detalle.jpg                → single-underscore fallback
//! photo1.jpg                              → uncategorized, slug=photo1
//! ```
//!
//! Parsing is total: every filename produces a result. Matchers are tried
//! in priority order — double underscore, single underscore, then the
//! uncategorized fallback — stopping at the first that applies.

use std::path::Path;

/// Category assigned to files that don't follow the naming convention.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Result of parsing one image filename.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// First filename segment, or [`UNCATEGORIZED`] if absent/empty.
    pub category: String,
    /// Second filename segment (grouping key), or the full stem as fallback.
    pub slug: String,
    /// Remaining segments joined by single spaces. May be empty.
    pub caption: String,
}

/// Parse a filename into `(category, slug, caption)`.
///
/// - `"ropa__bufanda__detalle-1.jpg"` → category="ropa", slug="bufanda", caption="detalle-1"
/// - `"ropa__bufanda.jpg"` → caption=""
/// - `"ropa_bufanda_detalle.jpg"` → single-underscore fallback, same assignment
/// - `"photo1.jpg"` → category="uncategorized", slug="photo1", caption=""
pub fn parse_filename(filename: &str) -> ParsedName {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let (category, slug, caption) = match_delimited(&stem, "__")
        .or_else(|| match_delimited(&stem, "_"))
        .unwrap_or_else(|| (UNCATEGORIZED.to_string(), stem.trim().to_string(), String::new()));

    ParsedName {
        category: if category.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            category
        },
        slug: if slug.is_empty() { stem } else { slug },
        caption,
    }
}

/// Try splitting a stem on `delim` into (category, slug, caption).
///
/// Returns `None` when the delimiter yields fewer than two segments, so the
/// caller can fall through to the next matcher. Segments are trimmed; the
/// third and later segments are joined by single spaces as the caption.
fn match_delimited(stem: &str, delim: &str) -> Option<(String, String, String)> {
    let parts: Vec<&str> = stem.split(delim).collect();
    if parts.len() < 2 {
        return None;
    }
    let category = parts[0].trim().to_string();
    let slug = parts[1].trim().to_string();
    let caption = parts[2..]
        .iter()
        .map(|p| p.trim())
        .collect::<Vec<_>>()
        .join(" ");
    Some((category, slug, caption))
}

/// Turn a slug into a display name: runs of hyphens/underscores become a
/// single space, then each word is capitalized.
///
/// `"bufanda-colorida"` → `"Bufanda Colorida"`
pub fn slug_to_title(slug: &str) -> String {
    let mut spaced = String::with_capacity(slug.len());
    let mut in_run = false;
    for c in slug.chars() {
        if c == '-' || c == '_' {
            if !in_run {
                spaced.push(' ');
            }
            in_run = true;
        } else {
            spaced.push(c);
            in_run = false;
        }
    }
    title_case(spaced.trim())
}

/// Capitalize the first letter of each word and lowercase the rest.
///
/// A "word" starts after any non-alphabetic character, so hyphens inside
/// categories also introduce capitals: `"sin categoría"` → `"Sin Categoría"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
