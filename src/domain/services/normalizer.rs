//! Slug and taxonomy token normalization
//!
//! Both transforms lower-case the input, treat every character outside
//! `[a-z0-9]` as a space and collapse each run of spaces into one separator.
//! Leading and trailing runs are kept, so `"Hello!"` becomes `"hello-"`.

use std::fmt::Display;

/// Prefix of WooCommerce product attribute taxonomies.
pub const ATTRIBUTE_TAXONOMY_PREFIX: &str = "pa_";

/// URL-safe slug, runs joined with `-`.
pub fn slug(name: impl Display) -> String {
    normalize(&name.to_string(), '-')
}

/// Taxonomy-safe token, runs joined with `_`.
pub fn taxonomy_token(name: impl Display) -> String {
    normalize(&name.to_string(), '_')
}

/// Attribute taxonomy for a human-readable attribute name (`Color` -> `pa_color`).
///
/// Names that already carry the `pa_` prefix are taken as-is.
pub fn attribute_taxonomy(name: &str) -> String {
    if name.starts_with(ATTRIBUTE_TAXONOMY_PREFIX) {
        name.to_string()
    } else {
        format!("{}{}", ATTRIBUTE_TAXONOMY_PREFIX, taxonomy_token(name))
    }
}

fn normalize(name: &str, separator: char) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_gap = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if in_gap {
                out.push(separator);
                in_gap = false;
            }
            out.push(c);
        } else {
            in_gap = true;
        }
    }
    if in_gap {
        out.push(separator);
    }
    out
}
