//! Term entity - Taxonomy entries (tags, categories, product taxonomies, menus)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TermId;

/// Taxonomy a term belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    Tag,
    Category,
    ProductCategory,
    ProductAttribute,
    NavMenu,
}

impl TermKind {
    /// Order in which term partitions are written. Terms must precede
    /// everything that references them by name.
    pub const EMISSION_ORDER: [TermKind; 5] = [
        TermKind::Tag,
        TermKind::Category,
        TermKind::ProductCategory,
        TermKind::ProductAttribute,
        TermKind::NavMenu,
    ];

    /// Human-readable name used in error messages and logs
    pub fn entity_name(&self) -> &'static str {
        match self {
            TermKind::Tag => "tag",
            TermKind::Category => "category",
            TermKind::ProductCategory => "product category",
            TermKind::ProductAttribute => "product attribute",
            TermKind::NavMenu => "menu",
        }
    }
}

/// Parent of a term. Hierarchical category paths link children to the
/// parent's slug; explicit submissions may use a numeric id instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TermParent {
    /// No parent, written as the sentinel `0`
    #[default]
    Root,
    Id(u32),
    Slug(String),
}

impl TermParent {
    pub fn is_root(&self) -> bool {
        matches!(self, TermParent::Root | TermParent::Id(0))
    }
}

impl fmt::Display for TermParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermParent::Root => f.write_str("0"),
            TermParent::Id(id) => write!(f, "{}", id),
            TermParent::Slug(slug) => f.write_str(slug),
        }
    }
}

/// Identity of a term within its taxonomy
///
/// Names identify terms, except product attributes, which are identified by
/// their `(name, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermKey {
    pub kind: TermKind,
    pub name: String,
    pub value: Option<String>,
}

/// A staged taxonomy term
#[derive(Debug, Clone)]
pub struct Term {
    pub id: TermId,
    pub kind: TermKind,
    /// Display name; for product attributes this is the attribute name (`Color`)
    pub name: String,
    pub slug: String,
    pub parent: TermParent,
    pub description: String,
    /// Attribute value (`Red`), product attributes only
    pub value: Option<String>,
    /// Attribute taxonomy (`pa_color`), product attributes only
    pub taxonomy: Option<String>,
}

impl Term {
    pub fn key(&self) -> TermKey {
        TermKey {
            kind: self.kind,
            name: self.name.clone(),
            value: match self.kind {
                TermKind::ProductAttribute => self.value.clone(),
                _ => None,
            },
        }
    }

    /// Label written as the term name: the value for attributes, else the name
    pub fn label(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.name)
    }
}

/// How an item refers to a term it is classified under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRef {
    pub name: String,
    pub slug: String,
}
