//! Term submissions - Loosely-shaped input for taxonomy terms and menus

use serde::{Deserialize, Serialize};

use crate::domain::entities::TermParent;

/// A taxonomy term as submitted by the caller
///
/// Only `name` is required (plus `value` for product attributes); everything
/// else is derived when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TermInput {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(alias = "parent_id")]
    pub parent: Option<ParentRef>,
    pub description: Option<String>,
    /// Product attributes only
    pub value: Option<String>,
    /// Product attributes only, defaults to `pa_<name token>`
    pub taxonomy: Option<String>,
}

impl TermInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_parent(mut self, parent: ParentRef) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Parent given either as a numeric id or as the parent's slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentRef {
    Id(u32),
    Slug(String),
}

impl From<ParentRef> for TermParent {
    fn from(parent: ParentRef) -> Self {
        match parent {
            ParentRef::Id(0) => TermParent::Root,
            ParentRef::Id(id) => TermParent::Id(id),
            ParentRef::Slug(slug) if slug.is_empty() || slug == "0" => TermParent::Root,
            ParentRef::Slug(slug) => TermParent::Slug(slug),
        }
    }
}

/// A term reference inside a post or product: a bare name or a full term
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermRefInput {
    Name(String),
    Term(TermInput),
}

impl From<TermRefInput> for TermInput {
    fn from(input: TermRefInput) -> Self {
        match input {
            TermRefInput::Name(name) => TermInput::named(name),
            TermRefInput::Term(term) => term,
        }
    }
}

impl From<&str> for TermRefInput {
    fn from(name: &str) -> Self {
        TermRefInput::Name(name.to_string())
    }
}

/// A navigation menu
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuInput {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl MenuInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl From<MenuInput> for TermInput {
    fn from(menu: MenuInput) -> Self {
        TermInput {
            id: menu.id,
            name: menu.name,
            slug: menu.slug,
            ..TermInput::default()
        }
    }
}
