//! Product submissions
//!
//! Products accept the loosest input of all entities: categories may be a
//! list or a single `"Top > Middle > Leaf"` path, images may be URLs,
//! objects, or a bare thumbnail id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::dto::TermRefInput;
use crate::domain::entities::CommerceFields;
use crate::domain::value_objects::LegacyScalar;

/// Separator of hierarchical category paths
pub const CATEGORY_PATH_SEPARATOR: &str = " > ";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub id: Option<u32>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub comment_status: Option<String>,
    pub ping_status: Option<String>,
    /// `simple`, `grouped`, `external` or `variable`
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub status: Option<String>,
    pub password: Option<String>,
    pub categories: Option<CategoriesInput>,
    pub attributes: Vec<AttributeInput>,
    pub default_attributes: Vec<AttributeInput>,
    pub tags: Vec<TermRefInput>,
    pub images: Option<ImagesInput>,
    #[serde(flatten)]
    pub commerce: CommerceFields,
}

impl ProductInput {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoriesInput {
    /// `"Top > Middle > Leaf"`; each level becomes the parent of the next
    Path(String),
    List(Vec<TermRefInput>),
}

impl CategoriesInput {
    /// Names along a category path, root first. A path without the
    /// separator is a single root category.
    pub fn path_segments(path: &str) -> Vec<&str> {
        path.split(CATEGORY_PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagesInput {
    /// Id of an image already on the target site
    Thumbnail(u32),
    List(Vec<ImageInput>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageInput {
    Url(String),
    Image(ImageObject),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageObject {
    pub id: Option<u32>,
    pub title: Option<String>,
    pub url: Option<String>,
}

/// A product attribute; `name` and `value` are required
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeInput {
    pub name: Option<String>,
    pub value: Option<String>,
    pub position: Option<LegacyScalar>,
    pub is_visible: Option<LegacyScalar>,
    pub is_variation: Option<LegacyScalar>,
}

impl AttributeInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}
