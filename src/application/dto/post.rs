//! Post and page submissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::dto::TermRefInput;
use crate::domain::entities::PostType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostInput {
    pub id: Option<u32>,
    pub url: Option<String>,
    /// Defaults to the staging time
    pub date: Option<DateTime<Utc>>,
    pub title: Option<String>,
    /// Defaults to the title's slug
    pub slug: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub comment_status: Option<String>,
    pub ping_status: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub post_type: Option<PostType>,
    pub password: Option<String>,
    pub categories: Vec<TermRefInput>,
    pub tags: Vec<TermRefInput>,
    /// Preloaded image on the target site, used as thumbnail
    #[serde(alias = "imageID")]
    pub image_id: Option<u32>,
}

impl PostInput {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}
