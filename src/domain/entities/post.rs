//! Post-like entities - Shared shape of posts, pages, products, menu items and attachments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::TermRef;
use crate::domain::value_objects::PostId;

/// Fields every post-like record carries
#[derive(Debug, Clone)]
pub struct PostCore {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    /// Canonical URL
    pub url: String,
    pub date: DateTime<Utc>,
    /// Author login name, not checked against the staged users
    pub author: String,
    pub content: String,
    pub summary: String,
    pub status: String,
    pub comment_status: String,
    pub ping_status: String,
    pub password: String,
}

impl PostCore {
    /// `pubDate` form, e.g. `Tue, 15 Nov 1994 08:12:31 GMT`
    pub fn pub_date(&self) -> String {
        self.date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }

    /// `wp:post_date` form, e.g. `1994-11-15T08:12:31.000Z`
    pub fn post_date(&self) -> String {
        self.date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    #[default]
    Post,
    Page,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Post => "post",
            PostType::Page => "page",
        }
    }
}

/// A staged blog post or page
#[derive(Debug, Clone)]
pub struct Post {
    pub core: PostCore,
    pub post_type: PostType,
    pub categories: Vec<TermRef>,
    pub tags: Vec<TermRef>,
    /// Preloaded image used as the thumbnail
    pub thumbnail_id: Option<u32>,
}
