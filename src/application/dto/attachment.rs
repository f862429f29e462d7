//! Attachment submissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentInput {
    pub id: Option<u32>,
    /// Absolute URL of the file, required
    pub url: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub file: Option<String>,
    /// Defaults to the file name in `url`
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub post_id: Option<u32>,
    pub comment_status: Option<String>,
    pub ping_status: Option<String>,
    pub meta_data: Option<String>,
    pub attachment_type: Option<String>,
}

impl AttachmentInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}
