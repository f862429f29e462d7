//! Menu item submissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemInput {
    pub id: Option<u32>,
    /// Defaults to the slug of the id
    pub title: Option<String>,
    pub url: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub guid: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<String>,
    pub parent: Option<u32>,
    pub menu_order: Option<i64>,
    pub password: Option<String>,
    /// Menu the item belongs to; staged as a menu term if new
    pub menu_name: Option<String>,
    pub menu_item_object_id: Option<u32>,
    pub menu_item_object: Option<String>,
    pub menu_item_type: Option<String>,
    pub menu_item_menu_item_parent: Option<u32>,
    pub menu_item_target: Option<String>,
    pub menu_item_classes: Vec<String>,
    pub menu_item_xfn: Option<String>,
    pub menu_item_url: Option<String>,
}

impl MenuItemInput {
    pub fn new(menu_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            menu_name: Some(menu_name.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
