//! Menu item entity - Navigation entries attached to a named menu

use crate::domain::entities::PostCore;

/// A staged navigation menu item
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub core: PostCore,
    pub guid: String,
    /// `wp:post_parent`
    pub parent: u32,
    pub menu_order: i64,
    pub menu_name: String,
    pub menu_slug: String,
    pub item_type: String,
    pub item_parent: u32,
    /// Id of the object the item points at, e.g. a product category
    pub object_id: Option<u32>,
    /// Kind of `object_id`, usually `product_cat`
    pub object: Option<String>,
    pub target: String,
    pub classes: Vec<String>,
    pub xfn: String,
    pub item_url: String,
}
