//! Feed manifest - A whole export described as one JSON document

use serde::{Deserialize, Serialize};

use crate::application::dto::{
    AttachmentInput, MenuInput, MenuItemInput, PostInput, ProductInput, TermInput, UserInput,
};
use crate::domain::value_objects::SiteInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedManifest {
    pub site: SiteInfo,
    #[serde(default)]
    pub users: Vec<UserInput>,
    #[serde(default)]
    pub tags: Vec<TermInput>,
    #[serde(default)]
    pub categories: Vec<TermInput>,
    #[serde(default)]
    pub product_categories: Vec<TermInput>,
    #[serde(default)]
    pub product_attributes: Vec<TermInput>,
    #[serde(default)]
    pub menus: Vec<MenuInput>,
    #[serde(default)]
    pub posts: Vec<PostInput>,
    #[serde(default)]
    pub pages: Vec<PostInput>,
    #[serde(default)]
    pub products: Vec<ProductInput>,
    #[serde(default)]
    pub menu_items: Vec<MenuItemInput>,
    #[serde(default)]
    pub attachments: Vec<AttachmentInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_sections_are_optional() {
        let manifest: FeedManifest = serde_json::from_str(
            r#"{"site": {"name": "Demo", "url": "https://example.test"},
                "posts": [{"title": "Hello", "url": "https://example.test/hello"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.posts.len(), 1);
        assert!(manifest.products.is_empty());
        assert_eq!(manifest.site.name, "Demo");
    }
}
