//! Attachment entity - Media files referenced by posts and products

use crate::domain::entities::PostCore;

/// Attachment type that marks images imported for products
pub const PRODUCT_IMAGE: &str = "product_image";

/// A staged media attachment
#[derive(Debug, Clone)]
pub struct Attachment {
    /// `core.summary` holds the description; `core.status` is always `inherit`
    pub core: PostCore,
    /// Path relative to the uploads directory
    pub file: Option<String>,
    /// Post the attachment belongs to
    pub parent: Option<u32>,
    /// Already-serialized attachment metadata
    pub meta_data: Option<String>,
    pub attachment_type: String,
}

impl Attachment {
    pub fn is_product_image(&self) -> bool {
        self.attachment_type == PRODUCT_IMAGE
    }
}

/// Title derived from an attachment URL: the last path segment without query.
pub fn title_from_url(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or(url);
    match segment.find('?') {
        Some(query) => segment[..query].to_string(),
        None => segment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_url() {
        assert_eq!(title_from_url("https://cdn.test/img/shoe.jpg?w=300"), "shoe.jpg");
        assert_eq!(title_from_url("https://cdn.test/img/shoe.jpg"), "shoe.jpg");
        assert_eq!(title_from_url("shoe.jpg"), "shoe.jpg");
        assert_eq!(title_from_url("https://cdn.test/dir/"), "");
    }
}
