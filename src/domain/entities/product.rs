//! Product entity - WooCommerce products with commerce metadata

use serde::{Deserialize, Serialize};

use crate::domain::entities::{PostCore, TermRef};
use crate::domain::value_objects::{LegacyScalar, MetaValue, NumberOrText, PostId};

/// Product generator version written as `_product_version`
pub const PRODUCT_VERSION: &str = "3.9.2";

/// One product attribute as embedded in `_product_attributes`
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRecord {
    pub name: String,
    pub value: String,
    pub position: Option<LegacyScalar>,
    pub is_visible: Option<LegacyScalar>,
    pub is_variation: Option<LegacyScalar>,
}

impl AttributeRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            position: None,
            is_visible: None,
            is_variation: None,
        }
    }
}

/// A normalized product image, also staged as an attachment
#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub id: PostId,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductImages {
    #[default]
    None,
    /// Id of an image already hosted on the target site
    Thumbnail(u32),
    /// First image is the thumbnail, the rest form the gallery
    Gallery(Vec<ProductImage>),
}

/// Commerce fields, each written as an underscore-prefixed `wp:postmeta` pair.
///
/// Prices, dimensions and counters accept a number or a string and are
/// written back as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceFields {
    pub featured: String,
    pub catalog_visibility: String,
    pub sku: NumberOrText,
    pub regular_price: NumberOrText,
    pub sale_price: NumberOrText,
    pub sale_price_dates_from: String,
    pub sale_price_dates_to: String,
    pub tax_status: String,
    pub tax_class: Option<String>,
    pub reviews_allowed: String,
    pub parent_id: NumberOrText,
    pub manage_stock: String,
    pub backorders: String,
    pub sold_individually: String,
    pub weight: NumberOrText,
    pub length: NumberOrText,
    pub width: NumberOrText,
    pub height: NumberOrText,
    pub shipping_class: String,
    pub upsell_ids: Vec<i64>,
    pub crossell_ids: Vec<i64>,
    pub purchase_note: String,
    pub grouped_products: Vec<i64>,
    pub menu_order: NumberOrText,
    #[serde(rename = "virtual")]
    pub is_virtual: String,
    pub downloadable: String,
    pub external_url: String,
    pub button_text: String,
    pub download_limit: NumberOrText,
    pub download_expiry: NumberOrText,
    pub stock: NumberOrText,
    pub stock_status: String,
    pub downloadable_files: Vec<i64>,
    /// Defaults to `regular_price`
    pub price: Option<NumberOrText>,
    pub product_version: String,
}

impl Default for CommerceFields {
    fn default() -> Self {
        Self {
            featured: "no".to_string(),
            catalog_visibility: "visible".to_string(),
            sku: NumberOrText::default(),
            regular_price: NumberOrText::from(0.0),
            sale_price: NumberOrText::default(),
            sale_price_dates_from: String::new(),
            sale_price_dates_to: String::new(),
            tax_status: "taxable".to_string(),
            tax_class: None,
            reviews_allowed: "yes".to_string(),
            parent_id: NumberOrText::from(0.0),
            manage_stock: "yes".to_string(),
            backorders: "no".to_string(),
            sold_individually: "no".to_string(),
            weight: NumberOrText::default(),
            length: NumberOrText::default(),
            width: NumberOrText::default(),
            height: NumberOrText::default(),
            shipping_class: String::new(),
            upsell_ids: Vec::new(),
            crossell_ids: Vec::new(),
            purchase_note: String::new(),
            grouped_products: Vec::new(),
            menu_order: NumberOrText::from(0.0),
            is_virtual: "no".to_string(),
            downloadable: "no".to_string(),
            external_url: String::new(),
            button_text: String::new(),
            download_limit: NumberOrText::from(-1.0),
            download_expiry: NumberOrText::from(-1.0),
            stock: NumberOrText::from(1.0),
            stock_status: "instock".to_string(),
            downloadable_files: Vec::new(),
            price: None,
            product_version: PRODUCT_VERSION.to_string(),
        }
    }
}

impl CommerceFields {
    /// Metadata pairs in emission order, keys without the leading underscore
    pub fn meta_pairs(&self) -> Vec<(&'static str, MetaValue)> {
        let text = |value: &str| MetaValue::text(value);
        let loose = |value: &NumberOrText| MetaValue::text(value.to_string());
        vec![
            ("featured", text(&self.featured)),
            ("catalog_visibility", text(&self.catalog_visibility)),
            ("sku", loose(&self.sku)),
            ("regular_price", loose(&self.regular_price)),
            ("sale_price", loose(&self.sale_price)),
            ("sale_price_dates_from", text(&self.sale_price_dates_from)),
            ("sale_price_dates_to", text(&self.sale_price_dates_to)),
            ("tax_status", text(&self.tax_status)),
            (
                "tax_class",
                self.tax_class.as_deref().map(text).unwrap_or(MetaValue::Null),
            ),
            ("reviews_allowed", text(&self.reviews_allowed)),
            ("parent_id", loose(&self.parent_id)),
            ("manage_stock", text(&self.manage_stock)),
            ("backorders", text(&self.backorders)),
            ("sold_individually", text(&self.sold_individually)),
            ("weight", loose(&self.weight)),
            ("length", loose(&self.length)),
            ("width", loose(&self.width)),
            ("height", loose(&self.height)),
            ("shipping_class", text(&self.shipping_class)),
            ("upsell_ids", MetaValue::Sequence(self.upsell_ids.clone())),
            ("crossell_ids", MetaValue::Sequence(self.crossell_ids.clone())),
            ("purchase_note", text(&self.purchase_note)),
            ("grouped_products", MetaValue::Sequence(self.grouped_products.clone())),
            ("menu_order", loose(&self.menu_order)),
            ("virtual", text(&self.is_virtual)),
            ("downloadable", text(&self.downloadable)),
            ("external_url", text(&self.external_url)),
            ("button_text", text(&self.button_text)),
            ("download_limit", loose(&self.download_limit)),
            ("download_expiry", loose(&self.download_expiry)),
            ("stock", loose(&self.stock)),
            ("stock_status", text(&self.stock_status)),
            ("downloadable_files", MetaValue::Sequence(self.downloadable_files.clone())),
            (
                "price",
                loose(self.price.as_ref().unwrap_or(&self.regular_price)),
            ),
            ("product_version", text(&self.product_version)),
        ]
    }
}

/// A staged WooCommerce product
#[derive(Debug, Clone)]
pub struct Product {
    pub core: PostCore,
    /// `simple`, `grouped`, `external` or `variable`
    pub product_type: String,
    pub categories: Vec<TermRef>,
    pub tags: Vec<TermRef>,
    pub attributes: Vec<AttributeRecord>,
    pub default_attributes: Vec<AttributeRecord>,
    pub images: ProductImages,
    pub commerce: CommerceFields,
}
