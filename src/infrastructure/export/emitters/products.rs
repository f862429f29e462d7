//! Product emitter
//!
//! After the fixed item fields a product carries one classification per
//! attribute value, per category and per tag, plus one naming its product
//! type. Commerce fields follow as `wp:postmeta` pairs with an underscore
//! prefix, then the image metadata.

use crate::application::ports::outbound::MarkupElement;
use crate::domain::entities::{Product, ProductImages};
use crate::domain::services::{attribute_taxonomy, slug};
use crate::domain::value_objects::MetaValue;
use crate::infrastructure::export::field_table::{emit_fields, Field};
use crate::infrastructure::export::legacy_array::encode_attribute_set;

use super::{classification, classify_all, meta_pair, plain_meta_pair, post_id, POST_TAG_DOMAIN};
use super::terms::PRODUCT_CATEGORY_TAXONOMY;

const PRODUCT_TYPE_DOMAIN: &str = "product_type";

fn product_fields() -> Vec<Field<Product>> {
    vec![
        Field::text("title", |p: &Product| p.core.title.clone()),
        Field::text("link", |p: &Product| p.core.url.clone()),
        Field::text("pubDate", |p: &Product| p.core.pub_date()),
        Field::cdata("dc:creator", |p: &Product| p.core.author.clone()),
        Field::text("guid", |p: &Product| p.core.slug.clone())
            .with_attributes(&[("isPermaLink", "true")]),
        Field::cdata("description", |p: &Product| p.core.summary.clone()),
        Field::cdata("content:encoded", |p: &Product| p.core.content.clone()),
        Field::cdata("excerpt:encoded", |p: &Product| p.core.summary.clone()),
        Field::text("wp:post_id", |p: &Product| post_id(&p.core)),
        Field::cdata("wp:post_date", |p: &Product| p.core.post_date()),
        Field::cdata("wp:comment_status", |p: &Product| p.core.comment_status.clone()),
        Field::cdata("wp:ping_status", |p: &Product| p.core.ping_status.clone()),
        Field::cdata("wp:post_name", |p: &Product| p.core.slug.clone()),
        Field::cdata("wp:status", |p: &Product| p.core.status.clone()),
        Field::text("wp:post_parent", |_: &Product| "0".to_string()),
        Field::text("wp:menu_order", |_: &Product| "0".to_string()),
        Field::cdata("wp:post_type", |_: &Product| "product".to_string()),
        Field::cdata("wp:post_password", |p: &Product| p.core.password.clone()),
        Field::text("wp:is_sticky", |_: &Product| "0".to_string()),
    ]
}

pub fn emit_product(channel: &mut MarkupElement, product: &Product) {
    let mut item = MarkupElement::new("item");
    emit_fields(&mut item, &product_fields(), product);

    for attribute in &product.attributes {
        item.push(classification(
            &attribute_taxonomy(&attribute.name),
            &slug(&attribute.value),
            &attribute.value,
        ));
    }
    classify_all(&mut item, PRODUCT_CATEGORY_TAXONOMY, &product.categories);
    item.push(classification(
        PRODUCT_TYPE_DOMAIN,
        &product.product_type,
        &product.product_type,
    ));
    classify_all(&mut item, POST_TAG_DOMAIN, &product.tags);

    if !product.attributes.is_empty() {
        item.push(meta_pair(
            "_product_attributes",
            &MetaValue::text(encode_attribute_set(&product.attributes)),
        ));
    }
    item.push(meta_pair(
        "_default_attributes",
        &MetaValue::text(encode_attribute_set(&product.default_attributes)),
    ));

    for (key, value) in product.commerce.meta_pairs() {
        item.push(meta_pair(&format!("_{}", key), &value));
    }

    match &product.images {
        ProductImages::None => {}
        ProductImages::Thumbnail(id) => item.push(plain_meta_pair("_thumbnail_id", id.to_string())),
        ProductImages::Gallery(images) => {
            if let Some((thumbnail, gallery)) = images.split_first() {
                item.push(plain_meta_pair("_thumbnail_id", thumbnail.id.to_string()));
                if !gallery.is_empty() {
                    let ids: Vec<String> = gallery.iter().map(|image| image.id.to_string()).collect();
                    item.push(meta_pair("_product_image_gallery", &MetaValue::text(ids.join(","))));
                }
            }
        }
    }

    channel.push(item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        AttributeRecord, CommerceFields, PostCore, ProductImage, TermRef,
    };
    use crate::domain::value_objects::PostId;
    use chrono::Utc;

    fn product() -> Product {
        Product {
            core: PostCore {
                id: PostId::new(500),
                title: "Trail Boot".into(),
                slug: "trail-boot".into(),
                url: "https://example.test/boot".into(),
                date: Utc::now(),
                author: "admin".into(),
                content: String::new(),
                summary: String::new(),
                status: "publish".into(),
                comment_status: "open".into(),
                ping_status: "closed".into(),
                password: String::new(),
            },
            product_type: "simple".into(),
            categories: vec![TermRef { name: "Shoes".into(), slug: "shoes".into() }],
            tags: vec![TermRef { name: "Winter".into(), slug: "winter".into() }],
            attributes: vec![AttributeRecord::new("Color", "Dark Red")],
            default_attributes: Vec::new(),
            images: ProductImages::None,
            commerce: CommerceFields {
                upsell_ids: vec![10, 20, 30],
                ..CommerceFields::default()
            },
        }
    }

    fn emit(product: &Product) -> MarkupElement {
        let mut channel = MarkupElement::new("channel");
        emit_product(&mut channel, product);
        channel.find("item").cloned().unwrap()
    }

    fn meta<'a>(item: &'a MarkupElement, key: &str) -> Option<&'a MarkupElement> {
        item.find_all("wp:postmeta")
            .find(|meta| meta.find("wp:meta_key").map(|k| k.text_content()).as_deref() == Some(key))
    }

    fn meta_value(item: &MarkupElement, key: &str) -> String {
        meta(item, key)
            .and_then(|meta| meta.find("wp:meta_value"))
            .map(|value| value.text_content())
            .unwrap()
    }

    #[test]
    fn test_classifications() {
        let item = emit(&product());
        let classes: Vec<_> = item
            .find_all("category")
            .map(|c| {
                (
                    c.attribute("domain").unwrap(),
                    c.attribute("nicename").unwrap(),
                    c.text_content(),
                )
            })
            .collect();
        assert_eq!(
            classes,
            vec![
                ("pa_color", "dark-red", "Dark Red".to_string()),
                ("product_cat", "shoes", "Shoes".to_string()),
                ("product_type", "simple", "simple".to_string()),
                ("post_tag", "winter", "Winter".to_string()),
            ]
        );
    }

    #[test]
    fn test_commerce_meta() {
        let item = emit(&product());
        assert_eq!(meta_value(&item, "_upsell_ids"), "a:3:{i:0;i:10;i:1;i:20;i:2;i:30;}");
        assert_eq!(meta_value(&item, "_crossell_ids"), "a:0:{}");
        assert_eq!(meta_value(&item, "_stock_status"), "instock");
        assert_eq!(meta_value(&item, "_price"), "0");
        assert_eq!(meta_value(&item, "_download_limit"), "-1");
        assert_eq!(meta_value(&item, "_product_version"), "3.9.2");

        let tax_class = meta(&item, "_tax_class").unwrap().find("wp:meta_value").unwrap();
        assert!(tax_class.children.is_empty());
    }

    #[test]
    fn test_attribute_meta() {
        let item = emit(&product());
        assert!(meta_value(&item, "_product_attributes").starts_with("a:1:{s:8:\"pa_color\";"));
        assert_eq!(meta_value(&item, "_default_attributes"), "a:0:{}");

        let mut bare = product();
        bare.attributes.clear();
        let item = emit(&bare);
        assert!(meta(&item, "_product_attributes").is_none());
        assert!(meta(&item, "_default_attributes").is_some());
    }

    #[test]
    fn test_gallery_splits_thumbnail() {
        let mut product = product();
        product.images = ProductImages::Gallery(
            [1, 2, 3]
                .into_iter()
                .map(|id| ProductImage {
                    id: PostId::new(id),
                    title: format!("{}.jpg", id),
                    url: format!("https://cdn.test/{}.jpg", id),
                })
                .collect(),
        );
        let item = emit(&product);
        assert_eq!(meta_value(&item, "_thumbnail_id"), "1");
        assert_eq!(meta_value(&item, "_product_image_gallery"), "2,3");
    }

    #[test]
    fn test_single_image_has_no_gallery() {
        let mut product = product();
        product.images = ProductImages::Thumbnail(99);
        let item = emit(&product);
        assert_eq!(meta_value(&item, "_thumbnail_id"), "99");
        assert!(meta(&item, "_product_image_gallery").is_none());
    }
}
