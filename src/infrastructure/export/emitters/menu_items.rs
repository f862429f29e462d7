//! Menu item emitter

use crate::application::ports::outbound::MarkupElement;
use crate::domain::entities::MenuItem;
use crate::domain::value_objects::MetaValue;
use crate::infrastructure::export::field_table::{emit_fields, Field};
use crate::infrastructure::export::legacy_array::encode_string_sequence;

use super::terms::NAV_MENU_TAXONOMY;
use super::{classification, meta_pair, post_id};

fn menu_item_fields() -> Vec<Field<MenuItem>> {
    vec![
        Field::text("title", |m: &MenuItem| m.core.title.clone()),
        Field::text("link", |m: &MenuItem| m.core.url.clone()),
        Field::text("pubDate", |m: &MenuItem| m.core.pub_date()),
        Field::cdata("dc:creator", |m: &MenuItem| m.core.author.clone()),
        Field::text("guid", |m: &MenuItem| m.guid.clone())
            .with_attributes(&[("isPermaLink", "false")]),
        Field::cdata("description", |m: &MenuItem| m.core.summary.clone()),
        Field::cdata("content:encoded", |m: &MenuItem| m.core.content.clone()),
        Field::cdata("excerpt:encoded", |m: &MenuItem| m.core.summary.clone()),
        Field::text("wp:post_id", |m: &MenuItem| post_id(&m.core)),
        Field::cdata("wp:post_date", |m: &MenuItem| m.core.post_date()),
        Field::cdata("wp:comment_status", |m: &MenuItem| m.core.comment_status.clone()),
        Field::cdata("wp:ping_status", |m: &MenuItem| m.core.ping_status.clone()),
        Field::cdata("wp:post_name", |m: &MenuItem| m.core.slug.clone()),
        Field::cdata("wp:status", |m: &MenuItem| m.core.status.clone()),
        Field::text("wp:post_parent", |m: &MenuItem| m.parent.to_string()),
        Field::text("wp:menu_order", |m: &MenuItem| m.menu_order.to_string()),
        Field::cdata("wp:post_type", |_: &MenuItem| "nav_menu_item".to_string()),
        Field::cdata("wp:post_password", |m: &MenuItem| m.core.password.clone()),
        Field::text("wp:is_sticky", |_: &MenuItem| "0".to_string()),
    ]
}

fn menu_item_meta(item: &MenuItem) -> Vec<(&'static str, MetaValue)> {
    let optional = |value: Option<String>| value.map(MetaValue::Text).unwrap_or(MetaValue::Null);
    vec![
        ("_menu_item_type", MetaValue::text(item.item_type.as_str())),
        ("_menu_item_menu_item_parent", MetaValue::text(item.item_parent.to_string())),
        ("_menu_item_object_id", optional(item.object_id.map(|id| id.to_string()))),
        ("_menu_item_object", optional(item.object.clone())),
        ("_menu_item_target", MetaValue::text(item.target.as_str())),
        ("_menu_item_classes", MetaValue::text(encode_string_sequence(&item.classes))),
        ("_menu_item_xfn", MetaValue::text(item.xfn.as_str())),
        ("_menu_item_url", MetaValue::text(item.item_url.as_str())),
    ]
}

pub fn emit_menu_item(channel: &mut MarkupElement, menu_item: &MenuItem) {
    let mut item = MarkupElement::new("item");
    emit_fields(&mut item, &menu_item_fields(), menu_item);
    item.push(classification(
        NAV_MENU_TAXONOMY,
        &menu_item.menu_slug,
        &menu_item.menu_name,
    ));
    for (key, value) in menu_item_meta(menu_item) {
        item.push(meta_pair(key, &value));
    }
    channel.push(item);
}
