//! Post and page emitter

use crate::application::ports::outbound::MarkupElement;
use crate::domain::entities::Post;
use crate::infrastructure::export::field_table::{emit_fields, Field};

use super::{classify_all, plain_meta_pair, post_id, POST_TAG_DOMAIN};

const CATEGORY_DOMAIN: &str = "category";

fn post_fields() -> Vec<Field<Post>> {
    vec![
        Field::text("title", |p: &Post| p.core.title.clone()),
        Field::text("link", |p: &Post| p.core.url.clone()),
        Field::text("pubDate", |p: &Post| p.core.pub_date()),
        Field::cdata("dc:creator", |p: &Post| p.core.author.clone()),
        Field::text("guid", |p: &Post| p.core.slug.clone())
            .with_attributes(&[("isPermaLink", "true")]),
        Field::cdata("description", |p: &Post| p.core.summary.clone()),
        Field::cdata("content:encoded", |p: &Post| p.core.content.clone()),
        Field::cdata("excerpt:encoded", |p: &Post| p.core.summary.clone()),
        Field::text("wp:post_id", |p: &Post| post_id(&p.core)),
        Field::cdata("wp:post_date", |p: &Post| p.core.post_date()),
        Field::cdata("wp:comment_status", |p: &Post| p.core.comment_status.clone()),
        Field::cdata("wp:ping_status", |p: &Post| p.core.ping_status.clone()),
        Field::cdata("wp:post_name", |p: &Post| p.core.slug.clone()),
        Field::cdata("wp:status", |p: &Post| p.core.status.clone()),
        Field::text("wp:post_parent", |_: &Post| "0".to_string()),
        Field::text("wp:menu_order", |_: &Post| "0".to_string()),
        Field::text("wp:post_type", |p: &Post| p.post_type.as_str().to_string()),
        Field::cdata("wp:post_password", |p: &Post| p.core.password.clone()),
        Field::text("wp:is_sticky", |_: &Post| "0".to_string()),
    ]
}

pub fn emit_post(channel: &mut MarkupElement, post: &Post) {
    let mut item = MarkupElement::new("item");
    emit_fields(&mut item, &post_fields(), post);
    classify_all(&mut item, CATEGORY_DOMAIN, &post.categories);
    classify_all(&mut item, POST_TAG_DOMAIN, &post.tags);
    if let Some(thumbnail) = post.thumbnail_id {
        item.push(plain_meta_pair("_thumbnail_id", thumbnail.to_string()));
    }
    channel.push(item);
}
