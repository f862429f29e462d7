//! Attachment emitter

use crate::application::ports::outbound::MarkupElement;
use crate::domain::entities::Attachment;
use crate::infrastructure::export::field_table::{emit_fields, Field};

use super::{plain_meta_pair, post_id};

fn attachment_fields() -> Vec<Field<Attachment>> {
    vec![
        Field::text("title", |a: &Attachment| a.core.title.clone()),
        Field::text("link", |a: &Attachment| a.core.url.clone()),
        Field::text("pubDate", |a: &Attachment| a.core.pub_date()),
        Field::text("dc:creator", |a: &Attachment| a.core.author.clone()),
        Field::text("guid", |a: &Attachment| a.core.url.clone())
            .with_attributes(&[("isPermaLink", "false")]),
        Field::cdata("description", |a: &Attachment| a.core.summary.clone()),
        Field::cdata("content:encoded", |a: &Attachment| a.core.content.clone()),
        Field::cdata("excerpt:encoded", |a: &Attachment| a.core.summary.clone()),
        Field::text("wp:post_id", |a: &Attachment| post_id(&a.core)),
        Field::text("wp:post_date", |a: &Attachment| a.core.post_date()),
        Field::cdata("wp:comment_status", |a: &Attachment| a.core.comment_status.clone()),
        Field::cdata("wp:ping_status", |a: &Attachment| a.core.ping_status.clone()),
        Field::cdata("wp:post_name", |a: &Attachment| a.core.slug.clone()),
        Field::cdata("wp:status", |a: &Attachment| a.core.status.clone()),
        Field::text("wp:post_parent", |a: &Attachment| {
            a.parent.map(|id| id.to_string()).unwrap_or_default()
        }),
        Field::text("wp:menu_order", |_: &Attachment| "0".to_string()),
        Field::text("wp:post_type", |_: &Attachment| "attachment".to_string()),
        Field::cdata("wp:post_password", |a: &Attachment| a.core.password.clone()),
        Field::text("wp:is_sticky", |_: &Attachment| "0".to_string()),
        Field::cdata("wp:attachment_url", |a: &Attachment| a.core.url.clone()),
    ]
}

pub fn emit_attachment(channel: &mut MarkupElement, attachment: &Attachment) {
    let mut item = MarkupElement::new("item");
    emit_fields(&mut item, &attachment_fields(), attachment);

    if attachment.is_product_image() {
        item.push(
            MarkupElement::new("wp:postmeta")
                .child(MarkupElement::new("wp:meta_key").text("_wc_attachment_source"))
                .child(MarkupElement::new("wp:meta_value").cdata(attachment.core.url.as_str())),
        );
    }
    if let Some(file) = &attachment.file {
        item.push(plain_meta_pair("_wp_attached_file", file.as_str()));
        item.push(plain_meta_pair(
            "_wp_attachment_metadata",
            attachment.meta_data.clone().unwrap_or_default(),
        ));
        item.push(plain_meta_pair("_wp_attachment_image_alt", attachment.core.title.as_str()));
    }

    channel.push(item);
}
