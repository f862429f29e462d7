//! Entity emitters - Render staged entities into the channel element
//!
//! One emitter per entity kind. Fixed fields come from a field table; the
//! repeated blocks (classifications and `wp:postmeta` pairs) are appended
//! after it.

mod attachments;
mod menu_items;
mod posts;
mod products;
mod terms;
mod users;

pub use attachments::emit_attachment;
pub use menu_items::emit_menu_item;
pub use posts::emit_post;
pub use products::emit_product;
pub use terms::emit_term;
pub use users::emit_user;

use crate::application::ports::outbound::MarkupElement;
use crate::domain::entities::{PostCore, TermRef};
use crate::domain::value_objects::MetaValue;
use crate::infrastructure::export::legacy_array::encode_sequence;

/// Domain of post tag classifications
pub const POST_TAG_DOMAIN: &str = "post_tag";

/// `<category domain=".." nicename="..">` classifying an item under a term
fn classification(domain: &str, nicename: &str, label: &str) -> MarkupElement {
    MarkupElement::new("category")
        .attr("domain", domain)
        .attr("nicename", nicename)
        .cdata(label)
}

fn classify_all(item: &mut MarkupElement, domain: &str, terms: &[TermRef]) {
    for term in terms {
        item.push(classification(domain, &term.slug, &term.name));
    }
}

/// `wp:postmeta` pair with both key and value in CDATA. Sequences are
/// written with the legacy array encoding, nulls as an empty value.
fn meta_pair(key: &str, value: &MetaValue) -> MarkupElement {
    let value_element = MarkupElement::new("wp:meta_value");
    let value_element = match value {
        MetaValue::Text(text) => value_element.cdata(text.as_str()),
        MetaValue::Sequence(values) => value_element.cdata(encode_sequence(values)),
        MetaValue::Null => value_element,
    };
    MarkupElement::new("wp:postmeta")
        .child(MarkupElement::new("wp:meta_key").cdata(key))
        .child(value_element)
}

/// `wp:postmeta` pair written as plain text
fn plain_meta_pair(key: &str, value: impl Into<String>) -> MarkupElement {
    MarkupElement::new("wp:postmeta")
        .child(MarkupElement::new("wp:meta_key").text(key))
        .child(MarkupElement::new("wp:meta_value").text(value))
}

fn post_id(core: &PostCore) -> String {
    core.id.to_string()
}
