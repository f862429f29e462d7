//! Term emitters
//!
//! Tags and categories use their dedicated `wp:tag` / `wp:category`
//! elements; product categories, product attributes and menus are generic
//! `wp:term` entries.

use crate::application::ports::outbound::MarkupElement;
use crate::domain::entities::{Term, TermKind};
use crate::infrastructure::export::field_table::{emit_fields, Field};

pub const PRODUCT_CATEGORY_TAXONOMY: &str = "product_cat";
pub const NAV_MENU_TAXONOMY: &str = "nav_menu";

fn has_parent(term: &Term) -> bool {
    !term.parent.is_root()
}

fn tag_fields() -> Vec<Field<Term>> {
    vec![
        Field::text("wp:term_id", |t: &Term| t.id.to_string()),
        Field::text("wp:tag_slug", |t: &Term| t.slug.clone()),
        Field::text("wp:tag_name", |t: &Term| t.name.clone()),
        Field::text("wp:tag_description", |t: &Term| t.description.clone()),
    ]
}

fn category_fields() -> Vec<Field<Term>> {
    vec![
        Field::text("wp:term_id", |t: &Term| t.id.to_string()),
        Field::text("wp:category_nicename", |t: &Term| t.slug.clone()),
        Field::text("wp:cat_name", |t: &Term| t.name.clone()),
        Field::text("wp:category_description", |t: &Term| t.description.clone()),
        Field::text("wp:category_parent", |t: &Term| t.parent.to_string()).when(has_parent),
    ]
}

fn product_category_fields() -> Vec<Field<Term>> {
    vec![
        Field::cdata("wp:term_id", |t: &Term| t.id.to_string()),
        Field::cdata("wp:term_taxonomy", |_: &Term| PRODUCT_CATEGORY_TAXONOMY.to_string()),
        Field::cdata("wp:term_slug", |t: &Term| t.slug.clone()),
        Field::cdata("wp:term_name", |t: &Term| t.name.clone()),
        Field::cdata("wp:term_parent", |t: &Term| t.parent.to_string()).when(has_parent),
    ]
}

fn product_attribute_fields() -> Vec<Field<Term>> {
    vec![
        Field::cdata("wp:term_id", |t: &Term| t.id.to_string()),
        Field::cdata("wp:term_taxonomy", |t: &Term| t.taxonomy.clone().unwrap_or_default()),
        Field::cdata("wp:term_slug", |t: &Term| t.slug.clone()),
        Field::cdata("wp:term_name", |t: &Term| t.label().to_string()),
        Field::cdata("wp:term_parent", |t: &Term| t.parent.to_string()).when(has_parent),
    ]
}

fn menu_fields() -> Vec<Field<Term>> {
    vec![
        Field::text("wp:term_id", |t: &Term| t.id.to_string()),
        Field::text("wp:term_taxonomy", |_: &Term| NAV_MENU_TAXONOMY.to_string()),
        Field::cdata("wp:term_slug", |t: &Term| t.slug.clone()),
        Field::cdata("wp:term_name", |t: &Term| t.name.clone()),
    ]
}

pub fn emit_term(channel: &mut MarkupElement, term: &Term) {
    let (element, fields) = match term.kind {
        TermKind::Tag => ("wp:tag", tag_fields()),
        TermKind::Category => ("wp:category", category_fields()),
        TermKind::ProductCategory => ("wp:term", product_category_fields()),
        TermKind::ProductAttribute => ("wp:term", product_attribute_fields()),
        TermKind::NavMenu => ("wp:term", menu_fields()),
    };
    let mut entry = MarkupElement::new(element);
    emit_fields(&mut entry, &fields, term);
    channel.push(entry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::MarkupNode;
    use crate::domain::entities::TermParent;
    use crate::domain::value_objects::TermId;

    fn term(kind: TermKind, name: &str) -> Term {
        Term {
            id: TermId::new(9),
            kind,
            name: name.to_string(),
            slug: name.to_lowercase(),
            parent: TermParent::Root,
            description: String::new(),
            value: None,
            taxonomy: None,
        }
    }

    fn emit(term: &Term) -> MarkupElement {
        let mut channel = MarkupElement::new("channel");
        emit_term(&mut channel, term);
        let entry = channel.elements().next().cloned().unwrap();
        entry
    }

    #[test]
    fn test_tag_entry() {
        let entry = emit(&term(TermKind::Tag, "Rust"));
        assert_eq!(entry.name, "wp:tag");
        assert_eq!(entry.find("wp:term_id").unwrap().text_content(), "9");
        assert_eq!(entry.find("wp:tag_slug").unwrap().text_content(), "rust");
        assert_eq!(entry.find("wp:tag_name").unwrap().text_content(), "Rust");
    }

    #[test]
    fn test_category_parent_only_when_present() {
        let mut category = term(TermKind::Category, "News");
        category.description = "All the news".into();
        let entry = emit(&category);
        assert!(entry.find("wp:category_parent").is_none());
        assert_eq!(
            entry.find("wp:category_description").unwrap().text_content(),
            "All the news"
        );

        category.parent = TermParent::Id(12);
        let entry = emit(&category);
        assert_eq!(entry.find("wp:category_parent").unwrap().text_content(), "12");
    }

    #[test]
    fn test_product_category_parent_slug() {
        let mut category = term(TermKind::ProductCategory, "Boots");
        category.parent = TermParent::Slug("shoes".into());
        let entry = emit(&category);
        assert_eq!(entry.name, "wp:term");
        assert_eq!(
            entry.find("wp:term_taxonomy").unwrap().children,
            vec![MarkupNode::CData("product_cat".into())]
        );
        assert_eq!(entry.find("wp:term_parent").unwrap().text_content(), "shoes");
    }

    #[test]
    fn test_attribute_term_uses_value_as_name() {
        let mut attribute = term(TermKind::ProductAttribute, "Color");
        attribute.value = Some("Red".into());
        attribute.slug = "red".into();
        attribute.taxonomy = Some("pa_color".into());
        let entry = emit(&attribute);
        assert_eq!(entry.find("wp:term_taxonomy").unwrap().text_content(), "pa_color");
        assert_eq!(entry.find("wp:term_name").unwrap().text_content(), "Red");
        assert_eq!(entry.find("wp:term_slug").unwrap().text_content(), "red");
    }

    #[test]
    fn test_menu_term() {
        let entry = emit(&term(TermKind::NavMenu, "Main"));
        assert_eq!(
            entry.find("wp:term_taxonomy").unwrap().children,
            vec![MarkupNode::Text("nav_menu".into())]
        );
        assert_eq!(entry.find("wp:term_name").unwrap().text_content(), "Main");
    }
}
