//! Declarative field tables
//!
//! Each entity kind describes its output as a list of [`Field`]s: the
//! element name, whether the value is written as escaped text or CDATA,
//! static attributes, an optional presence predicate and a value accessor.
//! [`emit_fields`] walks a table for one record.

use crate::application::ports::outbound::MarkupElement;

/// How a field value is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Text,
    CData,
}

impl Style {
    pub fn element(self, tag: &str, value: impl Into<String>) -> MarkupElement {
        let element = MarkupElement::new(tag);
        match self {
            Style::Text => element.text(value),
            Style::CData => element.cdata(value),
        }
    }
}

pub struct Field<T> {
    pub tag: &'static str,
    pub style: Style,
    pub attributes: &'static [(&'static str, &'static str)],
    /// Field is written only when this returns true
    pub presence: Option<fn(&T) -> bool>,
    pub value: fn(&T) -> String,
}

impl<T> Field<T> {
    pub fn text(tag: &'static str, value: fn(&T) -> String) -> Self {
        Self::styled(tag, Style::Text, value)
    }

    pub fn cdata(tag: &'static str, value: fn(&T) -> String) -> Self {
        Self::styled(tag, Style::CData, value)
    }

    fn styled(tag: &'static str, style: Style, value: fn(&T) -> String) -> Self {
        Self {
            tag,
            style,
            attributes: &[],
            presence: None,
            value,
        }
    }

    pub fn with_attributes(mut self, attributes: &'static [(&'static str, &'static str)]) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn when(mut self, presence: fn(&T) -> bool) -> Self {
        self.presence = Some(presence);
        self
    }

    pub fn is_present(&self, record: &T) -> bool {
        self.presence.map_or(true, |present| present(record))
    }

    pub fn render(&self, record: &T) -> MarkupElement {
        self.attributes.iter().fold(
            self.style.element(self.tag, (self.value)(record)),
            |element, (key, value)| element.attr(*key, *value),
        )
    }
}

/// Append every present field of `record` to `parent`, in table order
pub fn emit_fields<T>(parent: &mut MarkupElement, fields: &[Field<T>], record: &T) {
    for field in fields.iter().filter(|field| field.is_present(record)) {
        parent.push(field.render(record));
    }
}
