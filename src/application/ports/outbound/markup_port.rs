//! Markup port - Abstract element tree and the serializer that writes it
//!
//! The document assembler builds a tree of [`MarkupElement`]s and hands it to
//! a [`MarkupSerializer`]. Text and CDATA children are kept apart so the
//! serializer can escape the one and wrap the other.

use crate::domain::errors::ExportError;
use crate::domain::value_objects::RenderOptions;

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Element(MarkupElement),
    /// Escaped character data
    Text(String),
    /// Written verbatim inside a CDATA section
    CData(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkupElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<MarkupNode>,
}

impl MarkupElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupNode::Text(text.into()));
        self
    }

    pub fn cdata(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupNode::CData(text.into()));
        self
    }

    pub fn child(mut self, element: MarkupElement) -> Self {
        self.children.push(MarkupNode::Element(element));
        self
    }

    /// Append a child element in place
    pub fn push(&mut self, element: MarkupElement) {
        self.children.push(MarkupNode::Element(element));
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements in order
    pub fn elements(&self) -> impl Iterator<Item = &MarkupElement> {
        self.children.iter().filter_map(|node| match node {
            MarkupNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First child element with the given name
    pub fn find(&self, name: &str) -> Option<&MarkupElement> {
        self.elements().find(|element| element.name == name)
    }

    /// All child elements with the given name
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MarkupElement> {
        self.elements().filter(move |element| element.name == name)
    }

    /// Concatenated text and CDATA content of the direct children
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                MarkupNode::Text(text) | MarkupNode::CData(text) => Some(text.as_str()),
                MarkupNode::Element(_) => None,
            })
            .collect()
    }

    pub fn has_element_children(&self) -> bool {
        self.elements().next().is_some()
    }
}

/// Writes a markup tree as a complete document
pub trait MarkupSerializer {
    fn serialize(&self, root: &MarkupElement, options: &RenderOptions)
        -> Result<String, ExportError>;
}
