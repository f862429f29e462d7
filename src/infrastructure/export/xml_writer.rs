//! quick-xml adapter for the markup port
//!
//! Escaping of text and attribute values is left to quick-xml. CDATA content
//! containing the `]]>` terminator is split across adjacent sections.

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::application::ports::outbound::{MarkupElement, MarkupNode, MarkupSerializer};
use crate::domain::errors::ExportError;
use crate::domain::value_objects::RenderOptions;

const CDATA_END: &str = "]]>";

/// Serializes markup trees with an XML 1.0 declaration
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickXmlSerializer;

impl QuickXmlSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupSerializer for QuickXmlSerializer {
    fn serialize(
        &self,
        root: &MarkupElement,
        options: &RenderOptions,
    ) -> Result<String, ExportError> {
        let mut out = XmlOut {
            writer: Writer::new(Vec::new()),
            options,
        };
        out.emit(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        out.break_line(0)?;
        out.element(root, 0)?;
        Ok(String::from_utf8(out.writer.into_inner())?)
    }
}

struct XmlOut<'o> {
    writer: Writer<Vec<u8>>,
    options: &'o RenderOptions,
}

impl XmlOut<'_> {
    fn emit(&mut self, event: Event<'_>) -> Result<(), ExportError> {
        self.writer
            .write_event(event)
            .map_err(|e| ExportError::Serialization(e.to_string()))
    }

    /// Newline plus indentation for `depth`, pretty mode only
    fn break_line(&mut self, depth: usize) -> Result<(), ExportError> {
        if !self.options.pretty {
            return Ok(());
        }
        let whitespace = format!("{}{}", self.options.newline, self.options.indent.repeat(depth));
        self.emit(Event::Text(BytesText::from_escaped(whitespace)))
    }

    fn element(&mut self, element: &MarkupElement, depth: usize) -> Result<(), ExportError> {
        let start = BytesStart::new(element.name.as_str()).with_attributes(
            element
                .attributes
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );

        if element.children.is_empty() {
            return self.emit(Event::Empty(start));
        }

        self.emit(Event::Start(start))?;
        for child in &element.children {
            match child {
                MarkupNode::Element(child) => {
                    self.break_line(depth + 1)?;
                    self.element(child, depth + 1)?;
                }
                MarkupNode::Text(text) => self.emit(Event::Text(BytesText::new(text)))?,
                MarkupNode::CData(text) => self.cdata(text)?,
            }
        }
        if element.has_element_children() {
            self.break_line(depth)?;
        }
        self.emit(Event::End(BytesEnd::new(element.name.as_str())))
    }

    fn cdata(&mut self, text: &str) -> Result<(), ExportError> {
        let mut rest = text;
        while let Some(at) = rest.find(CDATA_END) {
            // Keep "]]" in this section and start the next one at ">".
            let (head, tail) = rest.split_at(at + 2);
            self.emit(Event::CData(BytesCData::new(head)))?;
            rest = tail;
        }
        self.emit(Event::CData(BytesCData::new(rest)))
    }
}
