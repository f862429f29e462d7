//! WXR export
//!
//! Rendering of staged entities into a markup tree, the legacy array
//! encoding used inside metadata values, and the quick-xml serializer.

pub mod emitters;
pub mod field_table;
pub mod legacy_array;
mod xml_writer;

pub use legacy_array::{encode_attribute_set, encode_sequence, encode_string_sequence};
pub use xml_writer::QuickXmlSerializer;
