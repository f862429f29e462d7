//! Errors raised while staging entities or rendering a document

use std::string::FromUtf8Error;

/// Errors that can occur while building an export document
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A submission lacked a field the output format cannot do without
    #[error("{entity} is missing required field `{field}`")]
    MissingRequiredField {
        entity: &'static str,
        field: &'static str,
    },

    /// Every identifier in the document namespace has been issued
    #[error("Identifier space exhausted: all {capacity} identifiers are in use")]
    IdentifierSpaceExhausted { capacity: u32 },

    /// The XML writer rejected an event
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The serialized document was not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl ExportError {
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingRequiredField { entity, field }
    }
}
