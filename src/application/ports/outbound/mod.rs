//! Outbound ports - Interfaces that the application requires from external systems

mod markup_port;

pub use markup_port::{MarkupElement, MarkupNode, MarkupSerializer};
