//! Application services - Use case implementations
//!
//! Entities are submitted to the staging registry and later assembled into
//! one document by the document service.

pub mod document_service;
pub mod staging_service;

pub use document_service::{WxrDocument, GENERATOR, WXR_VERSION};
pub use staging_service::{Staged, StagedEntities, StagingRegistry};
