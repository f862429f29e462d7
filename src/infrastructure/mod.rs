//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Export: WXR emitters, legacy array encoding and the XML serializer
//! - Queues: Keyed in-memory staging queues
//! - Config: Binary configuration

pub mod config;
pub mod export;
pub mod queues;
