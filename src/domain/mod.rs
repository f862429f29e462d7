//! Domain layer - Core export model with no I/O
//!
//! This layer contains:
//! - Entities: Terms, posts, products, menu items, attachments, users
//! - Value Objects: Identifiers, site info, render options, metadata values
//! - Domain Services: Identifier generation and slug normalization
//! - Errors: Failures raised while staging or rendering

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
