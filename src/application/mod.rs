//! Application layer - Use cases, submission payloads and ports
//!
//! This layer contains:
//! - DTOs: Loosely-typed submission payloads and the feed manifest
//! - Services: Staging registry and document assembly
//! - Ports: The markup serializer interface

pub mod dto;
pub mod ports;
pub mod services;
