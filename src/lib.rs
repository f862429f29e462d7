//! WXR Engine - Content-migration feed assembly for WordPress and WooCommerce
//!
//! Entities are staged on a [`WxrDocument`], deduplicated and cross-linked,
//! then rendered in an order that keeps every term, menu and user ahead of
//! the items that reference them.
//!
//! ```no_run
//! use wxr_engine::application::dto::PostInput;
//! use wxr_engine::{RenderOptions, SiteInfo, WxrDocument};
//!
//! let mut document = WxrDocument::new(SiteInfo::new("Demo", "https://example.test", ""));
//! let mut post = PostInput::new("Hello", "https://example.test/hello");
//! post.tags = vec!["Rust".into()];
//! document.staging().stage_post(post)?;
//! let xml = document.render(&RenderOptions::default())?;
//! # Ok::<(), wxr_engine::ExportError>(())
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::{Staged, StagingRegistry, WxrDocument};
pub use domain::errors::ExportError;
pub use domain::value_objects::{RenderOptions, SiteInfo};
