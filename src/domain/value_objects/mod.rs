//! Value objects - Immutable objects defined by their attributes

mod ids;
mod meta;
mod settings;

pub use ids::*;
pub use meta::{format_number, LegacyScalar, MetaValue, NumberOrText};
pub use settings::{RenderOptions, SiteInfo};
