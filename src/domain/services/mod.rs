//! Domain services - Pure operations shared by staging and rendering

mod id_generator;
pub mod normalizer;

pub use id_generator::{IdGenerator, ID_SPACE};
pub use normalizer::{attribute_taxonomy, slug, taxonomy_token};
