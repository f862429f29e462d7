//! Data Transfer Objects - Submission payloads
//!
//! Submissions are deliberately loose: most fields are optional and several
//! accept more than one shape. Staging turns them into domain entities.

mod attachment;
mod manifest;
mod menu_item;
mod post;
mod product;
mod term;
mod user;

pub use attachment::AttachmentInput;
pub use manifest::FeedManifest;
pub use menu_item::MenuItemInput;
pub use post::PostInput;
pub use product::{
    AttributeInput, CategoriesInput, ImageInput, ImageObject, ImagesInput, ProductInput,
    CATEGORY_PATH_SEPARATOR,
};
pub use term::{MenuInput, ParentRef, TermInput, TermRefInput};
pub use user::UserInput;
