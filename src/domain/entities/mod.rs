//! Domain entities - Records staged for export

mod attachment;
mod menu_item;
mod post;
mod product;
mod term;
mod user;

pub use attachment::{title_from_url, Attachment, PRODUCT_IMAGE};
pub use menu_item::MenuItem;
pub use post::{Post, PostCore, PostType};
pub use product::{
    AttributeRecord, CommerceFields, Product, ProductImage, ProductImages, PRODUCT_VERSION,
};
pub use term::{Term, TermKey, TermKind, TermParent, TermRef};
pub use user::User;

use std::fmt;

use crate::domain::value_objects::{PostId, UserId};

/// What later references to a staged record resolve to. The first record
/// staged under an identity key is canonical.
pub trait Canonical {
    type Handle: Clone + fmt::Debug;

    fn handle(&self) -> Self::Handle;
}

impl Canonical for Term {
    type Handle = TermRef;

    fn handle(&self) -> TermRef {
        TermRef {
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

impl Canonical for User {
    type Handle = UserId;

    fn handle(&self) -> UserId {
        self.id
    }
}

macro_rules! post_handle {
    ($($record:ty),*) => {
        $(
            impl Canonical for $record {
                type Handle = PostId;

                fn handle(&self) -> PostId {
                    self.core.id
                }
            }
        )*
    };
}

post_handle!(Post, Product, MenuItem, Attachment);
