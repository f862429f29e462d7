//! Staging Service - Deduplicating, cross-referencing entity registry
//!
//! Submissions are validated, given identifiers, and queued per kind until
//! the document is assembled. Implicit references are resolved here: term
//! names inside posts and products become staged terms, product images become
//! staged attachments, and menu items stage the menu they belong to.
//!
//! Duplicates are silent no-ops: the first submission for an identity key
//! wins and later payloads are discarded. References always resolve to the
//! canonical record, so a duplicate image or term never leaves a dangling id.
//!
//! Every required field of a submission, nested terms and images included,
//! is checked before anything is staged. A rejected submission leaves the
//! registry as it was.

use chrono::Utc;
use tracing::{debug, instrument};

use crate::application::dto::{
    AttachmentInput, AttributeInput, CategoriesInput, ImageInput, ImagesInput, MenuInput,
    MenuItemInput, ParentRef, PostInput, ProductInput, TermInput, TermRefInput, UserInput,
};
use crate::domain::entities::{
    title_from_url, Attachment, AttributeRecord, MenuItem, Post, PostCore, PostType, Product,
    ProductImage, ProductImages, Term, TermKey, TermKind, TermParent, TermRef, User,
    PRODUCT_IMAGE,
};
use crate::domain::errors::ExportError;
use crate::domain::services::{attribute_taxonomy, slug, IdGenerator};
use crate::domain::value_objects::{PostId, TermId, UserId};
use crate::infrastructure::queues::KeyedQueue;

/// Outcome of a staging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staged {
    /// The entity was queued for emission
    Queued,
    /// An entity with the same identity was already staged; the payload was dropped
    Duplicate,
}

impl Staged {
    pub fn is_queued(&self) -> bool {
        matches!(self, Staged::Queued)
    }

    fn from_inserted(inserted: bool) -> Self {
        if inserted {
            Staged::Queued
        } else {
            Staged::Duplicate
        }
    }
}

/// Everything pending emission, drained in one go by the assembler
#[derive(Debug, Default)]
pub struct StagedEntities {
    pub users: Vec<User>,
    pub terms: Vec<Term>,
    pub posts: Vec<Post>,
    pub products: Vec<Product>,
    pub menu_items: Vec<MenuItem>,
    pub attachments: Vec<Attachment>,
}

impl StagedEntities {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.terms.is_empty()
            && self.posts.is_empty()
            && self.products.is_empty()
            && self.menu_items.is_empty()
            && self.attachments.is_empty()
    }
}

/// Per-document staging registry
#[derive(Debug)]
pub struct StagingRegistry {
    ids: IdGenerator,
    terms: KeyedQueue<TermKey, Term>,
    posts: KeyedQueue<PostId, Post>,
    products: KeyedQueue<PostId, Product>,
    menu_items: KeyedQueue<String, MenuItem>,
    attachments: KeyedQueue<String, Attachment>,
    users: KeyedQueue<String, User>,
}

impl StagingRegistry {
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            ids,
            terms: KeyedQueue::new(Term::key),
            posts: KeyedQueue::new(|post: &Post| post.core.id),
            products: KeyedQueue::new(|product: &Product| product.core.id),
            menu_items: KeyedQueue::new(|item: &MenuItem| item.core.title.clone()),
            attachments: KeyedQueue::new(|attachment: &Attachment| attachment.core.title.clone()),
            users: KeyedQueue::new(|user: &User| user.username.clone()),
        }
    }

    /// Stage a taxonomy term of the given kind
    #[instrument(skip(self, input))]
    pub fn stage_term(&mut self, kind: TermKind, input: TermInput) -> Result<Staged, ExportError> {
        let entity = kind.entity_name();
        let name = require(input.name, entity, "name")?;
        let value = match kind {
            TermKind::ProductAttribute => Some(require(input.value, entity, "value")?),
            _ => None,
        };
        let id = self.resolve_id(input.id)?;

        let slug = input
            .slug
            .unwrap_or_else(|| slug(value.as_deref().unwrap_or(&name)));
        let taxonomy = match kind {
            TermKind::ProductAttribute => {
                Some(input.taxonomy.unwrap_or_else(|| attribute_taxonomy(&name)))
            }
            _ => None,
        };

        let term = Term {
            id: TermId::new(id),
            kind,
            name,
            slug,
            parent: input.parent.map(TermParent::from).unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            value,
            taxonomy,
        };
        Ok(self.queue_term(term))
    }

    pub fn stage_tag(&mut self, input: TermInput) -> Result<Staged, ExportError> {
        self.stage_term(TermKind::Tag, input)
    }

    pub fn stage_category(&mut self, input: TermInput) -> Result<Staged, ExportError> {
        self.stage_term(TermKind::Category, input)
    }

    pub fn stage_product_category(&mut self, input: TermInput) -> Result<Staged, ExportError> {
        self.stage_term(TermKind::ProductCategory, input)
    }

    pub fn stage_product_attribute(&mut self, input: TermInput) -> Result<Staged, ExportError> {
        self.stage_term(TermKind::ProductAttribute, input)
    }

    /// Stage a navigation menu; the slug is derived from the name when absent
    pub fn stage_menu(&mut self, input: MenuInput) -> Result<Staged, ExportError> {
        let mut term = TermInput::from(input);
        if term.slug.is_none() {
            term.slug = term.name.as_deref().map(slug);
        }
        self.stage_term(TermKind::NavMenu, term)
    }

    /// Stage a menu item, staging its menu first. Items are identified by title.
    #[instrument(skip(self, input))]
    pub fn stage_menu_item(&mut self, input: MenuItemInput) -> Result<Staged, ExportError> {
        let menu_name = require(input.menu_name, "menu item", "menu_name")?;
        let id = self.resolve_id(input.id)?;
        let menu_slug = slug(&menu_name);
        self.stage_menu(MenuInput {
            id: None,
            name: Some(menu_name.clone()),
            slug: Some(menu_slug.clone()),
        })?;

        let title = input.title.unwrap_or_else(|| slug(id));
        let item = MenuItem {
            core: PostCore {
                id: PostId::new(id),
                slug: slug(&title),
                title,
                url: input.url.unwrap_or_default(),
                date: input.date.unwrap_or_else(Utc::now),
                author: input.author.unwrap_or_default(),
                content: input.content.unwrap_or_default(),
                summary: input.excerpt.unwrap_or_default(),
                status: input.status.unwrap_or_else(|| "publish".to_string()),
                comment_status: "closed".to_string(),
                ping_status: "closed".to_string(),
                password: input.password.unwrap_or_default(),
            },
            guid: input.guid.unwrap_or_default(),
            parent: input.parent.unwrap_or(0),
            menu_order: input.menu_order.unwrap_or(0),
            menu_name,
            menu_slug,
            item_type: input.menu_item_type.unwrap_or_else(|| "taxonomy".to_string()),
            item_parent: input.menu_item_menu_item_parent.unwrap_or(0),
            object_id: input.menu_item_object_id,
            object: input.menu_item_object,
            target: input.menu_item_target.unwrap_or_default(),
            classes: input.menu_item_classes,
            xfn: input.menu_item_xfn.unwrap_or_default(),
            item_url: input.menu_item_url.unwrap_or_default(),
        };

        let staged = Staged::from_inserted(self.menu_items.insert_if_absent(item));
        log_outcome("menu item", staged);
        Ok(staged)
    }

    /// Stage a post, staging its tags and categories first
    #[instrument(skip(self, input))]
    pub fn stage_post(&mut self, input: PostInput) -> Result<Staged, ExportError> {
        let entity = match input.post_type.unwrap_or_default() {
            PostType::Post => "post",
            PostType::Page => "page",
        };
        let title = require(input.title, entity, "title")?;
        let url = require(input.url, entity, "url")?;
        let tags = term_inputs(TermKind::Tag, input.tags)?;
        let categories = term_inputs(TermKind::Category, input.categories)?;

        let tags = self.stage_term_refs(TermKind::Tag, tags)?;
        let categories = self.stage_term_refs(TermKind::Category, categories)?;
        let id = self.resolve_id(input.id)?;

        let post = Post {
            core: PostCore {
                id: PostId::new(id),
                slug: input.slug.unwrap_or_else(|| slug(&title)),
                title,
                url,
                date: input.date.unwrap_or_else(Utc::now),
                author: input.author.unwrap_or_default(),
                content: input.content.unwrap_or_default(),
                summary: input.summary.unwrap_or_default(),
                status: input.status.unwrap_or_else(|| "publish".to_string()),
                comment_status: input.comment_status.unwrap_or_else(|| "open".to_string()),
                ping_status: input.ping_status.unwrap_or_else(|| "open".to_string()),
                password: input.password.unwrap_or_default(),
            },
            post_type: input.post_type.unwrap_or_default(),
            categories,
            tags,
            thumbnail_id: input.image_id,
        };

        let staged = Staged::from_inserted(self.posts.insert_if_absent(post));
        log_outcome(entity, staged);
        Ok(staged)
    }

    pub fn stage_page(&mut self, mut input: PostInput) -> Result<Staged, ExportError> {
        input.post_type = Some(PostType::Page);
        self.stage_post(input)
    }

    /// Stage a product, resolving its images, tags, categories and attributes
    #[instrument(skip(self, input))]
    pub fn stage_product(&mut self, input: ProductInput) -> Result<Staged, ExportError> {
        let title = require(input.title, "product", "title")?;
        let url = require(input.url, "product", "url")?;
        let author = input.author.unwrap_or_default();
        let images = image_sources(input.images)?;
        let tags = term_inputs(TermKind::Tag, input.tags)?;
        let categories = match input.categories {
            Some(CategoriesInput::List(list)) => {
                CategorySource::Terms(term_inputs(TermKind::ProductCategory, list)?)
            }
            Some(CategoriesInput::Path(path)) => CategorySource::Path(path),
            None => CategorySource::Terms(Vec::new()),
        };
        let attributes = attribute_records(input.attributes)?;
        let default_attributes = attribute_records(input.default_attributes)?;

        // Past this point only identifier exhaustion can fail.
        let images = self.stage_product_images(images, &author)?;
        let tags = self.stage_term_refs(TermKind::Tag, tags)?;
        let categories = match categories {
            CategorySource::Terms(terms) => {
                self.stage_term_refs(TermKind::ProductCategory, terms)?
            }
            CategorySource::Path(path) => self.stage_category_path(&path)?,
        };
        for record in &attributes {
            self.stage_product_attribute(TermInput::attribute(&record.name, &record.value))?;
        }

        let id = self.resolve_id(input.id)?;
        let product = Product {
            core: PostCore {
                id: PostId::new(id),
                slug: input.slug.unwrap_or_else(|| slug(&title)),
                title,
                url,
                date: input.date.unwrap_or_else(Utc::now),
                author,
                content: input.content.unwrap_or_default(),
                summary: input.summary.unwrap_or_default(),
                status: input.status.unwrap_or_else(|| "publish".to_string()),
                comment_status: input.comment_status.unwrap_or_else(|| "open".to_string()),
                ping_status: input.ping_status.unwrap_or_else(|| "closed".to_string()),
                password: input.password.unwrap_or_default(),
            },
            product_type: input.product_type.unwrap_or_else(|| "simple".to_string()),
            categories,
            tags,
            attributes,
            default_attributes,
            images,
            commerce: input.commerce,
        };

        let staged = Staged::from_inserted(self.products.insert_if_absent(product));
        log_outcome("product", staged);
        Ok(staged)
    }

    /// Stage a media attachment. Attachments are identified by title.
    #[instrument(skip(self, input))]
    pub fn stage_attachment(&mut self, input: AttachmentInput) -> Result<Staged, ExportError> {
        self.queue_attachment(input).map(|(staged, _)| staged)
    }

    /// Stage an attachment and return the id references to it should use:
    /// its own, or the id of the attachment that already claimed its title.
    fn queue_attachment(
        &mut self,
        input: AttachmentInput,
    ) -> Result<(Staged, PostId), ExportError> {
        let url = require(input.url, "attachment", "url")?;
        let title = input.title.unwrap_or_else(|| title_from_url(&url));
        if let Some(existing) = self.attachments.claimed(&title) {
            let existing = *existing;
            log_outcome("attachment", Staged::Duplicate);
            return Ok((Staged::Duplicate, existing));
        }

        let id = PostId::new(self.resolve_id(input.id)?);
        let description = input.description.unwrap_or_default();

        let attachment = Attachment {
            core: PostCore {
                id,
                slug: slug(&title),
                title,
                url,
                date: input.date.unwrap_or_else(Utc::now),
                author: input.author.unwrap_or_else(|| "admin".to_string()),
                content: description.clone(),
                summary: description,
                status: "inherit".to_string(),
                comment_status: input.comment_status.unwrap_or_else(|| "open".to_string()),
                ping_status: input.ping_status.unwrap_or_else(|| "closed".to_string()),
                password: String::new(),
            },
            file: input.file,
            parent: input.post_id,
            meta_data: input.meta_data,
            attachment_type: input
                .attachment_type
                .unwrap_or_else(|| PRODUCT_IMAGE.to_string()),
        };

        let staged = Staged::from_inserted(self.attachments.insert_if_absent(attachment));
        log_outcome("attachment", staged);
        Ok((staged, id))
    }

    /// Stage a user. Users are identified by login name.
    #[instrument(skip(self, input))]
    pub fn stage_user(&mut self, input: UserInput) -> Result<Staged, ExportError> {
        let username = require(input.username, "user", "username")?;
        let id = self.resolve_id(input.id)?;
        let user = User {
            id: UserId::new(id),
            display_name: input
                .display_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| username.clone()),
            username,
            email: input.email.unwrap_or_default(),
            first_name: input.first_name.unwrap_or_default(),
            last_name: input.last_name.unwrap_or_default(),
        };

        let staged = Staged::from_inserted(self.users.insert_if_absent(user));
        log_outcome("user", staged);
        Ok(staged)
    }

    pub fn is_term_staged(&self, kind: TermKind, name: &str, value: Option<&str>) -> bool {
        self.terms.contains(&TermKey {
            kind,
            name: name.to_string(),
            value: value.map(str::to_string),
        })
    }

    /// Pending terms in staging order
    pub fn pending_terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn pending_attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter()
    }

    /// Take every pending entity; identity keys stay reserved
    pub fn drain(&mut self) -> StagedEntities {
        StagedEntities {
            users: self.users.drain(),
            terms: self.terms.drain(),
            posts: self.posts.drain(),
            products: self.products.drain(),
            menu_items: self.menu_items.drain(),
            attachments: self.attachments.drain(),
        }
    }

    fn resolve_id(&mut self, id: Option<u32>) -> Result<u32, ExportError> {
        match id {
            Some(id) => {
                if !self.ids.reserve(id) {
                    debug!(id, "Caller-supplied id is already in use");
                }
                Ok(id)
            }
            None => self.ids.next_id(),
        }
    }

    fn queue_term(&mut self, term: Term) -> Staged {
        let entity = term.kind.entity_name();
        let staged = Staged::from_inserted(self.terms.insert_if_absent(term));
        log_outcome(entity, staged);
        staged
    }

    /// Stage checked term submissions, returning how the item refers to each
    fn stage_term_refs(
        &mut self,
        kind: TermKind,
        inputs: Vec<TermInput>,
    ) -> Result<Vec<TermRef>, ExportError> {
        inputs
            .into_iter()
            .map(|input| self.stage_term_ref(kind, input))
            .collect()
    }

    /// Stage a term and resolve the reference to whichever term owns its name
    fn stage_term_ref(
        &mut self,
        kind: TermKind,
        input: TermInput,
    ) -> Result<TermRef, ExportError> {
        let key = TermKey {
            kind,
            name: input.name.clone().unwrap_or_default(),
            value: None,
        };
        self.stage_term(kind, input)?;
        self.terms
            .claimed(&key)
            .cloned()
            .ok_or_else(|| ExportError::missing(kind.entity_name(), "name"))
    }

    /// `"Top > Middle > Leaf"`: every level is a product category whose
    /// parent is the slug of the level before it; the top level has no parent.
    fn stage_category_path(&mut self, path: &str) -> Result<Vec<TermRef>, ExportError> {
        let mut refs = Vec::new();
        let mut parent: Option<String> = None;
        for name in CategoriesInput::path_segments(path) {
            let term_ref = self.stage_term_ref(
                TermKind::ProductCategory,
                TermInput {
                    name: Some(name.to_string()),
                    slug: Some(slug(name)),
                    parent: parent.take().map(ParentRef::Slug),
                    ..TermInput::default()
                },
            )?;
            parent = Some(term_ref.slug.clone());
            refs.push(term_ref);
        }
        Ok(refs)
    }

    fn stage_product_images(
        &mut self,
        images: ImageSources,
        author: &str,
    ) -> Result<ProductImages, ExportError> {
        let sources = match images {
            ImageSources::None => return Ok(ProductImages::None),
            ImageSources::Thumbnail(id) => return Ok(ProductImages::Thumbnail(id)),
            ImageSources::Gallery(sources) => sources,
        };

        let mut gallery = Vec::with_capacity(sources.len());
        for source in sources {
            let (_, id) = self.queue_attachment(AttachmentInput {
                id: source.id,
                title: Some(source.title.clone()),
                url: Some(source.url.clone()),
                author: (!author.is_empty()).then(|| author.to_string()),
                ..AttachmentInput::default()
            })?;
            gallery.push(ProductImage {
                id,
                title: source.title,
                url: source.url,
            });
        }
        Ok(ProductImages::Gallery(gallery))
    }
}

/// A product image whose url has been checked
struct ImageSource {
    id: Option<u32>,
    title: String,
    url: String,
}

enum ImageSources {
    None,
    Thumbnail(u32),
    Gallery(Vec<ImageSource>),
}

enum CategorySource {
    Terms(Vec<TermInput>),
    Path(String),
}

fn image_sources(images: Option<ImagesInput>) -> Result<ImageSources, ExportError> {
    let list = match images {
        None => return Ok(ImageSources::None),
        Some(ImagesInput::Thumbnail(id)) => return Ok(ImageSources::Thumbnail(id)),
        Some(ImagesInput::List(list)) => list,
    };
    list.into_iter()
        .map(|image| -> Result<ImageSource, ExportError> {
            let (id, title, url) = match image {
                ImageInput::Url(url) => (None, None, Some(url)),
                ImageInput::Image(image) => (image.id, image.title, image.url),
            };
            let url = require(url, "product image", "url")?;
            Ok(ImageSource {
                id,
                title: title.unwrap_or_else(|| title_from_url(&url)),
                url,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ImageSources::Gallery)
}

/// Normalize term references, checking each one names its term
fn term_inputs(kind: TermKind, refs: Vec<TermRefInput>) -> Result<Vec<TermInput>, ExportError> {
    refs.into_iter()
        .map(|term_ref| -> Result<TermInput, ExportError> {
            let input = TermInput::from(term_ref);
            require(input.name.clone(), kind.entity_name(), "name")?;
            Ok(input)
        })
        .collect()
}

fn require(
    value: Option<String>,
    entity: &'static str,
    field: &'static str,
) -> Result<String, ExportError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ExportError::missing(entity, field))
}

fn attribute_records(inputs: Vec<AttributeInput>) -> Result<Vec<AttributeRecord>, ExportError> {
    inputs.into_iter().map(attribute_record).collect()
}

fn attribute_record(input: AttributeInput) -> Result<AttributeRecord, ExportError> {
    Ok(AttributeRecord {
        name: require(input.name, "product attribute", "name")?,
        value: require(input.value, "product attribute", "value")?,
        position: input.position,
        is_visible: input.is_visible,
        is_variation: input.is_variation,
    })
}

fn log_outcome(entity: &str, staged: Staged) {
    match staged {
        Staged::Queued => debug!(entity, "Staged"),
        Staged::Duplicate => debug!(entity, "Duplicate submission ignored"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ImageObject;

    fn registry() -> StagingRegistry {
        StagingRegistry::new(IdGenerator::seeded(42))
    }

    #[test]
    fn test_duplicate_terms_keep_first_payload() {
        let mut registry = registry();
        let first = registry
            .stage_category(TermInput::named("News").with_slug("first"))
            .unwrap();
        let second = registry
            .stage_category(TermInput::named("News").with_slug("second"))
            .unwrap();
        assert_eq!(first, Staged::Queued);
        assert_eq!(second, Staged::Duplicate);

        let terms: Vec<_> = registry.pending_terms().collect();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].slug, "first");
    }

    #[test]
    fn test_same_name_in_different_taxonomies_is_not_a_duplicate() {
        let mut registry = registry();
        registry.stage_tag(TermInput::named("News")).unwrap();
        registry.stage_category(TermInput::named("News")).unwrap();
        assert_eq!(registry.pending_terms().count(), 2);
    }

    #[test]
    fn test_attributes_are_keyed_by_name_and_value() {
        let mut registry = registry();
        registry
            .stage_product_attribute(TermInput::attribute("Color", "Red"))
            .unwrap();
        registry
            .stage_product_attribute(TermInput::attribute("Color", "Blue"))
            .unwrap();
        let dup = registry
            .stage_product_attribute(TermInput::attribute("Color", "Red"))
            .unwrap();
        assert_eq!(dup, Staged::Duplicate);

        let terms: Vec<_> = registry.pending_terms().collect();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].slug, "red");
        assert_eq!(terms[0].taxonomy.as_deref(), Some("pa_color"));
    }

    #[test]
    fn test_missing_required_fields_fail_at_staging() {
        let mut registry = registry();
        let err = registry.stage_tag(TermInput::default()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingRequiredField { entity: "tag", field: "name" }
        ));

        let err = registry
            .stage_post(PostInput {
                title: Some("Hello".into()),
                ..PostInput::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingRequiredField { entity: "post", field: "url" }
        ));

        let err = registry
            .stage_product_attribute(TermInput::named("Color"))
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingRequiredField { field: "value", .. }
        ));
    }

    #[test]
    fn test_post_stages_its_terms() {
        let mut registry = registry();
        let mut post = PostInput::new("Hello World", "https://example.test/hello");
        post.tags = vec!["Rust".into()];
        post.categories = vec![TermRefInput::Term(TermInput::named("Guides").with_slug("guides"))];
        registry.stage_post(post).unwrap();

        assert!(registry.is_term_staged(TermKind::Tag, "Rust", None));
        assert!(registry.is_term_staged(TermKind::Category, "Guides", None));

        let staged = registry.drain();
        let post = &staged.posts[0];
        assert_eq!(post.core.slug, "hello-world");
        assert_eq!(post.tags[0], TermRef { name: "Rust".into(), slug: "rust".into() });
        assert_eq!(post.core.comment_status, "open");
    }

    #[test]
    fn test_posts_are_deduplicated_by_id() {
        let mut registry = registry();
        let mut first = PostInput::new("First", "https://example.test/1");
        first.id = Some(10);
        let mut second = PostInput::new("Second", "https://example.test/2");
        second.id = Some(10);
        assert!(registry.stage_post(first).unwrap().is_queued());
        assert!(!registry.stage_page(second).unwrap().is_queued());

        let posts = registry.drain().posts;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].core.title, "First");
    }

    #[test]
    fn test_category_path_builds_parent_chain() {
        let mut registry = registry();
        let mut product = ProductInput::new("Boot", "https://example.test/boot");
        product.categories = Some(CategoriesInput::Path("A > B > C".into()));
        registry.stage_product(product).unwrap();

        let terms: Vec<_> = registry
            .pending_terms()
            .filter(|t| t.kind == TermKind::ProductCategory)
            .collect();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0].name, "A");
        assert_eq!(terms[0].parent, TermParent::Root);
        assert_eq!(terms[1].name, "B");
        assert_eq!(terms[1].parent, TermParent::Slug("a".into()));
        assert_eq!(terms[2].name, "C");
        assert_eq!(terms[2].parent, TermParent::Slug("b".into()));

        let product = &registry.drain().products[0];
        let names: Vec<_> = product.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_category_string_without_separator_is_single_level() {
        let mut registry = registry();
        let mut product = ProductInput::new("Boot", "https://example.test/boot");
        product.categories = Some(CategoriesInput::Path("Shoes".into()));
        registry.stage_product(product).unwrap();

        let terms: Vec<_> = registry.pending_terms().collect();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].kind, TermKind::ProductCategory);
        assert!(terms[0].parent.is_root());
    }

    #[test]
    fn test_product_images_become_attachments() {
        let mut registry = registry();
        let mut product = ProductInput::new("Boot", "https://example.test/boot");
        product.author = Some("editor".into());
        product.images = Some(ImagesInput::List(vec![
            ImageInput::Url("https://cdn.test/boot.jpg?w=300".into()),
            ImageInput::Image(ImageObject {
                id: Some(77),
                title: Some("Side view".into()),
                url: Some("https://cdn.test/side.jpg".into()),
            }),
        ]));
        registry.stage_product(product).unwrap();

        let attachments: Vec<_> = registry.pending_attachments().collect();
        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].core.title, "boot.jpg");
        assert_eq!(attachments[0].core.author, "editor");
        assert_eq!(attachments[1].core.id, PostId::new(77));

        let product = &registry.drain().products[0];
        match &product.images {
            ProductImages::Gallery(images) => {
                assert_eq!(images.len(), 2);
                assert_eq!(images[1].title, "Side view");
            }
            other => panic!("expected a gallery, got {:?}", other),
        }
    }

    #[test]
    fn test_product_attributes_stage_terms() {
        let mut registry = registry();
        let mut product = ProductInput::new("Boot", "https://example.test/boot");
        product.attributes = vec![AttributeInput::new("Color", "Red")];
        product.tags = vec!["Winter".into()];
        registry.stage_product(product).unwrap();

        assert!(registry.is_term_staged(TermKind::ProductAttribute, "Color", Some("Red")));
        assert!(registry.is_term_staged(TermKind::Tag, "Winter", None));
    }

    #[test]
    fn test_menu_item_stages_menu_and_dedups_by_title() {
        let mut registry = registry();
        registry
            .stage_menu_item(MenuItemInput::new("Main Menu", "Shop"))
            .unwrap();
        let dup = registry
            .stage_menu_item(MenuItemInput::new("Footer", "Shop"))
            .unwrap();
        assert_eq!(dup, Staged::Duplicate);

        let menus: Vec<_> = registry
            .pending_terms()
            .filter(|t| t.kind == TermKind::NavMenu)
            .collect();
        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].slug, "main-menu");

        let items = registry.drain().menu_items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].menu_slug, "main-menu");
        assert_eq!(items[0].item_type, "taxonomy");
    }

    #[test]
    fn test_menu_item_title_defaults_to_id() {
        let mut registry = registry();
        registry
            .stage_menu_item(MenuItemInput {
                id: Some(314),
                menu_name: Some("Main".into()),
                ..MenuItemInput::default()
            })
            .unwrap();
        assert_eq!(registry.drain().menu_items[0].core.title, "314");
    }

    #[test]
    fn test_users_dedup_by_login() {
        let mut registry = registry();
        registry.stage_user(UserInput::new("admin", "a@example.test")).unwrap();
        let dup = registry.stage_user(UserInput::new("admin", "b@example.test")).unwrap();
        assert_eq!(dup, Staged::Duplicate);

        let users = registry.drain().users;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "a@example.test");
        assert_eq!(users[0].display_name, "admin");
    }

    #[test]
    fn test_explicit_ids_are_reserved() {
        let mut registry = StagingRegistry::new(IdGenerator::seeded(5));
        let mut tag = TermInput::named("Reserved");
        tag.id = Some(123);
        registry.stage_tag(tag).unwrap();
        assert!(registry.ids.is_issued(123));
    }

    fn product_with_image(title: &str, image: &str) -> ProductInput {
        let mut product = ProductInput::new(title, "https://example.test/p");
        product.images = Some(ImagesInput::List(vec![ImageInput::Url(image.into())]));
        product
    }

    fn gallery_ids(product: &Product) -> Vec<PostId> {
        match &product.images {
            ProductImages::Gallery(images) => images.iter().map(|image| image.id).collect(),
            other => panic!("expected a gallery, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_image_title_resolves_to_first_attachment() {
        let mut registry = registry();
        registry
            .stage_product(product_with_image("Red", "https://cdn.test/red/front.jpg"))
            .unwrap();
        registry
            .stage_product(product_with_image("Blue", "https://cdn.test/blue/front.jpg"))
            .unwrap();

        let staged = registry.drain();
        assert_eq!(staged.attachments.len(), 1);
        let attachment_id = staged.attachments[0].core.id;
        assert_eq!(staged.products.len(), 2);
        for product in &staged.products {
            assert_eq!(gallery_ids(product), vec![attachment_id]);
        }
    }

    #[test]
    fn test_image_title_claimed_before_a_render_still_resolves() {
        let mut registry = registry();
        registry
            .stage_attachment(AttachmentInput {
                id: Some(501),
                url: Some("https://cdn.test/front.jpg".into()),
                ..AttachmentInput::default()
            })
            .unwrap();
        registry.drain();

        registry
            .stage_product(product_with_image("Red", "https://cdn.test/red/front.jpg"))
            .unwrap();
        let staged = registry.drain();
        assert!(staged.attachments.is_empty());
        assert_eq!(gallery_ids(&staged.products[0]), vec![PostId::new(501)]);
    }

    #[test]
    fn test_rejected_product_leaves_registry_unchanged() {
        let mut registry = registry();
        let mut product = product_with_image("Boot", "https://cdn.test/boot.jpg");
        product.tags = vec!["Winter".into()];
        product.categories = Some(CategoriesInput::List(vec![TermRefInput::Term(
            TermInput::default(),
        )]));

        let err = registry.stage_product(product).unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingRequiredField { entity: "product category", field: "name" }
        ));
        assert!(registry.drain().is_empty());
        assert_eq!(registry.ids.issued_count(), 0);
        assert!(!registry.is_term_staged(TermKind::Tag, "Winter", None));
    }

    #[test]
    fn test_rejected_product_attribute_stages_nothing() {
        let mut registry = registry();
        let mut product = product_with_image("Boot", "https://cdn.test/boot.jpg");
        product.attributes = vec![
            AttributeInput::new("Color", "Red"),
            AttributeInput {
                value: None,
                ..AttributeInput::new("Size", "XL")
            },
        ];

        assert!(registry.stage_product(product).is_err());
        assert!(registry.drain().is_empty());
    }

    #[test]
    fn test_blank_image_url_rejects_the_whole_product() {
        let mut registry = registry();
        let mut product = ProductInput::new("Boot", "https://example.test/boot");
        product.images = Some(ImagesInput::List(vec![
            ImageInput::Url("https://cdn.test/boot.jpg".into()),
            ImageInput::Url(String::new()),
        ]));

        let err = registry.stage_product(product).unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingRequiredField { entity: "product image", field: "url" }
        ));
        assert_eq!(registry.pending_attachments().count(), 0);
    }

    #[test]
    fn test_rejected_post_stages_no_tags() {
        let mut registry = registry();
        let mut post = PostInput::new("Hello", "https://example.test/hello");
        post.tags = vec!["Rust".into()];
        post.categories = vec![TermRefInput::Term(TermInput::default())];

        let err = registry.stage_post(post).unwrap_err();
        assert!(matches!(
            err,
            ExportError::MissingRequiredField { entity: "category", field: "name" }
        ));
        assert!(registry.drain().is_empty());
    }

    #[test]
    fn test_term_refs_use_the_canonical_slug() {
        let mut registry = registry();
        registry
            .stage_tag(TermInput::named("Rust").with_slug("rust-lang"))
            .unwrap();
        let mut post = PostInput::new("Hello", "https://example.test/hello");
        post.tags = vec![TermRefInput::Term(TermInput::named("Rust").with_slug("other"))];
        registry.stage_post(post).unwrap();

        let post = &registry.drain().posts[0];
        assert_eq!(post.tags[0].slug, "rust-lang");
    }

    #[test]
    fn test_colliding_explicit_ids_are_kept() {
        let mut registry = registry();
        let mut first = TermInput::named("A");
        first.id = Some(9);
        let mut second = TermInput::named("B");
        second.id = Some(9);
        registry.stage_tag(first).unwrap();
        assert!(registry.stage_tag(second).unwrap().is_queued());

        let ids: Vec<_> = registry.drain().terms.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![9, 9]);
    }

    #[test]
    fn test_duplicates_after_drain_stay_duplicates() {
        let mut registry = registry();
        registry.stage_tag(TermInput::named("Rust")).unwrap();
        assert_eq!(registry.drain().terms.len(), 1);
        let again = registry.stage_tag(TermInput::named("Rust")).unwrap();
        assert_eq!(again, Staged::Duplicate);
        assert!(registry.drain().is_empty());
    }
}
