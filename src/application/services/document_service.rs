//! Document Service - Assembles the WXR document from staged entities
//!
//! The channel is built incrementally. Rendering flushes every staging queue
//! into it in a fixed order so that the terms, menus and users an importer
//! resolves by name always come before the items that reference them:
//!
//! 1. users
//! 2. terms: tags, categories, product categories, product attributes, menus
//! 3. posts and pages
//! 4. products
//! 5. menu items
//! 6. attachments

use tracing::{debug, info, instrument};

use crate::application::dto::FeedManifest;
use crate::application::ports::outbound::{MarkupElement, MarkupNode, MarkupSerializer};
use crate::application::services::staging_service::{StagedEntities, StagingRegistry};
use crate::domain::entities::TermKind;
use crate::domain::errors::ExportError;
use crate::domain::services::IdGenerator;
use crate::domain::value_objects::{RenderOptions, SiteInfo};
use crate::infrastructure::export::emitters::{
    emit_attachment, emit_menu_item, emit_post, emit_product, emit_term, emit_user,
};
use crate::infrastructure::export::QuickXmlSerializer;

/// Value of the channel `wp:wxr_version` element
pub const WXR_VERSION: &str = "1.2";

/// Value of the channel `generator` element
pub const GENERATOR: &str = concat!("wxr-engine/", env!("CARGO_PKG_VERSION"));

const RSS_NAMESPACES: [(&str, &str); 6] = [
    ("xmlns:excerpt", "http://wordpress.org/export/1.2/expert"),
    ("xmlns:content", "http://purl.org/rss/1.0/modules/content/"),
    ("xmlns:wfw", "http://wellformedweb.org/CommentAPI/"),
    ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
    ("xmlns:wp", "http://wordpress.org/export/1.2/"),
    ("version", "2.0"),
];

/// One export document: its channel, staging registry and serializer
#[derive(Debug)]
pub struct WxrDocument<S = QuickXmlSerializer> {
    site: SiteInfo,
    channel: MarkupElement,
    staging: StagingRegistry,
    serializer: S,
}

impl WxrDocument<QuickXmlSerializer> {
    /// Document with randomly drawn identifiers
    pub fn new(site: SiteInfo) -> Self {
        Self::with_ids(site, IdGenerator::from_entropy())
    }

    /// Document whose generated identifiers are reproducible
    pub fn seeded(site: SiteInfo, seed: u64) -> Self {
        Self::with_ids(site, IdGenerator::seeded(seed))
    }

    pub fn with_ids(site: SiteInfo, ids: IdGenerator) -> Self {
        Self::with_serializer(site, ids, QuickXmlSerializer::new())
    }

    /// Document holding every entry of `manifest`, staged in manifest order
    pub fn from_manifest(manifest: FeedManifest, ids: IdGenerator) -> Result<Self, ExportError> {
        let mut document = Self::with_ids(manifest.site.clone(), ids);
        document.stage_manifest(manifest)?;
        Ok(document)
    }
}

impl<S: MarkupSerializer> WxrDocument<S> {
    pub fn with_serializer(site: SiteInfo, ids: IdGenerator, serializer: S) -> Self {
        let channel = channel_header(&site);
        Self {
            site,
            channel,
            staging: StagingRegistry::new(ids),
            serializer,
        }
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    /// Registry that entities are submitted to
    pub fn staging(&mut self) -> &mut StagingRegistry {
        &mut self.staging
    }

    /// Stage every entry of a manifest. The manifest's site is not applied;
    /// it is fixed when the document is created.
    #[instrument(skip_all)]
    pub fn stage_manifest(&mut self, manifest: FeedManifest) -> Result<(), ExportError> {
        let staging = &mut self.staging;
        for user in manifest.users {
            staging.stage_user(user)?;
        }
        for tag in manifest.tags {
            staging.stage_tag(tag)?;
        }
        for category in manifest.categories {
            staging.stage_category(category)?;
        }
        for category in manifest.product_categories {
            staging.stage_product_category(category)?;
        }
        for attribute in manifest.product_attributes {
            staging.stage_product_attribute(attribute)?;
        }
        for menu in manifest.menus {
            staging.stage_menu(menu)?;
        }
        for post in manifest.posts {
            staging.stage_post(post)?;
        }
        for page in manifest.pages {
            staging.stage_page(page)?;
        }
        for product in manifest.products {
            staging.stage_product(product)?;
        }
        for menu_item in manifest.menu_items {
            staging.stage_menu_item(menu_item)?;
        }
        for attachment in manifest.attachments {
            staging.stage_attachment(attachment)?;
        }
        Ok(())
    }

    /// Flush all pending entities into the channel and serialize the document.
    ///
    /// Rendering again re-serializes the same channel; entities already
    /// written are never written twice.
    #[instrument(skip_all, fields(pretty = options.pretty))]
    pub fn render(&mut self, options: &RenderOptions) -> Result<String, ExportError> {
        let flushed = self.flush();
        info!(entities = flushed, "Assembled WXR document");

        let mut root = rss_root();
        root.push(std::mem::take(&mut self.channel));
        let output = self.serializer.serialize(&root, options);
        if let Some(MarkupNode::Element(channel)) = root.children.pop() {
            self.channel = channel;
        }
        output
    }

    /// Drain the staging queues into the channel in emission order.
    /// Returns the number of entities written.
    fn flush(&mut self) -> usize {
        let StagedEntities {
            users,
            terms,
            posts,
            products,
            menu_items,
            attachments,
        } = self.staging.drain();
        let channel = &mut self.channel;

        for user in &users {
            emit_user(channel, user);
        }
        for kind in TermKind::EMISSION_ORDER {
            for term in terms.iter().filter(|term| term.kind == kind) {
                emit_term(channel, term);
            }
        }
        for post in &posts {
            emit_post(channel, post);
        }
        for product in &products {
            emit_product(channel, product);
        }
        for menu_item in &menu_items {
            emit_menu_item(channel, menu_item);
        }
        for attachment in &attachments {
            emit_attachment(channel, attachment);
        }

        debug!(
            users = users.len(),
            terms = terms.len(),
            posts = posts.len(),
            products = products.len(),
            menu_items = menu_items.len(),
            attachments = attachments.len(),
            "Flushed staging queues"
        );
        users.len()
            + terms.len()
            + posts.len()
            + products.len()
            + menu_items.len()
            + attachments.len()
    }
}

fn rss_root() -> MarkupElement {
    RSS_NAMESPACES
        .iter()
        .fold(MarkupElement::new("rss"), |rss, (key, value)| rss.attr(*key, *value))
}

fn channel_header(site: &SiteInfo) -> MarkupElement {
    MarkupElement::new("channel")
        .child(MarkupElement::new("wp:wxr_version").text(WXR_VERSION))
        .child(MarkupElement::new("title").text(site.name.as_str()))
        .child(MarkupElement::new("link").text(site.url.as_str()))
        .child(MarkupElement::new("description").text(site.description.as_str()))
        .child(MarkupElement::new("language").text(site.language.as_str()))
        .child(MarkupElement::new("wp:base_site_url").text(site.base_site_url()))
        .child(MarkupElement::new("wp:base_blog_url").text(site.base_blog_url()))
        .child(MarkupElement::new("generator").text(GENERATOR))
}
