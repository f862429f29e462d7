//! Site metadata and render options
//!
//! Both carry serde derives so a whole feed can be described in one JSON
//! manifest and so the binary can read render options from its config layer.

use serde::{Deserialize, Serialize};

/// Site-level metadata written into the channel header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteInfo {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Defaults to `url`
    #[serde(default)]
    pub base_site_url: Option<String>,
    /// Defaults to `url`
    #[serde(default)]
    pub base_blog_url: Option<String>,
}

impl SiteInfo {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            language: default_language(),
            base_site_url: None,
            base_blog_url: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_base_urls(mut self, site: impl Into<String>, blog: impl Into<String>) -> Self {
        self.base_site_url = Some(site.into());
        self.base_blog_url = Some(blog.into());
        self
    }

    pub fn base_site_url(&self) -> &str {
        self.base_site_url.as_deref().unwrap_or(&self.url)
    }

    pub fn base_blog_url(&self) -> &str {
        self.base_blog_url.as_deref().unwrap_or(&self.url)
    }
}

fn default_language() -> String {
    "en-US".to_string()
}

/// Output formatting for [`crate::WxrDocument::render`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderOptions {
    /// Insert newlines and indentation between elements
    pub pretty: bool,
    /// Indentation unit for one nesting level
    pub indent: String,
    /// Line terminator
    pub newline: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "    ".to_string(),
            newline: "\n".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }
}
