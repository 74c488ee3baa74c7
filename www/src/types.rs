//! Content model for the home page.
//!
//! Every block of the page is a plain value built from literals. Values are:
//!
//! - **Immutable** - built once, rendered as many times as needed
//! - **Clone-friendly** - components take owned props
//! - **Serializable** - `rugix-www check --dump-content` prints the content tree
//!
//! Rich text is a small tree of [`Inline`] nodes so that emphasis and links
//! survive all the way to the renderer instead of being baked into HTML strings.
//!
//! # Example
//!
//! ```rust
//! use rugix_www::types::{NavLink, RichText};
//!
//! let text = RichText::new()
//!     .text("Build on ")
//!     .link(NavLink::external("Debian", "https://www.debian.org/"))
//!     .text(".");
//!
//! assert_eq!(text.plain_text(), "Build on Debian.");
//! ```

use serde::Serialize;

use crate::error::{Result, SiteError};

/// Glyph prefixed to every feature bullet.
pub const SUCCESS_GLYPH: &str = "✅";

/// A single rich-text node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text, escaped on render
    Text(String),
    /// `<strong>` span
    Strong(RichText),
    /// `<em>` span
    Emphasis(RichText),
    /// Hyperlink with rich-text label
    Link(NavLink),
}

/// Ordered sequence of inline nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<Inline>);

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.0.push(Inline::Text(text.into()));
        self
    }

    pub fn strong(self, text: impl Into<String>) -> Self {
        self.strong_rich(RichText::from(text.into()))
    }

    pub fn strong_rich(mut self, inner: RichText) -> Self {
        self.0.push(Inline::Strong(inner));
        self
    }

    pub fn em(mut self, text: impl Into<String>) -> Self {
        self.0.push(Inline::Emphasis(RichText::from(text.into())));
        self
    }

    pub fn link(mut self, link: NavLink) -> Self {
        self.0.push(Inline::Link(link));
        self
    }

    /// Text content with all markup stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.0 {
            match node {
                Inline::Text(text) => out.push_str(text),
                Inline::Strong(inner) | Inline::Emphasis(inner) => inner.collect_text(out),
                Inline::Link(link) => link.label.collect_text(out),
            }
        }
    }

    /// All links in document order, including nested ones.
    pub fn links(&self) -> Vec<&NavLink> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<&'a NavLink>) {
        for node in &self.0 {
            match node {
                Inline::Text(_) => {}
                Inline::Strong(inner) | Inline::Emphasis(inner) => inner.collect_links(out),
                Inline::Link(link) => {
                    out.push(link);
                    link.label.collect_links(out);
                }
            }
        }
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::new().text(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        RichText::new().text(text)
    }
}

/// A clickable link.
///
/// External links open in a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: RichText,
    pub target: String,
    pub external: bool,
}

impl NavLink {
    /// Link opened in the current browsing context (internal route or same-site URL).
    pub fn new(label: impl Into<RichText>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            external: false,
        }
    }

    /// Outbound link opened in a new browsing context.
    pub fn external(label: impl Into<RichText>, target: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::new(label, target)
        }
    }

    /// Picks `external` for absolute http(s) URLs, `new` otherwise.
    pub fn auto(label: impl Into<RichText>, target: impl Into<String>) -> Self {
        let target = target.into();
        if is_absolute_url(&target) {
            Self::external(label, target)
        } else {
            Self::new(label, target)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.target.trim().is_empty() {
            return Err(SiteError::EmptyLinkTarget {
                label: self.label.plain_text(),
            });
        }
        Ok(())
    }
}

fn is_absolute_url(target: &str) -> bool {
    target.starts_with("https://") || target.starts_with("http://")
}

/// One bullet of a feature list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    pub glyph: String,
    pub body: RichText,
}

impl FeatureItem {
    pub fn new(body: impl Into<RichText>) -> Self {
        Self {
            glyph: SUCCESS_GLYPH.to_string(),
            body: body.into(),
        }
    }
}

/// A titled bullet list of product capabilities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FeatureList {
    pub heading: String,
    pub intro: RichText,
    /// Heading placed right above the bullets (after any embedded block)
    pub subheading: Option<String>,
    pub items: Vec<FeatureItem>,
    pub summary: RichText,
}

impl FeatureList {
    fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.intro
            .links()
            .into_iter()
            .chain(self.items.iter().flat_map(|item| item.body.links()))
            .chain(self.summary.links())
    }
}

/// Logical name of a static asset, relative to the static directory.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetKey(pub String);

impl AssetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A supported base distribution shown in the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    pub name: String,
    pub url: String,
    pub logo: AssetKey,
    /// Fixed logo width for wide wordmarks
    pub logo_width: Option<u32>,
}

/// Gallery section advertising supported base operating systems.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DistributionShowcase {
    pub heading: String,
    pub intro: RichText,
    pub entries: Vec<DistributionEntry>,
    pub outro: RichText,
}

/// Hero banner at the top of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub tagline: RichText,
    pub description: RichText,
    pub action: NavLink,
}

/// All content of the home route, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub header: Header,
    pub update_mechanism: FeatureList,
    /// Hosts `showcase` between its intro and its bullets
    pub development_tool: FeatureList,
    pub showcase: DistributionShowcase,
}

impl HomePage {
    /// Every asset the page references, in display order.
    pub fn asset_keys(&self) -> Vec<AssetKey> {
        self.showcase
            .entries
            .iter()
            .map(|entry| entry.logo.clone())
            .collect()
    }

    /// Rejects links with an empty target anywhere on the page.
    pub fn validate(&self) -> Result<()> {
        self.header.action.validate()?;
        for link in self.header.tagline.links() {
            link.validate()?;
        }
        for link in self.header.description.links() {
            link.validate()?;
        }
        for link in self.update_mechanism.links() {
            link.validate()?;
        }
        for link in self.development_tool.links() {
            link.validate()?;
        }
        for link in self.showcase.intro.links() {
            link.validate()?;
        }
        for link in self.showcase.outro.links() {
            link.validate()?;
        }
        for entry in &self.showcase.entries {
            if entry.url.trim().is_empty() {
                return Err(SiteError::EmptyLinkTarget {
                    label: entry.name.clone(),
                });
            }
        }
        Ok(())
    }
}
