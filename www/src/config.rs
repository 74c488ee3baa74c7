//! Site-wide configuration.
//!
//! Loaded from a TOML file (`site.toml` by default). Unlike optional tool
//! configs, the page cannot render without it: a missing file, a parse error
//! or an empty required field is an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::types::NavLink;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub title: String,
    /// Also used as the home page description
    #[serde(default)]
    pub tagline: String,
    /// Public origin, e.g. `https://rugix.org`. Used for the canonical link.
    #[serde(default)]
    pub url: String,
    /// Path prefix the site is served under
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub footer: FooterConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub items: Vec<LinkConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub links: Vec<LinkConfig>,
    pub copyright: Option<String>,
}

/// A navbar or footer entry. `to` accepts internal routes and absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    #[serde(alias = "href")]
    pub to: String,
}

impl LinkConfig {
    pub fn to_nav_link(&self) -> NavLink {
        NavLink::auto(self.label.as_str(), self.to.as_str())
    }
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl SiteConfig {
    /// Load and validate the configuration at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SiteError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse configuration text. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let mut config: SiteConfig =
            toml::from_str(content).map_err(|source| SiteError::InvalidConfig {
                path: origin.to_path_buf(),
                source,
            })?;
        config.base_url = normalize_base_url(&config.base_url);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SiteError::MissingField { field: "title" });
        }
        if self.tagline.trim().is_empty() {
            return Err(SiteError::MissingField { field: "tagline" });
        }
        for link in self.navbar.items.iter().chain(&self.footer.links) {
            link.to_nav_link().validate()?;
        }
        Ok(())
    }

    /// Canonical URL of a route, if the public origin is known.
    pub fn canonical_url(&self, route: &str) -> Option<String> {
        if self.url.is_empty() {
            return None;
        }
        let origin = self.url.trim_end_matches('/');
        let route = route.trim_start_matches('/');
        Some(format!("{}{}{}", origin, self.base_url, route))
    }
}

/// Ensure a leading and a trailing slash (`docs` -> `/docs/`).
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
