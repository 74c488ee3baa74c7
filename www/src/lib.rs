//! # rugix-www
//!
//! Static home page of the Rugix website, rendered with Leptos SSR.
//!
//! The page is a fixed composition of content blocks (hero banner, two
//! feature lists, a gallery of supported distributions) wrapped in the site
//! chrome. Content lives in typed values ([`types`]), built from literals in
//! [`content`]; [`components`] turns them into HTML.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use rugix_www::{assets::AssetManifest, config::SiteConfig, content, render_home};
//!
//! let config = SiteConfig::load(Path::new("site.toml"))?;
//! let manifest = AssetManifest::resolve(
//!     Path::new("static"),
//!     &config.base_url,
//!     &content::home_page().asset_keys(),
//! )?;
//! let html = render_home(&config, &manifest)?;
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! # Ok::<(), rugix_www::error::SiteError>(())
//! ```
//!
//! ## Failure model
//!
//! Rendering itself cannot fail. Everything that can (configuration, logo
//! files) is resolved up front, so a broken page is never produced:
//!
//! - [`config::SiteConfig::load`] - missing/invalid `site.toml`
//! - [`assets::AssetManifest::resolve`] - missing logo file
//!
//! Use [`pipeline::build_site`] to run the whole thing and write the output.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod assets;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pipeline;
pub mod styles;
pub mod types;

use components::{resolve_gallery, Chrome, HomeDocument, PageMeta};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use assets::AssetManifest;
use config::SiteConfig;
use error::Result;
use types::HomePage;

/// Title of the home route, shown before the site title.
pub const HOME_TITLE: &str = "Home";

/// Render the home route with the built-in content.
pub fn render_home(config: &SiteConfig, manifest: &AssetManifest) -> Result<String> {
    render_home_page(content::home_page(), config, manifest)
}

/// Render the home route for arbitrary content.
///
/// Returns a complete HTML document including `<!DOCTYPE html>`. The output
/// only depends on the arguments, so equal inputs give byte-identical output.
pub fn render_home_page(
    page: HomePage,
    config: &SiteConfig,
    manifest: &AssetManifest,
) -> Result<String> {
    config.validate()?;
    page.validate()?;
    let gallery = resolve_gallery(&page.showcase, manifest)?;
    let meta = PageMeta::from_config(config, HOME_TITLE, "/");
    let chrome = Chrome::from_config(config);

    let doc = view! {
        <HomeDocument page=page gallery=gallery meta=meta chrome=chrome />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{}", doc.to_html()))
}
