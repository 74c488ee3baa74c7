//! Page chrome: document head, navbar and footer shared by every page.

use leptos::prelude::*;

use super::Link;
use crate::config::SiteConfig;
use crate::styles::SITE_CSS;
use crate::types::NavLink;

/// Document metadata for `<head>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    /// Full `<title>`, e.g. `Home | Rugix`
    pub title: String,
    pub description: String,
    pub lang: String,
    pub canonical: Option<String>,
}

impl PageMeta {
    /// Metadata for `route`; the description is the site tagline.
    pub fn from_config(config: &SiteConfig, page_title: &str, route: &str) -> Self {
        Self {
            title: format!("{} | {}", page_title, config.title),
            description: config.tagline.clone(),
            lang: config.lang.clone(),
            canonical: config.canonical_url(route),
        }
    }
}

/// Navbar and footer content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chrome {
    pub brand: String,
    pub home: String,
    pub nav: Vec<NavLink>,
    pub footer_links: Vec<NavLink>,
    pub copyright: Option<String>,
}

impl Chrome {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            brand: config.title.clone(),
            home: config.base_url.clone(),
            nav: config.navbar.items.iter().map(|item| item.to_nav_link()).collect(),
            footer_links: config.footer.links.iter().map(|link| link.to_nav_link()).collect(),
            copyright: config.footer.copyright.clone(),
        }
    }
}

/// Complete `<html>` document around the page content.
#[component]
pub fn PageShell(meta: PageMeta, chrome: Chrome, children: Children) -> impl IntoView {
    let Chrome {
        brand,
        home,
        nav,
        footer_links,
        copyright,
    } = chrome;
    let PageMeta {
        title,
        description,
        lang,
        canonical,
    } = meta;
    let og_title = title.clone();
    let og_description = description.clone();

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                {leptos::html::meta().attr("property", "og:title").attr("content", og_title)}
                {leptos::html::meta()
                    .attr("property", "og:description")
                    .attr("content", og_description)}
                {canonical.map(|href| view! { <link rel="canonical" href=href /> })}
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <nav class="navbar">
                    <a href=home class="navbar__brand">{brand}</a>
                    {nav
                        .into_iter()
                        .map(|link| view! { <Link link=link class="navbar__item" /> })
                        .collect_view()}
                </nav>
                {children()}
                <footer class="footer">
                    <div class="footer__links">
                        {footer_links
                            .into_iter()
                            .map(|link| view! { <Link link=link class="footer__link" /> })
                            .collect_view()}
                    </div>
                    {copyright.map(|text| view! { <p class="footer__copyright">{text}</p> })}
                </footer>
            </body>
        </html>
    }
}
