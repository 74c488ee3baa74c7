//! Gallery of supported base distributions.

use leptos::prelude::*;

use super::render_rich_text;
use crate::assets::AssetManifest;
use crate::error::Result;
use crate::types::DistributionShowcase;

/// A gallery entry whose logo has already been resolved to a public URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryLogo {
    pub name: String,
    pub href: String,
    pub src: String,
    pub width: Option<u32>,
}

/// Resolve the logos of every entry, keeping display order.
///
/// Fails if the manifest lacks any logo, before any markup is produced.
pub fn resolve_gallery(
    showcase: &DistributionShowcase,
    manifest: &AssetManifest,
) -> Result<Vec<GalleryLogo>> {
    showcase
        .entries
        .iter()
        .map(|entry| {
            let asset = manifest.require(&entry.logo)?;
            Ok(GalleryLogo {
                name: entry.name.clone(),
                href: entry.url.clone(),
                src: asset.public_path.clone(),
                width: entry.logo_width,
            })
        })
        .collect()
}

#[component]
pub fn SupportedDistributions(
    showcase: DistributionShowcase,
    gallery: Vec<GalleryLogo>,
) -> impl IntoView {
    view! {
        <h3 class="text-center">{showcase.heading}</h3>
        <p class="text-center">{render_rich_text(showcase.intro)}</p>
        <div class="distribution-gallery">
            <div class="distribution-gallery__row">
                {gallery.into_iter().map(|logo| view! { <GalleryLink logo=logo /> }).collect_view()}
            </div>
        </div>
        <p class="text-center">{render_rich_text(showcase.outro)}</p>
    }
}

#[component]
fn GalleryLink(logo: GalleryLogo) -> impl IntoView {
    let GalleryLogo {
        name,
        href,
        src,
        width,
    } = logo;
    let img = match width {
        Some(width) => view! {
            <img src=src alt=name class="distribution-logo__wide" width=width.to_string() />
        }
        .into_any(),
        None => view! { <img src=src alt=name /> }.into_any(),
    };

    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class="distribution-logo">
            {img}
        </a>
    }
}
