//! Root document of the home route.

use leptos::prelude::*;

use super::{Chrome, FeatureSection, GalleryLogo, HomepageHeader, PageMeta, PageShell, SupportedDistributions};
use crate::types::HomePage;

/// Header, then both feature sections; the second one hosts the gallery.
#[component]
pub fn HomeDocument(
    page: HomePage,
    gallery: Vec<GalleryLogo>,
    meta: PageMeta,
    chrome: Chrome,
) -> impl IntoView {
    let HomePage {
        header,
        update_mechanism,
        development_tool,
        showcase,
    } = page;

    view! {
        <PageShell meta=meta chrome=chrome>
            <HomepageHeader header=header />
            <main class="home-main">
                <FeatureSection list=update_mechanism />
                <FeatureSection list=development_tool>
                    <SupportedDistributions showcase=showcase gallery=gallery />
                </FeatureSection>
            </main>
        </PageShell>
    }
}
