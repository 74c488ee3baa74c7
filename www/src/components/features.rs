//! Feature list section, used for both product sections of the home page.

use leptos::prelude::*;

use super::render_rich_text;
use crate::types::FeatureList;

/// Heading, intro, optional embedded block, bullets and summary.
///
/// Bullets are rendered in input order.
#[component]
pub fn FeatureSection(
    list: FeatureList,
    /// Block placed between the intro and the bullets
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let FeatureList {
        heading,
        intro,
        subheading,
        items,
        summary,
    } = list;

    view! {
        <section class="feature-section">
            <h2 class="text-center">{heading}</h2>
            <p class="text-center readable">{render_rich_text(intro)}</p>
            {children.map(|children| children())}
            {subheading.map(|subheading| view! { <h3 class="text-center">{subheading}</h3> })}
            <ul class="feature-list">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="feature-item">
                                <span class="feature-glyph">{item.glyph}</span>
                                {render_rich_text(item.body)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="text-center readable feature-summary">{render_rich_text(summary)}</p>
        </section>
    }
}
