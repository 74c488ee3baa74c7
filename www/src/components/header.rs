//! Hero banner.

use leptos::prelude::*;

use super::{render_rich_text, Link};
use crate::types::Header;

#[component]
pub fn HomepageHeader(header: Header) -> impl IntoView {
    view! {
        <header class="hero hero--primary">
            <div class="container">
                <h1 class="hero__title">{header.title}</h1>
                <p class="hero__tagline">{render_rich_text(header.tagline)}</p>
                <p class="hero__description">{render_rich_text(header.description)}</p>
                <div class="hero__buttons">
                    <Link link=header.action class="button button--secondary button--lg" />
                </div>
            </div>
        </header>
    }
}
