//! Rich text and links.
//!
//! Every inline tree on the page goes through [`render_rich_text`], so
//! emphasis, strong spans and links look the same in every block.

use leptos::prelude::*;

use crate::types::{Inline, NavLink, RichText};

/// Render a rich-text tree. Text nodes are escaped by Leptos.
pub fn render_rich_text(text: RichText) -> AnyView {
    text.0
        .into_iter()
        .map(render_inline)
        .collect_view()
        .into_any()
}

fn render_inline(node: Inline) -> AnyView {
    match node {
        Inline::Text(text) => text.into_any(),
        Inline::Strong(inner) => view! { <strong>{render_rich_text(inner)}</strong> }.into_any(),
        Inline::Emphasis(inner) => view! { <em>{render_rich_text(inner)}</em> }.into_any(),
        Inline::Link(link) => view! { <Link link=link /> }.into_any(),
    }
}

/// A clickable link. External targets open in a new browsing context.
#[component]
pub fn Link(
    link: NavLink,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let target = link.external.then_some("_blank");
    let rel = link.external.then_some("noopener noreferrer");

    view! {
        <a href=link.target class=class target=target rel=rel>
            {render_rich_text(link.label)}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_nested_markup() {
        let text = RichText::new().text("Builtin ").strong("integrity").em("before");
        let html = render_rich_text(text).to_html();
        assert!(html.contains("Builtin "));
        // SSR may place a text-node marker before the closing tag
        assert!(html.contains("<strong>integrity"));
        assert!(html.contains("<em>before"));
        assert!(html.find("<strong>").expect("strong") < html.find("</strong>").expect("end"));
    }

    #[test]
    fn escapes_text() {
        let html = render_rich_text(RichText::from("<script>")).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script"));
    }

    #[test]
    fn external_link_opens_new_context() {
        let link = NavLink::external("Debian", "https://www.debian.org/");
        let html = view! { <Link link=link /> }.to_html();
        assert!(html.contains(r#"href="https://www.debian.org/""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn internal_link_stays_in_context() {
        let link = NavLink::new("Docs", "/docs/getting-started");
        let html = view! { <Link link=link /> }.to_html();
        assert!(html.contains(r#"href="/docs/getting-started""#));
        assert!(!html.contains("target="));
    }
}
