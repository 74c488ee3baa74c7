//! Rendering properties of the home page.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rugix_www::assets::AssetManifest;
use rugix_www::config::SiteConfig;
use rugix_www::content;
use rugix_www::error::SiteError;
use rugix_www::types::{FeatureItem, RichText};
use rugix_www::{render_home, render_home_page};
use tempfile::TempDir;

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

fn config(tagline: &str) -> SiteConfig {
    let toml = format!("title = \"Rugix\"\ntagline = \"{}\"\n", tagline);
    SiteConfig::parse(&toml, Path::new("site.toml")).expect("config")
}

fn manifest(config: &SiteConfig) -> AssetManifest {
    AssetManifest::resolve(
        &static_dir(),
        &config.base_url,
        &content::home_page().asset_keys(),
    )
    .expect("bundled logos resolve")
}

fn render(config: &SiteConfig) -> String {
    render_home(config, &manifest(config)).expect("render")
}

#[test]
fn render_is_idempotent() {
    let config = config("Robust Building Blocks");
    let first = render(&config);
    let second = render(&config);
    assert_eq!(first, second);
}

#[test]
fn document_is_complete() {
    let html = render(&config("Robust Building Blocks"));
    assert!(html.starts_with("<!DOCTYPE html>\n<html"));
    assert!(html.contains("<title>Home | Rugix</title>"));
    assert!(html.contains("Robust Building Blocks for Embedded Linux Devices"));
    assert!(html.contains(r#"property="og:title" content="Home | Rugix""#));
    assert!(html.contains(r#"property="og:description" content="Robust Building Blocks""#));
}

#[test]
fn description_equals_tagline() {
    let html = render(&config("X"));
    assert!(html.contains(r#"name="description" content="X""#));
}

#[test]
fn header_action_targets_getting_started() {
    let html = render(&config("X"));
    let button = html.find(r#"class="button button--secondary button--lg""#).expect("call to action");
    let route = html[..button].rfind("href=").expect("href before class");
    assert!(html[route..button].contains(r#""/docs/getting-started""#));
    assert!(html.contains("Get Started 🚀"));
}

#[test]
fn sections_render_in_fixed_order() {
    let html = render(&config("X"));
    let hero = html.find(r#"class="hero__title""#).expect("header");
    let ctrl = html.find("Rugix Ctrl: The Update Mechanism").expect("update mechanism");
    let bakery = html.find("Rugix Bakery: The Development Tool").expect("development tool");
    let distros = html.find("Supported Distributions").expect("showcase");
    let highlights = html.find("Feature Highlights").expect("highlights");
    assert!(hero < ctrl && ctrl < bakery && bakery < distros && distros < highlights);
    assert!(!html.contains("The Tool Suite"));
}

#[test]
fn showcase_has_three_distributions_in_order() {
    let html = render(&config("X"));
    let gallery_start = html.find(r#"class="distribution-gallery""#).expect("gallery");
    let gallery = &html[gallery_start..];

    let debian = gallery.find(r#"alt="Debian""#).expect("debian");
    let alpine = gallery.find(r#"alt="Alpine Linux""#).expect("alpine");
    let raspios = gallery.find(r#"alt="Raspberry Pi OS""#).expect("raspios");
    assert!(debian < alpine && alpine < raspios);
    assert_eq!(html.matches(r#"class="distribution-logo""#).count(), 3);
}

#[test]
fn feature_bullets_keep_input_order() {
    let mut page = content::home_page();
    page.update_mechanism.items = ["A/B updates", "streaming updates", "integrity checks"]
        .into_iter()
        .map(FeatureItem::new)
        .collect();
    let config = config("X");
    let html = render_home_page(page, &config, &manifest(&config)).expect("render");

    let a = html.find("A/B updates").expect("A/B");
    let b = html.find("streaming updates").expect("streaming");
    let c = html.find("integrity checks").expect("integrity");
    assert!(a < b && b < c);
}

#[test]
fn missing_logo_fails_before_rendering() {
    let temp = TempDir::new().expect("temp dir");
    let logos = temp.path().join("img/logos");
    std::fs::create_dir_all(&logos).expect("mkdir");
    std::fs::write(logos.join("debian.svg"), b"<svg/>").expect("debian");
    std::fs::write(logos.join("raspios.png"), b"png").expect("raspios");

    let err = AssetManifest::resolve(temp.path(), "/", &content::home_page().asset_keys())
        .unwrap_err();
    match err {
        SiteError::MissingAsset { key, .. } => assert_eq!(key.as_str(), content::ALPINE_LINUX_LOGO),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_manifest_cannot_render() {
    let config = config("X");
    let err = render_home(&config, &AssetManifest::default()).unwrap_err();
    assert!(matches!(err, SiteError::UnresolvedAsset { .. }));
}

#[test]
fn empty_link_target_in_content_is_rejected() {
    let mut page = content::home_page();
    page.header.action.target = String::new();
    let config = config("X");
    let err = render_home_page(page, &config, &manifest(&config)).unwrap_err();
    assert!(matches!(err, SiteError::EmptyLinkTarget { .. }));
}

#[test]
fn chrome_comes_from_config() {
    let config = SiteConfig::load(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site.toml"))
        .expect("bundled config");
    let html = render(&config);
    assert!(html.contains(r#"<link rel="canonical" href="https://rugix.org/""#));
    assert!(html.contains(r#"href="https://github.com/silitics/rugix""#));
    assert!(html.contains(r#"class="footer__copyright""#));
}

#[test]
fn rich_text_spans_survive() {
    let mut page = content::home_page();
    page.development_tool.summary = RichText::new().strong("bold").em("italic");
    let config = config("X");
    let html = render_home_page(page, &config, &manifest(&config)).expect("render");
    assert!(html.contains("<strong>bold"));
    assert!(html.contains("<em>italic"));
}
