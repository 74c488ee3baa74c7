//! CSS for the home page.
//!
//! Inlined into `<head>` so the rendered document has no stylesheet
//! dependency besides the logo files.

/// Complete CSS for the page - light theme with a primary-colored hero.
pub const SITE_CSS: &str = r#"
:root {
    --rugix-primary: #2e8555;
    --rugix-primary-dark: #205d3b;
    --rugix-text: #1c1e21;
    --rugix-muted: #606770;
    --rugix-surface: #e5e7eb;
    --rugix-font: system-ui, -apple-system, Roboto, Ubuntu, sans-serif;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: var(--rugix-font);
    color: var(--rugix-text);
    line-height: 1.6;
}

a { color: var(--rugix-primary); }

.navbar {
    display: flex;
    align-items: center;
    gap: 1.5rem;
    padding: 0.75rem 1.5rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);
}

.navbar__brand {
    font-weight: 700;
    color: var(--rugix-text);
    text-decoration: none;
}

.navbar__item {
    color: var(--rugix-text);
    text-decoration: none;
}

.hero {
    padding: 4rem 1rem;
    text-align: center;
    background: var(--rugix-primary);
    color: #ffffff;
}

.hero .container { max-width: 1140px; margin: 0 auto; }

.hero__title { font-size: 3rem; margin: 0 0 1rem; }

.hero__tagline { font-size: 1.25rem; }

.hero__description { max-width: 80ch; margin: 1.5em auto; }

.hero__buttons { display: flex; justify-content: center; }

.button {
    display: inline-block;
    border-radius: 0.4rem;
    font-weight: 700;
    text-decoration: none;
}

.button--secondary { background: #ebedf0; color: var(--rugix-text); }

.button--lg { padding: 0.75rem 2rem; font-size: 1.2rem; }

.home-main { padding: 4rem 1rem; }

.home-main section + section { margin-top: 4rem; }

.text-center { text-align: center; }

.readable { max-width: 80ch; margin-left: auto; margin-right: auto; }

.feature-list {
    list-style: none;
    width: fit-content;
    margin: 1rem auto;
    padding: 0;
}

.feature-glyph { margin-right: 0.4rem; }

.distribution-gallery {
    width: fit-content;
    margin: 0 auto 1rem;
    padding: 1.25rem 2.5rem;
    border-radius: 0.75rem;
    background: var(--rugix-surface);
}

.distribution-gallery__row {
    display: flex;
    flex-wrap: wrap;
    gap: 2.5rem;
    justify-content: center;
    align-items: center;
}

.distribution-logo { display: flex; align-items: center; height: 5rem; }

.distribution-logo img { height: 100%; width: auto; }

.distribution-logo img.distribution-logo__wide { height: 3rem; }

.footer {
    padding: 2rem 1rem;
    text-align: center;
    background: #303846;
    color: #ebedf0;
}

.footer__links { display: flex; gap: 1.5rem; justify-content: center; }

.footer__link { color: #ebedf0; }

.footer__copyright { color: var(--rugix-surface); font-size: 0.9rem; }
"#;
