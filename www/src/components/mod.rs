//! Leptos components for the home page.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomeDocument
//! └── PageShell (head, navbar, footer)
//!     ├── HomepageHeader
//!     └── main
//!         ├── FeatureSection: Update Mechanism
//!         └── FeatureSection: Development Tool
//!             └── SupportedDistributions
//!                 └── GalleryLink (per distribution)
//! ```
//!
//! Components only take owned, already-resolved values. Anything that can
//! fail (configuration, assets) is dealt with before a view is built.

mod distributions;
mod features;
mod header;
mod home;
mod rich_text;
mod shell;

pub use distributions::{resolve_gallery, GalleryLogo, SupportedDistributions};
pub use features::FeatureSection;
pub use header::HomepageHeader;
pub use home::HomeDocument;
pub use rich_text::{render_rich_text, Link};
pub use shell::{Chrome, PageMeta, PageShell};
