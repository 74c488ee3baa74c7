//! Build pipeline: config -> asset manifest -> render -> write.
//!
//! Each step fails fast. Nothing is written unless configuration and every
//! asset resolve.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::assets::AssetManifest;
use crate::config::SiteConfig;
use crate::content;
use crate::error::{Result, SiteError};
use crate::render_home;

/// File name of the rendered home route.
pub const INDEX_FILE: &str = "index.html";

#[derive(Clone, Debug)]
pub struct BuildOptions {
    pub config_path: PathBuf,
    pub static_dir: PathBuf,
    pub out_dir: PathBuf,
}

/// Summary of a build or check run.
#[derive(Clone, Debug, Serialize)]
pub struct BuildReport {
    pub title: String,
    pub pages: Vec<String>,
    pub assets: Vec<String>,
    /// `None` for `check` runs
    pub output: Option<PathBuf>,
    pub bytes: usize,
}

/// Resolve configuration and assets, render, and return the document.
fn prepare(config_path: &Path, static_dir: &Path) -> Result<(SiteConfig, AssetManifest, String)> {
    let config = SiteConfig::load(config_path)?;
    debug!(path = %config_path.display(), title = %config.title, "loaded site config");

    let keys = content::home_page().asset_keys();
    let manifest = AssetManifest::resolve(static_dir, &config.base_url, &keys)?;
    debug!(count = manifest.len(), dir = %static_dir.display(), "resolved assets");

    let html = render_home(&config, &manifest)?;
    Ok((config, manifest, html))
}

fn report(config: &SiteConfig, manifest: &AssetManifest, html: &str, output: Option<PathBuf>) -> BuildReport {
    BuildReport {
        title: config.title.clone(),
        pages: vec![INDEX_FILE.to_string()],
        assets: manifest.assets().map(|a| a.public_path.clone()).collect(),
        output,
        bytes: html.len(),
    }
}

/// Validate configuration and assets and render in memory, writing nothing.
pub fn check_site(config_path: &Path, static_dir: &Path) -> Result<BuildReport> {
    let (config, manifest, html) = prepare(config_path, static_dir)?;
    info!(bytes = html.len(), "home page renders");
    Ok(report(&config, &manifest, &html, None))
}

/// Render the home page into `out_dir/index.html` and copy its assets next to it.
pub fn build_site(options: &BuildOptions) -> Result<BuildReport> {
    let (config, manifest, html) = prepare(&options.config_path, &options.static_dir)?;

    let out_dir = &options.out_dir;
    std::fs::create_dir_all(out_dir).map_err(|e| SiteError::io(out_dir, e))?;

    let index = out_dir.join(INDEX_FILE);
    std::fs::write(&index, &html).map_err(|e| SiteError::io(&index, e))?;
    info!(path = %index.display(), bytes = html.len(), "wrote page");

    let copied = manifest.copy_to(out_dir)?;
    info!(count = copied, "copied assets");

    Ok(report(&config, &manifest, &html, Some(out_dir.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site(with_logos: &[&str]) -> TempDir {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("site.toml"),
            "title = \"Rugix\"\ntagline = \"Robust building blocks\"\n",
        )
        .expect("write config");
        for logo in with_logos {
            let path = temp.path().join("static").join(logo);
            std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
            std::fs::write(&path, b"logo").expect("write logo");
        }
        temp
    }

    const ALL_LOGOS: [&str; 3] = [
        content::DEBIAN_LOGO,
        content::ALPINE_LINUX_LOGO,
        content::RASPIOS_LOGO,
    ];

    #[test]
    fn builds_index_and_assets() {
        let temp = site(&ALL_LOGOS);
        let options = BuildOptions {
            config_path: temp.path().join("site.toml"),
            static_dir: temp.path().join("static"),
            out_dir: temp.path().join("build"),
        };

        let report = build_site(&options).expect("build");
        assert_eq!(report.pages, [INDEX_FILE]);
        assert_eq!(report.assets.len(), 3);

        let html = std::fs::read_to_string(temp.path().join("build/index.html")).expect("index");
        assert!(html.starts_with("<!DOCTYPE html>"));
        for logo in ALL_LOGOS {
            assert!(temp.path().join("build").join(logo).is_file(), "{logo} copied");
        }
    }

    #[test]
    fn missing_logo_writes_nothing() {
        let temp = site(&[content::DEBIAN_LOGO, content::ALPINE_LINUX_LOGO]);
        let options = BuildOptions {
            config_path: temp.path().join("site.toml"),
            static_dir: temp.path().join("static"),
            out_dir: temp.path().join("build"),
        };

        let err = build_site(&options).unwrap_err();
        assert!(matches!(err, SiteError::MissingAsset { .. }));
        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn check_does_not_write() {
        let temp = site(&ALL_LOGOS);
        let report = check_site(&temp.path().join("site.toml"), &temp.path().join("static"))
            .expect("check");
        assert!(report.output.is_none());
        assert!(report.bytes > 0);
        assert!(!temp.path().join("build").exists());
    }

    #[test]
    fn missing_config_is_reported() {
        let temp = TempDir::new().expect("temp dir");
        let err = check_site(&temp.path().join("site.toml"), temp.path()).unwrap_err();
        assert!(matches!(err, SiteError::MissingConfig { .. }));
    }
}
