//! Static asset manifest.
//!
//! Logos are resolved against the static directory once, before anything is
//! rendered. A missing file fails resolution, so a broken image can never
//! reach the output.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SiteError};
use crate::types::AssetKey;

/// A resolved asset: where it lives on disk and where it is served from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub key: AssetKey,
    pub source: PathBuf,
    pub public_path: String,
}

/// Mapping from logical asset keys to resolved assets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
    assets: BTreeMap<AssetKey, Asset>,
}

impl AssetManifest {
    /// Resolve every key against `static_dir`.
    ///
    /// `base_url` is the path prefix the site is served under (`/` or `/www/`).
    /// Fails on the first key whose file does not exist.
    pub fn resolve(static_dir: &Path, base_url: &str, keys: &[AssetKey]) -> Result<Self> {
        let mut assets = BTreeMap::new();
        for key in keys {
            let source = static_dir.join(key.as_str());
            if !source.is_file() {
                return Err(SiteError::MissingAsset {
                    key: key.clone(),
                    path: source,
                });
            }
            let public_path = format!("{}{}", base_url, key.as_str().trim_start_matches('/'));
            assets.insert(
                key.clone(),
                Asset {
                    key: key.clone(),
                    source,
                    public_path,
                },
            );
        }
        Ok(Self { assets })
    }

    /// Look up a key that must have been resolved.
    pub fn require(&self, key: &AssetKey) -> Result<&Asset> {
        self.assets
            .get(key)
            .ok_or_else(|| SiteError::UnresolvedAsset { key: key.clone() })
    }

    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Copy every asset to `out_dir`, keeping its key as relative path.
    pub fn copy_to(&self, out_dir: &Path) -> Result<usize> {
        for asset in self.assets() {
            let dest = out_dir.join(asset.key.as_str());
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
            }
            std::fs::copy(&asset.source, &dest).map_err(|e| SiteError::io(&asset.source, e))?;
        }
        Ok(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn static_dir_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().expect("temp dir");
        for file in files {
            let path = temp.path().join(file);
            std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
            std::fs::write(&path, b"<svg/>").expect("write asset");
        }
        temp
    }

    #[test]
    fn resolves_existing_assets() {
        let temp = static_dir_with(&["img/logos/debian.svg"]);
        let key = AssetKey::new("img/logos/debian.svg");
        let manifest =
            AssetManifest::resolve(temp.path(), "/", std::slice::from_ref(&key)).expect("resolve");

        let asset = manifest.require(&key).expect("resolved");
        assert_eq!(asset.public_path, "/img/logos/debian.svg");
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn missing_asset_fails_resolution() {
        let temp = static_dir_with(&["img/logos/debian.svg"]);
        let keys = [
            AssetKey::new("img/logos/debian.svg"),
            AssetKey::new("img/logos/raspios.png"),
        ];
        let err = AssetManifest::resolve(temp.path(), "/", &keys).unwrap_err();
        match err {
            SiteError::MissingAsset { key, path } => {
                assert_eq!(key.as_str(), "img/logos/raspios.png");
                assert!(path.ends_with("img/logos/raspios.png"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directory_is_not_an_asset() {
        let temp = static_dir_with(&["img/logos/debian.svg"]);
        let err = AssetManifest::resolve(temp.path(), "/", &[AssetKey::new("img/logos")]).unwrap_err();
        assert!(matches!(err, SiteError::MissingAsset { .. }));
    }

    #[test]
    fn public_path_honours_base_url() {
        let temp = static_dir_with(&["img/a.png"]);
        let key = AssetKey::new("img/a.png");
        let manifest =
            AssetManifest::resolve(temp.path(), "/www/", std::slice::from_ref(&key)).expect("resolve");
        assert_eq!(manifest.require(&key).expect("asset").public_path, "/www/img/a.png");
    }

    #[test]
    fn unresolved_lookup_is_an_error() {
        let manifest = AssetManifest::default();
        let err = manifest.require(&AssetKey::new("img/x.svg")).unwrap_err();
        assert!(matches!(err, SiteError::UnresolvedAsset { .. }));
    }

    #[test]
    fn copies_assets_into_output() {
        let src = static_dir_with(&["img/logos/debian.svg"]);
        let out = TempDir::new().expect("out dir");
        let key = AssetKey::new("img/logos/debian.svg");
        let manifest =
            AssetManifest::resolve(src.path(), "/", std::slice::from_ref(&key)).expect("resolve");

        let copied = manifest.copy_to(out.path()).expect("copy");
        assert_eq!(copied, 1);
        assert!(out.path().join("img/logos/debian.svg").is_file());
    }
}
