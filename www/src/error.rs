//! Error type shared by configuration loading, asset resolution and the build pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::AssetKey;

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A referenced logo/image is not present in the static directory.
    #[error("missing asset `{key}` (expected at {})", .path.display())]
    MissingAsset { key: AssetKey, path: PathBuf },

    /// An asset key was looked up in a manifest that never resolved it.
    #[error("asset `{key}` is not part of the resolved manifest")]
    UnresolvedAsset { key: AssetKey },

    #[error("site configuration not found at {}", .path.display())]
    MissingConfig { path: PathBuf },

    #[error("invalid site configuration in {}: {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("site configuration field `{field}` is required")]
    MissingField { field: &'static str },

    #[error("link `{label}` has an empty target")]
    EmptyLinkTarget { label: String },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
