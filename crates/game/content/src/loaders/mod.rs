//! File loaders for tuning data.
//!
//! The file extension picks the format: `.toml` or `.ron`.

pub mod config;
pub mod factory;

pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Serialization format of a data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    pub const ALL: [Self; 2] = [Self::Toml, Self::Ron];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Ron => "ron",
        }
    }

    pub fn from_path(path: &Path) -> LoadResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            other => anyhow::bail!(
                "unsupported data file {} (extension {:?}, expected .toml or .ron)",
                path.display(),
                other.unwrap_or("")
            ),
        }
    }

    /// Parses `content`; `origin` only labels errors.
    pub fn parse<T: DeserializeOwned>(self, content: &str, origin: &Path) -> LoadResult<T> {
        match self {
            Self::Toml => toml::from_str(content)
                .with_context(|| format!("failed to parse TOML in {}", origin.display())),
            Self::Ron => ron::from_str(content)
                .with_context(|| format!("failed to parse RON in {}", origin.display())),
        }
    }
}

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Reads and parses any serde type, choosing the format from the extension.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let format = ConfigFormat::from_path(path)?;
    let content = read_file(path)?;
    format.parse(&content, path)
}
