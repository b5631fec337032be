//! Content factory for loading tuning from a data directory.

use std::path::{Path, PathBuf};

use brawl_core::GameConfig;
use serde::de::DeserializeOwned;

use crate::loaders::{ConfigFormat, ConfigLoader, LoadResult};

/// Loads tuning files from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (or config.ron)
/// └── session.toml  (or session.ron)
/// ```
///
/// A missing file means "use the defaults".
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `config.toml` or `config.ron`, falling back to [`GameConfig::default`].
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.find("config") {
            Some(path) => ConfigLoader::load(&path),
            None => Ok(GameConfig::default()),
        }
    }

    /// `{name}.toml` or `{name}.ron`, or `None` if neither exists.
    pub fn load_section<T: DeserializeOwned>(&self, name: &str) -> LoadResult<Option<T>> {
        self.find(name)
            .map(|path| ConfigLoader::load_section(&path))
            .transpose()
    }

    /// TOML wins when both formats are present.
    fn find(&self, stem: &str) -> Option<PathBuf> {
        ConfigFormat::ALL
            .iter()
            .map(|format| self.data_dir.join(format!("{stem}.{}", format.extension())))
            .find(|path| path.is_file())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
