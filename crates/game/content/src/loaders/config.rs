//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use brawl_core::GameConfig;
use serde::de::DeserializeOwned;

use crate::loaders::{LoadResult, load_file};

/// Loader for [`GameConfig`] and companion sections.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a `GameConfig` from a `.toml` or `.ron` file.
    ///
    /// Missing sections and fields keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let config: GameConfig = load_file(path)?;
        config
            .validate()
            .with_context(|| format!("invalid game config in {}", path.display()))?;
        Ok(config)
    }

    /// Loads any other serde section (for example session settings) from a
    /// `.toml` or `.ron` file. No validation is applied.
    pub fn load_section<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
        load_file(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn toml_overrides_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[mob]
damage = 15.0

[level]
boss_defeat_heal = 30.0
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.mob.damage, 15.0);
        assert_eq!(config.level.boss_defeat_heal, 30.0);
        assert_eq!(config.mob.base_hp, 40.0);
        assert_eq!(config.player, GameConfig::default().player);
    }

    #[test]
    fn ron_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(boss: (phase2_threshold: 0.3), orb: (heal: 8.0))").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.boss.phase2_threshold, 0.3);
        assert_eq!(config.orb.heal, 8.0);
    }

    #[test]
    fn invalid_tuning_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[dash]\nduration = 0.0\n").unwrap();

        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("dash.duration"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();
        assert!(ConfigLoader::load(&path).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
