//! Session configuration.
//!
//! [`RuntimeConfig`] wraps the core [`GameConfig`] together with the loop,
//! camera and HUD tunables that only the orchestrator reads.

use std::path::Path;

use brawl_content::ContentFactory;
use brawl_core::GameConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

pub const ENV_SEED: &str = "BRAWL_SEED";
pub const ENV_VIEWPORT_WIDTH: &str = "BRAWL_VIEWPORT_WIDTH";
pub const ENV_VIEWPORT_HEIGHT: &str = "BRAWL_VIEWPORT_HEIGHT";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Never part of `session.toml`; loaded from its own file.
    #[serde(skip)]
    pub game: GameConfig,
    pub seed: u64,
    /// Upper bound on a single simulated step, in seconds.
    pub max_dt: f32,
    pub hit_pause: f32,
    pub elo_start: u32,
    pub viewport_width: f32,
    pub camera: CameraConfig,
    pub hud: HudConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let game = GameConfig::default();
        let viewport_height = game.physics.view_height;
        Self {
            game,
            seed: 0x5EED,
            max_dt: 0.05,
            hit_pause: 0.04,
            elo_start: 1000,
            viewport_width: 1280.0,
            camera: CameraConfig::default(),
            hud: HudConfig {
                viewport_height,
                ..HudConfig::default()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Follow speed; the per-frame factor is `min(1, lerp * dt)`.
    pub lerp: f32,
    pub shake_duration: f32,
    pub shake_amplitude: f32,
    pub shake_decay: f32,
    pub boss_death_shake: f32,
    pub boss_hit_shake: f32,
    pub player_hit_shake: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            lerp: 6.0,
            shake_duration: 0.25,
            shake_amplitude: 8.0,
            shake_decay: 0.9,
            boss_death_shake: 2.0,
            boss_hit_shake: 1.2,
            player_hit_shake: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub lerp: f32,
    pub elo_segment: u32,
    /// Message opacity lost per second once the banner is gone.
    pub message_fade: f32,
    pub viewport_height: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            lerp: 8.0,
            elo_segment: 100,
            message_fade: 0.8,
            viewport_height: 720.0,
        }
    }
}

impl RuntimeConfig {
    /// Reads `config.{toml,ron}` and `session.{toml,ron}` from `data_dir`.
    /// Missing files keep the defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let factory = ContentFactory::new(data_dir);
        let content_error = |source| RuntimeError::Content {
            path: data_dir.display().to_string(),
            source,
        };

        let mut config: Self = factory
            .load_section("session")
            .map_err(content_error)?
            .unwrap_or_default();
        config.game = factory.load_config().map_err(content_error)?;
        config.hud.viewport_height = config.game.physics.view_height;
        Ok(config)
    }

    /// Applies `BRAWL_SEED`, `BRAWL_VIEWPORT_WIDTH` and `BRAWL_VIEWPORT_HEIGHT`.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Same as [`Self::with_env_overrides`] with an explicit variable source.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(seed) = parse_var(&lookup, ENV_SEED)? {
            self.seed = seed;
        }
        if let Some(width) = parse_var(&lookup, ENV_VIEWPORT_WIDTH)? {
            self.viewport_width = width;
        }
        if let Some(height) = parse_var::<f32>(&lookup, ENV_VIEWPORT_HEIGHT)? {
            self.game.physics.view_height = height;
            self.hud.viewport_height = height;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        let positive = [
            ("max_dt", self.max_dt),
            ("hit_pause", self.hit_pause),
            ("viewport_width", self.viewport_width),
            ("camera.shake_duration", self.camera.shake_duration),
            ("hud.viewport_height", self.hud.viewport_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(RuntimeError::InvalidSetting { field, value });
            }
        }
        if self.hud.elo_segment == 0 {
            return Err(RuntimeError::InvalidSetting {
                field: "hud.elo_segment",
                value: 0.0,
            });
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| RuntimeError::InvalidEnv { var, value: raw }),
    }
}
