//! Game configuration constants and tunable parameters.
//!
//! Every gameplay number lives here, grouped by the subsystem that reads it.
//! `Default` reproduces the shipped tuning; loaders may override any field
//! (all sections are `#[serde(default)]` when the `serde` feature is enabled).

use crate::error::ConfigError;

/// Root configuration passed by reference into every simulation step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub dash: DashConfig,
    pub feel: FeelConfig,
    pub mob: MobConfig,
    pub boss: BossConfig,
    pub orb: OrbConfig,
    pub level: LevelConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects tunings that would break timer or range invariants.
    ///
    /// The simulation itself never fails; a config that passes this check is
    /// guaranteed to keep every countdown finite and every spawn band non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("player.attack_duration", self.player.attack_duration),
            ("player.attack_cooldown", self.player.attack_cooldown),
            ("player.invuln_duration", self.player.invuln_duration),
            ("dash.duration", self.dash.duration),
            ("mob.attack_duration", self.mob.attack_duration),
            ("mob.stun_duration", self.mob.stun_duration),
            ("mob.death_duration", self.mob.death_duration),
            ("boss.attack_duration", self.boss.attack_duration),
            ("boss.stun_duration", self.boss.stun_duration),
            ("boss.charge_duration", self.boss.charge_duration),
            ("orb.lifetime", self.orb.lifetime),
            ("feel.overheal_decay_interval", self.feel.overheal_decay_interval),
        ];
        for (field, value) in durations {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveDuration { field, value });
            }
        }

        let factors = [
            ("player.friction", self.player.friction),
            ("mob.stun_decay", self.mob.stun_decay),
            ("boss.stun_decay", self.boss.stun_decay),
            ("boss.phase2_threshold", self.boss.phase2_threshold),
            ("feel.overheal_efficiency", self.feel.overheal_efficiency),
        ];
        for (field, value) in factors {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FactorOutOfRange { field, value });
            }
        }

        if self.feel.overheal_cap < 1.0 {
            return Err(ConfigError::FactorOutOfRange {
                field: "feel.overheal_cap",
                value: self.feel.overheal_cap,
            });
        }

        let level = &self.level;
        if level.min_platforms == 0 || level.min_platforms > level.max_platforms {
            return Err(ConfigError::InvalidRange {
                field: "level.platforms",
                min: level.min_platforms as f32,
                max: level.max_platforms as f32,
            });
        }
        if level.max_platforms > LevelConfig::MAX_PLATFORMS {
            return Err(ConfigError::TooManyPlatforms {
                requested: level.max_platforms,
                limit: LevelConfig::MAX_PLATFORMS,
            });
        }
        if self.orb.hits_required == 0 {
            return Err(ConfigError::InvalidRange {
                field: "orb.hits_required",
                min: 1.0,
                max: 0.0,
            });
        }

        Ok(())
    }
}

/// World physics shared by every body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PhysicsConfig {
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Height of the viewport the level is laid out for.
    pub view_height: f32,
    /// Distance between the view bottom and the safety floor line.
    pub floor_margin: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1400.0,
            view_height: 720.0,
            floor_margin: 60.0,
        }
    }
}

impl PhysicsConfig {
    /// Hard floor line below which no body may sink.
    pub fn floor_y(&self) -> f32 {
        self.view_height - self.floor_margin
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Negative: upward.
    pub jump_force: f32,
    pub max_hp: f32,
    pub attack_damage: f32,
    pub attack_range: f32,
    pub attack_height: f32,
    pub attack_duration: f32,
    pub attack_cooldown: f32,
    pub invuln_duration: f32,
    /// The Hit stagger ends once invulnerability has run this long.
    pub hit_stagger: f32,
    pub knockback_x: f32,
    pub knockback_y: f32,
    pub start_x: f32,
    pub friction: f32,
    pub stop_threshold: f32,
    pub flicker_interval: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 36.0,
            height: 56.0,
            speed: 220.0,
            jump_force: -520.0,
            max_hp: 100.0,
            attack_damage: 20.0,
            attack_range: 60.0,
            attack_height: 40.0,
            attack_duration: 0.18,
            attack_cooldown: 0.4,
            invuln_duration: 0.8,
            hit_stagger: 0.15,
            knockback_x: 280.0,
            knockback_y: -200.0,
            start_x: 200.0,
            friction: 0.75,
            stop_threshold: 2.0,
            flicker_interval: 0.07,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DashConfig {
    pub duration: f32,
    pub cooldown: f32,
    pub speed: f32,
    /// First level at which a dash grants invulnerability.
    pub invuln_level: u32,
    /// Seconds into an attack after which a dash may cancel it.
    pub attack_cancel_time: f32,
    /// Velocity kept when the dash ends.
    pub end_velocity_scale: f32,
    /// Speed fraction still left at the end of the ease-out curve.
    pub ease_floor: f32,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            duration: 0.18,
            cooldown: 0.8,
            speed: 680.0,
            invuln_level: 4,
            attack_cancel_time: 0.1,
            end_velocity_scale: 0.3,
            ease_floor: 0.4,
        }
    }
}

/// Input forgiveness and healing economy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FeelConfig {
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub attack_buffer_time: f32,
    /// Multiplier of max hp that bounds overheal.
    pub overheal_cap: f32,
    /// Fraction of healing above max hp that is banked.
    pub overheal_efficiency: f32,
    pub overheal_decay_interval: f32,
}

impl Default for FeelConfig {
    fn default() -> Self {
        Self {
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            attack_buffer_time: 0.1,
            overheal_cap: 1.5,
            overheal_efficiency: 0.5,
            overheal_decay_interval: 2.0,
        }
    }
}

/// Regular enemy tuning. Hp and speed scale with the level number.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MobConfig {
    pub width: f32,
    pub height: f32,
    pub base_hp: f32,
    pub hp_per_level: f32,
    pub base_speed: f32,
    pub speed_per_level: f32,
    pub damage: f32,
    pub attack_cooldown: f32,
    pub attack_range: f32,
    pub attack_duration: f32,
    pub chase_range: f32,
    pub patrol_range: f32,
    pub patrol_flip_interval: f32,
    pub patrol_speed_factor: f32,
    pub stun_duration: f32,
    /// Knockback velocity multiplier applied every stunned tick.
    pub stun_decay: f32,
    pub death_duration: f32,
    pub knockback_x: f32,
    pub knockback_y: f32,
    pub elo_value: u32,
}

impl Default for MobConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 55.0,
            base_hp: 40.0,
            hp_per_level: 15.0,
            base_speed: 90.0,
            speed_per_level: 10.0,
            damage: 10.0,
            attack_cooldown: 1.2,
            attack_range: 50.0,
            attack_duration: 0.25,
            chase_range: 300.0,
            patrol_range: 80.0,
            patrol_flip_interval: 1.5,
            patrol_speed_factor: 0.4,
            stun_duration: 0.4,
            stun_decay: 0.85,
            death_duration: 0.5,
            knockback_x: 200.0,
            knockback_y: -150.0,
            elo_value: 10,
        }
    }
}

impl MobConfig {
    pub fn max_hp(&self, level: u32) -> f32 {
        self.base_hp + level.saturating_sub(1) as f32 * self.hp_per_level
    }

    pub fn speed(&self, level: u32) -> f32 {
        self.base_speed + level.saturating_sub(1) as f32 * self.speed_per_level
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BossConfig {
    pub width: f32,
    pub height: f32,
    pub base_hp: f32,
    pub hp_per_level: f32,
    pub base_speed: f32,
    pub speed_per_level: f32,
    pub damage: f32,
    pub attack_cooldown: f32,
    pub attack_range: f32,
    pub attack_duration: f32,
    pub stun_duration: f32,
    pub stun_decay: f32,
    pub knockback_x: f32,
    pub knockback_y: f32,
    pub elo_value: u32,
    /// Hp ratio at or below which phase 2 latches.
    pub phase2_threshold: f32,
    pub phase2_speed_mult: f32,
    pub phase2_cooldown_mult: f32,
    pub charge_cooldown: f32,
    pub phase2_charge_cooldown: f32,
    pub charge_duration: f32,
    pub charge_speed_mult: f32,
    pub charge_min_distance: f32,
    pub charge_reach: f32,
    /// Death fade length relative to the mob fade.
    pub death_duration_mult: f32,
    pub warn_flash_interval: f32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 80.0,
            base_hp: 200.0,
            hp_per_level: 60.0,
            base_speed: 130.0,
            speed_per_level: 12.0,
            damage: 25.0,
            attack_cooldown: 0.7,
            attack_range: 70.0,
            attack_duration: 0.3,
            stun_duration: 0.25,
            stun_decay: 0.80,
            knockback_x: 380.0,
            knockback_y: -280.0,
            elo_value: 100,
            phase2_threshold: 0.5,
            phase2_speed_mult: 1.4,
            phase2_cooldown_mult: 0.5,
            charge_cooldown: 4.0,
            phase2_charge_cooldown: 2.5,
            charge_duration: 0.4,
            charge_speed_mult: 2.5,
            charge_min_distance: 150.0,
            charge_reach: 50.0,
            death_duration_mult: 1.5,
            warn_flash_interval: 0.15,
        }
    }
}

impl BossConfig {
    pub fn max_hp(&self, level: u32) -> f32 {
        self.base_hp + level.saturating_sub(1) as f32 * self.hp_per_level
    }

    pub fn speed(&self, level: u32) -> f32 {
        self.base_speed + level.saturating_sub(1) as f32 * self.speed_per_level
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OrbConfig {
    pub hits_required: u32,
    pub heal: f32,
    pub lifetime: f32,
    pub radius: f32,
    /// Bobbing frequency in Hz.
    pub float_speed: f32,
    pub float_height: f32,
    pub fade_window: f32,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            hits_required: 4,
            heal: 5.0,
            lifetime: 8.0,
            radius: 12.0,
            float_speed: 2.0,
            float_height: 15.0,
            fade_window: 2.0,
        }
    }
}

/// Level layout and progression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LevelConfig {
    pub world_base_width: f32,
    pub world_width_step: f32,
    pub ground_thickness: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub min_platforms: usize,
    pub max_platforms: usize,
    pub platform_min_x: f32,
    /// Distance kept free of platforms at the right edge of the world.
    pub platform_right_margin: f32,
    pub platform_min_y: f32,
    /// Minimum gap between a platform and the ground top.
    pub platform_ground_gap: f32,
    pub mob_base_count: usize,
    pub mob_count_per_level: usize,
    pub mob_first_x: f32,
    /// Horizontal span excluded from the wave spacing.
    pub mob_span_margin: f32,
    /// Random offset within a spawn slot, as a fraction of the slot.
    pub mob_jitter: f32,
    pub spawn_clearance: f32,
    pub next_level_delay: f32,
    pub boss_defeat_heal: f32,
    pub message_duration: f32,
}

impl LevelConfig {
    /// Static capacity of the platform list.
    pub const MAX_PLATFORMS: usize = 8;

    pub fn world_width(&self, level: u32) -> f32 {
        self.world_base_width + level.saturating_sub(1) as f32 * self.world_width_step
    }

    pub fn wave_size(&self, level: u32) -> usize {
        self.mob_base_count + level as usize * self.mob_count_per_level
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            world_base_width: 3000.0,
            world_width_step: 500.0,
            ground_thickness: 60.0,
            platform_width: 180.0,
            platform_height: 20.0,
            min_platforms: 4,
            max_platforms: 6,
            platform_min_x: 300.0,
            platform_right_margin: 400.0,
            platform_min_y: 200.0,
            platform_ground_gap: 150.0,
            mob_base_count: 3,
            mob_count_per_level: 2,
            mob_first_x: 400.0,
            mob_span_margin: 600.0,
            mob_jitter: 0.4,
            spawn_clearance: 2.0,
            next_level_delay: 1.5,
            boss_defeat_heal: 50.0,
            message_duration: 2.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn level_scaling_matches_formulas() {
        let config = GameConfig::default();
        assert_eq!(config.mob.max_hp(1), 40.0);
        assert_eq!(config.mob.max_hp(3), 70.0);
        assert_eq!(config.mob.speed(2), 100.0);
        assert_eq!(config.boss.max_hp(2), 260.0);
        assert_eq!(config.boss.speed(3), 154.0);
        assert_eq!(config.level.world_width(3), 4000.0);
        assert_eq!(config.level.wave_size(1), 5);
        assert_eq!(config.level.wave_size(4), 11);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut config = GameConfig::default();
        config.mob.death_duration = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDuration {
                field: "mob.death_duration",
                ..
            })
        ));
    }

    #[test]
    fn inverted_platform_range_is_rejected() {
        let mut config = GameConfig::default();
        config.level.min_platforms = 7;
        config.level.max_platforms = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn platform_capacity_is_enforced() {
        let mut config = GameConfig::default();
        config.level.max_platforms = LevelConfig::MAX_PLATFORMS + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyPlatforms { .. })
        ));
    }
}
