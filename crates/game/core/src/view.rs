//! Read-only render snapshots.
//!
//! A renderer never touches live entities. It receives a [`FrameView`]
//! captured after the step, holding exactly what drawing needs: boxes,
//! animation labels, facing, bar ratios and fades.

use crate::body::Facing;
use crate::config::GameConfig;
use crate::hostile::{Hostile, HostileId, HostileState};
use crate::level::{LevelController, Platforms, WavePhase};
use crate::math::Rect;
use crate::orb::HealingOrb;
use crate::player::{Player, PlayerState};
use crate::world::World;

/// Minimum vertical scale of a fading corpse.
const MIN_DEATH_SCALE: f32 = 0.05;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub bounds: Rect,
    pub state: PlayerState,
    pub facing: Facing,
    pub hp: f32,
    pub max_hp: f32,
    pub overheal: f32,
    pub visible: bool,
    pub attack_hitbox: Option<Rect>,
}

impl PlayerView {
    pub fn capture(player: &Player) -> Self {
        let health = player.health();
        Self {
            bounds: player.body.bounds(),
            state: player.state(),
            facing: player.facing(),
            hp: health.current(),
            max_hp: health.max(),
            overheal: health.overheal(),
            visible: player.visible(),
            attack_hitbox: player.attack_hitbox(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileView {
    pub id: HostileId,
    pub boss: bool,
    pub bounds: Rect,
    pub state: HostileState,
    pub facing: Facing,
    pub hp_ratio: f32,
    /// 1 while alive, fading to 0 over the death animation.
    pub alpha: f32,
    /// Vertical squash while dying, never below 0.05.
    pub scale_y: f32,
    /// Phase-2 warning flash (boss only).
    pub warning: bool,
    pub attack_hitbox: Option<Rect>,
}

impl HostileView {
    pub fn capture(hostile: &Hostile) -> Self {
        let progress = hostile.death_progress();
        Self {
            id: hostile.id(),
            boss: hostile.is_boss(),
            bounds: hostile.body.bounds(),
            state: hostile.state(),
            facing: hostile.facing(),
            hp_ratio: hostile.hp_ratio(),
            alpha: 1.0 - progress,
            scale_y: (1.0 - progress).max(MIN_DEATH_SCALE),
            warning: hostile.boss_extras().is_some_and(|b| b.warn_flash()),
            attack_hitbox: hostile.attack_hitbox(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

impl OrbView {
    pub fn capture(orb: &HealingOrb, config: &GameConfig) -> Self {
        Self {
            x: orb.x,
            y: orb.y,
            radius: orb.radius(),
            alpha: orb.alpha(&config.orb),
        }
    }
}

/// Everything drawn for one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameView {
    pub level: u32,
    pub phase: WavePhase,
    pub world_width: f32,
    pub ground: Rect,
    pub platforms: Platforms,
    pub player: PlayerView,
    pub hostiles: Vec<HostileView>,
    pub orbs: Vec<OrbView>,
    pub message: Option<String>,
}

impl FrameView {
    pub fn capture(world: &World, config: &GameConfig) -> Self {
        let level: &LevelController = &world.level;
        let geometry = level.geometry();
        let entities = &world.entities;
        Self {
            level: level.level(),
            phase: level.phase(),
            world_width: geometry.world_width,
            ground: geometry.ground,
            platforms: geometry.platforms.clone(),
            player: PlayerView::capture(&entities.player),
            hostiles: entities.hostiles().map(HostileView::capture).collect(),
            orbs: entities
                .orbs
                .iter()
                .filter(|orb| orb.is_active())
                .map(|orb| OrbView::capture(orb, config))
                .collect(),
            message: level.message().map(str::to_owned),
        }
    }

    pub fn boss(&self) -> Option<&HostileView> {
        self.hostiles.iter().find(|h| h.boss)
    }
}
