//! Level layout and wave progression.
//!
//! ```text
//! Building -> WaveActive -> BossPending -> BossActive -> LevelComplete -> Building
//! ```
//!
//! [`LevelController::load`] builds a level and starts its wave. Each tick
//! [`LevelController::update`] evicts finished entities and advances the
//! phase; when the post-boss delay runs out it emits
//! [`GameEvent::LevelComplete`] and waits in `Building` for the next load.

use arrayvec::ArrayVec;

use crate::config::{GameConfig, LevelConfig};
use crate::events::{EventSink, GameEvent};
use crate::hostile::{Hostile, HostileId};
use crate::math::Rect;
use crate::rng::PcgRng;
use crate::timer::Countdown;
use crate::world::Entities;

pub type Platforms = ArrayVec<Rect, { LevelConfig::MAX_PLATFORMS }>;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WavePhase {
    /// No level loaded, or waiting for the owner to load the next one.
    #[default]
    Building,
    WaveActive,
    /// Wave cleared; the boss spawns on this tick.
    BossPending,
    BossActive,
    /// Boss gone; transition delay running.
    LevelComplete,
}

/// Static collision geometry of the current level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelGeometry {
    pub world_width: f32,
    pub ground: Rect,
    pub platforms: Platforms,
}

impl LevelGeometry {
    /// Ground first, then platforms.
    pub fn surfaces(&self) -> impl Iterator<Item = &Rect> {
        std::iter::once(&self.ground).chain(self.platforms.iter())
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground.y
    }
}

/// Timed banner text ("Level 2", "BOSS INCOMING!").
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Banner {
    pub text: String,
    remaining: Countdown,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelController {
    level: u32,
    phase: WavePhase,
    geometry: LevelGeometry,
    transition: Countdown,
    banner: Option<Banner>,
    next_id: u32,
}

impl LevelController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    #[inline]
    pub fn geometry(&self) -> &LevelGeometry {
        &self.geometry
    }

    #[inline]
    pub fn world_width(&self) -> f32 {
        self.geometry.world_width
    }

    /// Current banner text, if one is showing.
    pub fn message(&self) -> Option<&str> {
        self.banner.as_ref().map(|b| b.text.as_str())
    }

    /// Builds `level`: geometry, a fresh wave, no boss or orbs, and the player
    /// back at the start line. Hp and ELO carry over.
    pub fn load(
        &mut self,
        level: u32,
        entities: &mut Entities,
        rng: &mut PcgRng,
        config: &GameConfig,
        events: &mut impl EventSink,
    ) {
        self.phase = WavePhase::Building;
        self.level = level;
        self.geometry = Self::build_geometry(level, rng, config);
        let ground_y = self.geometry.ground_y();
        let clearance = config.level.spawn_clearance;

        entities.mobs.clear();
        self.spawn_wave(level, entities, rng, config);
        entities.boss = None;
        entities.orbs.clear();

        let player = &mut entities.player;
        player.place_at(
            config.player.start_x,
            ground_y - player.body.height - clearance,
        );
        player.struck_by.clear();

        self.transition.clear();
        self.show(format!("Level {level}"), config);
        self.phase = WavePhase::WaveActive;
        events.emit(GameEvent::LevelStarted { level });
    }

    fn build_geometry(level: u32, rng: &mut PcgRng, config: &GameConfig) -> LevelGeometry {
        let layout = &config.level;
        let world_width = layout.world_width(level);
        let ground_y = config.physics.view_height - layout.ground_thickness;

        let count = rng
            .range_i32(layout.min_platforms as i32, layout.max_platforms as i32)
            .clamp(0, LevelConfig::MAX_PLATFORMS as i32) as usize;
        let min_x = layout.platform_min_x;
        let max_x = world_width - layout.platform_right_margin;
        let min_y = layout.platform_min_y;
        let max_y = ground_y - layout.platform_ground_gap;

        let mut platforms = Platforms::new();
        if count > 0 {
            let segment = (max_x - min_x) / count as f32;
            for i in 0..count {
                // One platform per segment keeps them from clustering.
                let start = min_x + i as f32 * segment;
                let x = rng.range_f32(start, start + segment - layout.platform_width);
                let y = rng.range_f32(min_y, max_y);
                platforms.push(Rect::new(
                    x,
                    y,
                    layout.platform_width,
                    layout.platform_height,
                ));
            }
        }

        LevelGeometry {
            world_width,
            ground: Rect::new(0.0, ground_y, world_width, layout.ground_thickness),
            platforms,
        }
    }

    fn spawn_wave(
        &mut self,
        level: u32,
        entities: &mut Entities,
        rng: &mut PcgRng,
        config: &GameConfig,
    ) {
        let layout = &config.level;
        let count = layout.wave_size(level);
        if count == 0 {
            return;
        }
        let step = (self.geometry.world_width - layout.mob_span_margin) / count as f32;
        let y = self.geometry.ground_y() - config.mob.height - layout.spawn_clearance;

        for i in 0..count {
            let x = layout.mob_first_x + i as f32 * step + rng.range_f32(0.0, step * layout.mob_jitter);
            let id = self.allocate_id();
            entities.mobs.push(Hostile::mob(id, x, y, level, config));
        }
    }

    fn allocate_id(&mut self) -> HostileId {
        let id = HostileId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Per-tick sweep and phase progression.
    pub fn update(
        &mut self,
        dt: f32,
        entities: &mut Entities,
        config: &GameConfig,
        events: &mut impl EventSink,
    ) {
        entities.mobs.retain(|mob| !mob.should_remove());
        if entities.boss.as_ref().is_some_and(Hostile::should_remove) {
            entities.boss = None;
        }
        for orb in &mut entities.orbs {
            orb.update(dt, &config.orb);
        }
        entities.orbs.retain(|orb| orb.is_active());

        if let Some(banner) = &mut self.banner {
            banner.remaining.tick(dt);
            if banner.remaining.is_expired() {
                self.banner = None;
            }
        }

        match self.phase {
            WavePhase::Building => {}
            WavePhase::LevelComplete => {
                self.transition.tick(dt);
                if self.transition.is_expired() {
                    self.phase = WavePhase::Building;
                    events.emit(GameEvent::LevelComplete {
                        next_level: self.level + 1,
                    });
                }
            }
            WavePhase::WaveActive | WavePhase::BossPending | WavePhase::BossActive => {
                if self.phase == WavePhase::WaveActive && entities.mobs.is_empty() {
                    self.phase = WavePhase::BossPending;
                }
                if self.phase == WavePhase::BossPending {
                    self.spawn_boss(entities, config, events);
                }
                if self.phase == WavePhase::BossActive && entities.boss.is_none() {
                    self.complete(entities, config, events);
                }
            }
        }
    }

    fn spawn_boss(
        &mut self,
        entities: &mut Entities,
        config: &GameConfig,
        events: &mut impl EventSink,
    ) {
        let boss = &config.boss;
        let x = self.geometry.world_width / 2.0 - boss.width / 2.0;
        let y = self.geometry.ground_y() - boss.height - config.level.spawn_clearance;
        let id = self.allocate_id();
        entities.boss = Some(Hostile::boss(id, x, y, self.level, config));
        self.phase = WavePhase::BossActive;
        self.show("BOSS INCOMING!".to_owned(), config);
        events.emit(GameEvent::BossSpawned {
            boss: id,
            level: self.level,
        });
    }

    fn complete(&mut self, entities: &mut Entities, config: &GameConfig, events: &mut impl EventSink) {
        self.phase = WavePhase::LevelComplete;
        self.transition.start(config.level.next_level_delay);
        entities
            .player
            .heal(config.level.boss_defeat_heal, &config.feel);
        self.show(format!("Level {} Complete!", self.level), config);
        events.emit(GameEvent::LevelCleared { level: self.level });
    }

    fn show(&mut self, text: String, config: &GameConfig) {
        self.banner = Some(Banner {
            text,
            remaining: Countdown::new(config.level.message_duration),
        });
    }
}
