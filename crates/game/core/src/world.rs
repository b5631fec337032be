//! Simulation state owned by one session.

use crate::collision;
use crate::config::{GameConfig, OrbConfig};
use crate::events::EventSink;
use crate::hostile::{Hostile, HostileBrains, Target};
use crate::input::InputSnapshot;
use crate::level::LevelController;
use crate::orb::HealingOrb;
use crate::player::Player;
use crate::rng::PcgRng;

/// Every live entity, split by role.
#[derive(Clone, Debug, PartialEq)]
pub struct Entities {
    pub player: Player,
    pub mobs: Vec<Hostile>,
    pub boss: Option<Hostile>,
    pub orbs: Vec<HealingOrb>,
}

impl Entities {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::new(config.player.start_x, 0.0, &config.player),
            mobs: Vec::new(),
            boss: None,
            orbs: Vec::new(),
        }
    }

    pub fn spawn_orb(&mut self, x: f32, y: f32, config: &OrbConfig) {
        self.orbs.push(HealingOrb::new(x, y, config));
    }

    /// Mobs first, then the boss.
    pub fn hostiles(&self) -> impl Iterator<Item = &Hostile> {
        self.mobs.iter().chain(self.boss.iter())
    }

    pub fn hostiles_mut(&mut self) -> impl Iterator<Item = &mut Hostile> {
        self.mobs.iter_mut().chain(self.boss.iter_mut())
    }

    /// Where hostiles aim; `None` once the player is dead.
    pub fn target(&self) -> Option<Target> {
        self.player.is_alive().then(|| Target {
            center_x: self.player.body.center_x(),
            center_y: self.player.body.center_y(),
        })
    }
}

/// Entities plus the level controller, RNG and AI trees that drive them.
#[derive(Debug)]
pub struct World {
    pub entities: Entities,
    pub level: LevelController,
    pub rng: PcgRng,
    brains: HostileBrains,
}

impl World {
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        Self {
            entities: Entities::new(config),
            level: LevelController::new(),
            rng: PcgRng::new(seed),
            brains: HostileBrains::new(),
        }
    }

    pub fn load_level(&mut self, level: u32, config: &GameConfig, events: &mut impl EventSink) {
        self.level
            .load(level, &mut self.entities, &mut self.rng, config, events);
    }

    /// One simulation tick: player, hostiles, level controller, then collision.
    pub fn step(
        &mut self,
        dt: f32,
        input: InputSnapshot,
        config: &GameConfig,
        events: &mut impl EventSink,
    ) {
        let world_width = self.level.world_width();
        let level = self.level.level();

        self.entities
            .player
            .update(dt, input, world_width, level, config);

        let target = self.entities.target();
        for hostile in self.entities.hostiles_mut() {
            hostile.update(dt, target, world_width, config, &self.brains);
        }

        self.level.update(dt, &mut self.entities, config, events);
        collision::resolve(
            &mut self.entities,
            self.level.geometry(),
            config,
            events,
        );
    }
}
