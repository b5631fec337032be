//! Deterministic combat core for a side-scrolling brawler.
//!
//! `brawl-core` owns the rules: the player, mob and boss state machines, the
//! collision pass that arbitrates hits, and the level controller that sequences
//! waves and bosses. It performs no I/O and never calls back into its owner;
//! every step reports through [`GameEvent`]s pushed into an [`EventSink`].
//!
//! A tick is driven by [`World::step`] in a fixed order: player, hostiles,
//! level controller, collision. [`FrameView`] captures what a renderer needs
//! afterwards.
pub mod body;
pub mod collision;
pub mod combat;
pub mod config;
pub mod error;
pub mod events;
pub mod hostile;
pub mod input;
pub mod level;
pub mod math;
pub mod orb;
pub mod player;
pub mod rng;
pub mod timer;
pub mod view;
pub mod world;

pub use body::{Body, Facing};
pub use combat::{AttackerId, HitKind, HitLedger};
pub use config::{
    BossConfig, DashConfig, FeelConfig, GameConfig, LevelConfig, MobConfig, OrbConfig,
    PhysicsConfig, PlayerConfig,
};
pub use error::ConfigError;
pub use events::{EventSink, GameEvent};
pub use hostile::{Hostile, HostileBrains, HostileId, HostileKind, HostileState, Target};
pub use input::InputSnapshot;
pub use level::{LevelController, LevelGeometry, WavePhase};
pub use math::Rect;
pub use orb::HealingOrb;
pub use player::{Health, Player, PlayerMode, PlayerState};
pub use rng::PcgRng;
pub use timer::Countdown;
pub use view::{FrameView, HostileView, OrbView, PlayerView};
pub use world::{Entities, World};
