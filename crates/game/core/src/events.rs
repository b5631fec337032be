//! Events reported by a simulation step.
//!
//! The core never calls back into its owner. Collision and the level
//! controller push [`GameEvent`]s into an [`EventSink`] and the orchestrator
//! reacts after the step (ELO, hit pause, shake, level loads).

use crate::combat::HitKind;
use crate::hostile::HostileId;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A player strike brought a hostile to 0 hp.
    EloGained { amount: u32, source: HostileId },
    /// Confirmed hit feedback.
    Hit(HitKind),
    OrbSpawned { x: f32, y: f32 },
    OrbCollected { heal: f32 },
    BossPhaseTwo { boss: HostileId },
    PlayerDied,
    LevelStarted { level: u32 },
    BossSpawned { boss: HostileId, level: u32 },
    /// Boss evicted; the transition delay is running.
    LevelCleared { level: u32 },
    /// Transition delay elapsed; the owner should load `next_level`.
    LevelComplete { next_level: u32 },
}

/// Destination for events emitted during a step.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}
