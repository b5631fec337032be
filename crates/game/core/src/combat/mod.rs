//! Combat bookkeeping shared by the player, hostiles and the collision pass.
//!
//! - `damage`: hp arithmetic (clamped, never negative) and knockback helpers
//! - `hit`: hit-feedback kinds reported to the orchestrator
//! - `ledger`: per-swing record of which attackers already landed a hit

pub mod damage;
pub mod hit;
pub mod ledger;

pub use damage::{Knockback, apply_damage};
pub use hit::HitKind;
pub use ledger::{AttackerId, HitLedger};
