//! Player state machine types.

use crate::timer::Countdown;

/// Externally visible player state, one at a time.
///
/// `Idle`, `Running` and `Jumping` are derived from locomotion every tick;
/// the rest are driven by [`PlayerMode`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlayerState {
    #[default]
    Idle,
    Running,
    Jumping,
    Attacking,
    Hit,
    Dead,
    Dashing,
}

/// The action layer that overrides locomotion.
///
/// Each variant carries the timer for its own phase, so an attack window or a
/// dash cannot outlive the mode that owns it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PlayerMode {
    /// No action in progress; state follows locomotion.
    #[default]
    Free,
    /// Strike window open; the hitbox lives exactly as long as `strike`.
    Attacking { strike: Countdown },
    Dashing {
        timer: Countdown,
        /// Hits are ignored while set.
        invulnerable: bool,
    },
    /// Stagger after taking damage.
    Hit,
    /// Terminal until an explicit reset.
    Dead,
}

impl PlayerMode {
    pub fn is_attacking(&self) -> bool {
        matches!(self, Self::Attacking { .. })
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self, Self::Dashing { .. })
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, Self::Dead)
    }
}
