//! Hit feedback reported by the collision pass.

/// What kind of confirmed hit just happened.
///
/// The orchestrator maps each kind to a hit pause and a screen-shake intensity,
/// ordered `BossDeath > BossHit > PlayerHit > MobHit` (the last shakes nothing).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum HitKind {
    /// Player struck a regular mob.
    MobHit,
    /// Player struck the boss.
    BossHit,
    /// Player's strike killed the boss.
    BossDeath,
    /// A mob or the boss struck the player.
    PlayerHit,
}

impl HitKind {
    /// Relative weight of the hit, used for ordering feedback.
    pub const fn impact(self) -> u8 {
        match self {
            Self::MobHit => 0,
            Self::PlayerHit => 1,
            Self::BossHit => 2,
            Self::BossDeath => 3,
        }
    }
}
