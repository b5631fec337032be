//! Per-swing hit bookkeeping.
//!
//! Every defender owns a [`HitLedger`] keyed by attacker identity. An attacker
//! can only damage a defender through [`HitLedger::try_register`], which
//! succeeds once per attacker until the attacker's swing ends and the entry is
//! released. That is the whole at-most-one-hit-per-swing rule.

use arrayvec::ArrayVec;

/// Stable identity of anything that can open a hitbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackerId {
    Player,
    /// A mob or boss, by the id its level assigned.
    Hostile(u32),
}

impl std::fmt::Display for AttackerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Hostile(id) => write!(f, "hostile#{}", id),
        }
    }
}

/// Attackers whose current swing already landed on the ledger's owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitLedger {
    // Simultaneous swings overlapping one defender are few; spill past the
    // inline capacity to the heap.
    inline: ArrayVec<AttackerId, 8>,
    spill: Vec<AttackerId>,
}

impl HitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, attacker: AttackerId) -> bool {
        self.inline.contains(&attacker) || self.spill.contains(&attacker)
    }

    /// Records `attacker` and returns `true` unless its swing already hit.
    #[must_use = "a swing may only deal damage when registration succeeds"]
    pub fn try_register(&mut self, attacker: AttackerId) -> bool {
        if self.contains(attacker) {
            return false;
        }
        if let Err(err) = self.inline.try_push(attacker) {
            self.spill.push(err.element());
        }
        true
    }

    /// Forgets `attacker`, re-arming it for its next swing.
    pub fn release(&mut self, attacker: AttackerId) {
        self.inline.retain(|a| *a != attacker);
        self.spill.retain(|a| *a != attacker);
    }

    /// Releases every attacker that no longer has a live swing.
    pub fn release_where(&mut self, mut idle: impl FnMut(AttackerId) -> bool) {
        self.inline.retain(|a| !idle(*a));
        self.spill.retain(|a| !idle(*a));
    }

    pub fn clear(&mut self) {
        self.inline.clear();
        self.spill.clear();
    }

    pub fn len(&self) -> usize {
        self.inline.len() + self.spill.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_hit_in_same_swing_is_rejected() {
        let mut ledger = HitLedger::new();
        assert!(ledger.try_register(AttackerId::Player));
        assert!(!ledger.try_register(AttackerId::Player));
        ledger.release(AttackerId::Player);
        assert!(ledger.try_register(AttackerId::Player));
    }

    #[test]
    fn different_attackers_are_independent() {
        let mut ledger = HitLedger::new();
        assert!(ledger.try_register(AttackerId::Hostile(1)));
        assert!(ledger.try_register(AttackerId::Hostile(2)));
        ledger.release(AttackerId::Hostile(1));
        assert!(!ledger.contains(AttackerId::Hostile(1)));
        assert!(ledger.contains(AttackerId::Hostile(2)));
    }

    #[test]
    fn spills_past_inline_capacity() {
        let mut ledger = HitLedger::new();
        for id in 0..20 {
            assert!(ledger.try_register(AttackerId::Hostile(id)));
        }
        assert_eq!(ledger.len(), 20);
        assert!(!ledger.try_register(AttackerId::Hostile(15)));
        ledger.release_where(|a| matches!(a, AttackerId::Hostile(id) if id % 2 == 0));
        assert_eq!(ledger.len(), 10);
    }
}
