//! Player health pool with overheal banking and decay.

use crate::combat::apply_damage;
use crate::config::FeelConfig;

/// Hp in `[0, max * overheal_cap]`.
///
/// Healing that would exceed `max` is banked at a reduced rate; anything above
/// `max` then bleeds off one point per decay interval.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    current: f32,
    max: f32,
    decay_elapsed: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            decay_elapsed: 0.0,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Amount currently banked above `max`.
    pub fn overheal(&self) -> f32 {
        (self.current - self.max).max(0.0)
    }

    /// `current / max`; exceeds 1.0 while overhealed.
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn cap(&self, feel: &FeelConfig) -> f32 {
        self.max * feel.overheal_cap
    }

    pub fn damage(&mut self, amount: f32) {
        self.current = apply_damage(self.current, amount);
    }

    /// Heals up to `max` at full rate and banks the surplus at `overheal_efficiency`.
    pub fn heal(&mut self, amount: f32, feel: &FeelConfig) {
        if amount <= 0.0 {
            return;
        }
        let room = (self.max - self.current).max(0.0);
        let direct = amount.min(room);
        let surplus = amount - direct;
        let healed = self.current + direct + surplus * feel.overheal_efficiency;
        self.current = healed.min(self.cap(feel)).max(self.current);
    }

    /// Bleeds overheal back toward `max`, one point per interval.
    pub fn tick_overheal(&mut self, dt: f32, feel: &FeelConfig) {
        if self.current > self.max {
            self.decay_elapsed += dt;
            if self.decay_elapsed >= feel.overheal_decay_interval {
                self.current = (self.current - 1.0).max(self.max);
                self.decay_elapsed = 0.0;
            }
        } else {
            self.decay_elapsed = 0.0;
        }
    }
}
