//! Boss-only state: the phase-2 latch and the charge attack.

use crate::config::BossConfig;
use crate::timer::Countdown;

/// Charge attack phase.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Charge {
    #[default]
    Idle,
    Active(Countdown),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossExtras {
    phase2: bool,
    pub(super) charge: Charge,
    pub(super) charge_cooldown: Countdown,
    /// Seconds between charges; shortened once by phase 2.
    pub(super) charge_interval: f32,
    warn_elapsed: f32,
    warn_flash: bool,
}

impl BossExtras {
    pub fn new(config: &BossConfig) -> Self {
        Self {
            phase2: false,
            charge: Charge::Idle,
            charge_cooldown: Countdown::EXPIRED,
            charge_interval: config.charge_cooldown,
            warn_elapsed: 0.0,
            warn_flash: false,
        }
    }

    #[inline]
    pub fn in_phase2(&self) -> bool {
        self.phase2
    }

    #[inline]
    pub fn is_charging(&self) -> bool {
        matches!(self.charge, Charge::Active(_))
    }

    pub fn charge_interval(&self) -> f32 {
        self.charge_interval
    }

    /// Cosmetic toggle while in phase 2.
    pub fn warn_flash(&self) -> bool {
        self.warn_flash
    }

    /// Latches phase 2 and returns the speed and attack-interval multipliers
    /// to apply, or `None` if already latched.
    pub(super) fn enter_phase2(&mut self, config: &BossConfig) -> Option<(f32, f32)> {
        if self.phase2 {
            return None;
        }
        self.phase2 = true;
        self.charge_interval = config.phase2_charge_cooldown;
        Some((config.phase2_speed_mult, config.phase2_cooldown_mult))
    }

    pub(super) fn tick_warning(&mut self, dt: f32, interval: f32) {
        if self.phase2 {
            self.warn_elapsed += dt;
            self.warn_flash = (self.warn_elapsed / interval).floor() as u32 % 2 == 0;
        }
    }

    pub(super) fn charge_ready(&self) -> bool {
        self.phase2 && self.charge_cooldown.is_expired()
    }
}
