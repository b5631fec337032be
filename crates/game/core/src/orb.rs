//! Healing orbs dropped by the player's combo counter.

use std::f32::consts::TAU;

use crate::config::OrbConfig;
use crate::math::Rect;
use crate::timer::Countdown;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingOrb {
    /// Centre.
    pub x: f32,
    pub y: f32,
    spawn_y: f32,
    radius: f32,
    heal: f32,
    lifetime: Countdown,
    age: f32,
    active: bool,
}

impl HealingOrb {
    pub fn new(x: f32, y: f32, config: &OrbConfig) -> Self {
        Self {
            x,
            y,
            spawn_y: y,
            radius: config.radius,
            heal: config.heal,
            lifetime: Countdown::new(config.lifetime),
            age: 0.0,
            active: true,
        }
    }

    /// Bobs around the spawn height and expires with its lifetime.
    pub fn update(&mut self, dt: f32, config: &OrbConfig) {
        if !self.active {
            return;
        }
        self.age += dt;
        self.y = self.spawn_y + (self.age * config.float_speed * TAU).sin() * config.float_height;
        self.lifetime.tick(dt);
        if self.lifetime.is_expired() {
            self.active = false;
        }
    }

    /// Consumes the orb and returns its heal amount, or `None` if already gone.
    pub fn pickup(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(self.heal)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.x, self.y, self.radius)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    /// Render opacity: 1 until the last `fade_window` seconds, then linear to 0.
    pub fn alpha(&self, config: &OrbConfig) -> f32 {
        let remaining = self.lifetime.remaining();
        if config.fade_window <= 0.0 || remaining >= config.fade_window {
            1.0
        } else {
            remaining / config.fade_window
        }
    }
}
