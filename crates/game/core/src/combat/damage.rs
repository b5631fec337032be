//! Damage application.

/// Apply damage to current hp.
///
/// # Returns
///
/// New hp value (clamped to 0)
pub fn apply_damage(current_hp: f32, damage: f32) -> f32 {
    (current_hp - damage.max(0.0)).max(0.0)
}

/// Knockback impulse; `x` is a magnitude, the direction comes from the hit source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knockback {
    pub x: f32,
    pub y: f32,
}

impl Knockback {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Velocity pushing away from the source; `direction` is ±1.
    pub fn velocity(&self, direction: f32) -> (f32, f32) {
        (direction * self.x, self.y)
    }
}
