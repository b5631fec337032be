//! Countdown timers.
//!
//! Every gameplay timer counts down in seconds and never goes negative, so
//! "expired" is always `remaining == 0` rather than a scattered `<= 0` check.

/// A non-negative countdown in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub const EXPIRED: Self = Self { remaining: 0.0 };

    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
        }
    }

    pub fn start(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    /// Advances by `dt` and reports whether this tick crossed zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining == 0.0
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Fraction of `total` already consumed, in [0, 1].
    pub fn elapsed_fraction(&self, total: f32) -> f32 {
        if total <= 0.0 {
            return 1.0;
        }
        (1.0 - self.remaining / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_clamps_at_zero_and_fires_once() {
        let mut timer = Countdown::new(0.1);
        assert!(!timer.tick(0.05));
        assert!(timer.is_running());
        assert!(timer.tick(0.2));
        assert_eq!(timer.remaining(), 0.0);
        assert!(!timer.tick(0.2));
        assert!(timer.is_expired());
    }

    #[test]
    fn negative_start_is_expired() {
        assert!(Countdown::new(-1.0).is_expired());
    }

    #[test]
    fn elapsed_fraction() {
        let mut timer = Countdown::new(1.0);
        timer.tick(0.25);
        assert!((timer.elapsed_fraction(1.0) - 0.25).abs() < 1e-6);
        assert_eq!(Countdown::EXPIRED.elapsed_fraction(1.0), 1.0);
    }
}
