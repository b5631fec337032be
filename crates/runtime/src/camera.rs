//! Horizontal follow camera with screen shake.

use brawl_core::math::{clamp, lerp};
use brawl_core::{Countdown, HitKind, PcgRng};

use crate::config::CameraConfig;

#[derive(Clone, Debug)]
pub struct Camera {
    /// World x of the left edge of the view.
    x: f32,
    viewport_width: f32,
    world_width: f32,
    shake: Countdown,
    intensity: f32,
    offset: (f32, f32),
    jitter: PcgRng,
}

impl Camera {
    pub fn new(viewport_width: f32, seed: u64) -> Self {
        Self {
            x: 0.0,
            viewport_width,
            world_width: viewport_width,
            shake: Countdown::EXPIRED,
            intensity: 0.0,
            offset: (0.0, 0.0),
            jitter: PcgRng::new(seed),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Shake displacement to add when drawing world space.
    #[inline]
    pub fn shake_offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_running()
    }

    pub fn set_world_width(&mut self, world_width: f32) {
        self.world_width = world_width;
    }

    /// Jumps straight to the target, used at level start.
    pub fn snap_to(&mut self, center_x: f32) {
        self.x = self.target_x(center_x);
    }

    /// Starts a shake; a non-positive intensity does nothing.
    pub fn shake(&mut self, intensity: f32, config: &CameraConfig) {
        if intensity <= 0.0 {
            return;
        }
        self.shake.start(config.shake_duration);
        self.intensity = intensity;
    }

    /// Shake strength for a confirmed hit; regular mob hits are too frequent to shake.
    pub fn shake_for(kind: HitKind, config: &CameraConfig) -> f32 {
        match kind {
            HitKind::BossDeath => config.boss_death_shake,
            HitKind::BossHit => config.boss_hit_shake,
            HitKind::PlayerHit => config.player_hit_shake,
            HitKind::MobHit => 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, center_x: f32, config: &CameraConfig) {
        let factor = (config.lerp * dt).min(1.0);
        self.x = lerp(self.x, self.target_x(center_x), factor);
        self.x = clamp(self.x, 0.0, self.max_x());

        if self.shake.is_running() {
            self.shake.tick(dt);
            let progress = self.shake.remaining() / config.shake_duration;
            let amplitude = config.shake_amplitude * self.intensity * progress;
            self.offset = (
                self.jitter.signed_unit() * amplitude * config.shake_decay,
                self.jitter.signed_unit() * amplitude * config.shake_decay,
            );
        } else {
            self.offset = (0.0, 0.0);
            self.intensity = 0.0;
        }
    }

    fn target_x(&self, center_x: f32) -> f32 {
        clamp(center_x - self.viewport_width / 2.0, 0.0, self.max_x())
    }

    fn max_x(&self) -> f32 {
        (self.world_width - self.viewport_width).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_and_clamps() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(1280.0, 1);
        camera.set_world_width(3000.0);

        camera.snap_to(100.0);
        assert_eq!(camera.x(), 0.0);

        camera.update(0.05, 1640.0, &config);
        assert!((camera.x() - 300.0).abs() < 1e-3);

        camera.snap_to(10_000.0);
        assert_eq!(camera.x(), 1720.0);
    }

    #[test]
    fn narrow_world_pins_to_zero() {
        let mut camera = Camera::new(1280.0, 1);
        camera.set_world_width(800.0);
        camera.snap_to(700.0);
        assert_eq!(camera.x(), 0.0);
    }

    #[test]
    fn shake_fades_out() {
        let config = CameraConfig::default();
        let mut camera = Camera::new(1280.0, 7);
        camera.shake(Camera::shake_for(HitKind::MobHit, &config), &config);
        assert!(!camera.is_shaking());

        camera.shake(Camera::shake_for(HitKind::BossDeath, &config), &config);
        camera.update(0.05, 0.0, &config);
        let (dx, dy) = camera.shake_offset();
        // 8 px * 2.0 * 0.8 progress * 0.9 decay
        assert!(dx.abs() <= 11.52 + 1e-3 && dy.abs() <= 11.52 + 1e-3);

        for _ in 0..5 {
            camera.update(0.05, 0.0, &config);
        }
        assert!(!camera.is_shaking());
        camera.update(0.05, 0.0, &config);
        assert_eq!(camera.shake_offset(), (0.0, 0.0));
    }
}
