//! Physical body shared by every entity: position, velocity and box size.

use crate::math::{Rect, clamp};

/// Horizontal facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Facing for a direction sign; zero counts as right.
    pub fn from_sign(direction: f32) -> Self {
        if direction < 0.0 { Self::Left } else { Self::Right }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Position is the top-left corner of the bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    /// Set by collision when the body rests on a surface this tick.
    pub on_ground: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            width,
            height,
            on_ground: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn integrate(&mut self, dt: f32) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.vy += gravity * dt;
    }

    /// Keeps the box inside `[0, world_width]` horizontally.
    pub fn clamp_to_world(&mut self, world_width: f32) {
        self.x = clamp(self.x, 0.0, world_width - self.width);
    }

    /// Snaps the bottom edge onto `surface_y` and kills downward velocity.
    pub fn land_on(&mut self, surface_y: f32) {
        self.y = surface_y - self.height;
        self.on_ground = true;
        if self.vy > 0.0 {
            self.vy = 0.0;
        }
    }

    /// +1 when this body is right of `source_x`, else -1.
    pub fn away_from(&self, source_x: f32) -> f32 {
        if self.center_x() > source_x { 1.0 } else { -1.0 }
    }

    pub fn place_at(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn land_on_snaps_bottom_and_stops_fall() {
        let mut body = Body::new(0.0, 95.0, 10.0, 10.0);
        body.vy = 300.0;
        body.land_on(100.0);
        assert_eq!(body.y, 90.0);
        assert_eq!(body.vy, 0.0);
        assert!(body.on_ground);
    }

    #[test]
    fn land_keeps_upward_velocity() {
        let mut body = Body::new(0.0, 0.0, 10.0, 10.0);
        body.vy = -50.0;
        body.land_on(10.0);
        assert_eq!(body.vy, -50.0);
    }

    #[test]
    fn clamp_to_world() {
        let mut body = Body::new(-5.0, 0.0, 10.0, 10.0);
        body.clamp_to_world(100.0);
        assert_eq!(body.x, 0.0);
        body.x = 95.0;
        body.clamp_to_world(100.0);
        assert_eq!(body.x, 90.0);
    }

    #[test]
    fn facing_round_trips_through_sign() {
        assert_eq!(Facing::from_sign(Facing::Left.sign()), Facing::Left);
        assert_eq!(Facing::from_sign(0.0), Facing::Right);
        assert_eq!(Facing::Right.flipped(), Facing::Left);
    }

    #[test]
    fn away_from_source() {
        let body = Body::new(100.0, 0.0, 20.0, 20.0);
        assert_eq!(body.away_from(50.0), 1.0);
        assert_eq!(body.away_from(150.0), -1.0);
    }
}
