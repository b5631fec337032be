//! Geometry and interpolation helpers.
//!
//! Pure functions only; every collision test in the crate goes through [`Rect`].

/// Axis-aligned bounding box with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Signed penetration depth of one box into another.
///
/// Each component is negative when the first box's centre lies left of
/// (or above) the second box's centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    pub x: f32,
    pub y: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square box of side `2 * radius` centred on `(cx, cy)`.
    pub fn centered_square(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Strict overlap test: touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Per-axis overlap depth, signed by the direction `self` must move to separate.
    pub fn resolve(&self, other: &Rect) -> Overlap {
        let dx = self.center_x() - other.center_x();
        let dy = self.center_y() - other.center_y();
        let overlap_x = (self.width + other.width) / 2.0 - dx.abs();
        let overlap_y = (self.height + other.height) / 2.0 - dy.abs();

        let sign_x = if self.center_x() < other.center_x() { -1.0 } else { 1.0 };
        let sign_y = if self.center_y() < other.center_y() { -1.0 } else { 1.0 };

        Overlap {
            x: overlap_x * sign_x,
            y: overlap_y * sign_y,
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp that tolerates `min > max` by preferring `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// -1, 0 or 1.
#[inline]
pub fn sign(n: f32) -> f32 {
    if n < 0.0 {
        -1.0
    } else if n > 0.0 {
        1.0
    } else {
        0.0
    }
}

pub fn smooth_step(a: f32, b: f32, t: f32) -> f32 {
    let s = t * t * (3.0 - 2.0 * t);
    lerp(a, b, s)
}

/// Cubic ease-out on `t` in [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - clamp(t, 0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(9.5, 9.5, 1.0, 1.0)));
    }

    #[test]
    fn resolve_reports_landing_from_above() {
        let body = Rect::new(100.0, 95.0, 40.0, 10.0);
        let ground = Rect::new(0.0, 100.0, 1000.0, 60.0);
        let overlap = body.resolve(&ground);
        assert!(overlap.y < 0.0);
        assert!((overlap.y + 5.0).abs() < 1e-4);
        assert!(overlap.y.abs() < overlap.x.abs());
    }

    #[test]
    fn clamp_prefers_min_for_inverted_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(3.0, 4.0, 2.0), 4.0);
    }

    #[test]
    fn ease_out_cubic_is_monotonic_and_bounded() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn helpers() {
        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(sign(-3.0), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(smooth_step(0.0, 1.0, 0.5), 0.5);
    }
}
