//! Plane geometry helpers for the tank.

use std::ops::{Add, AddAssign, Mul, Sub};

/// 2D vector in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` (radians)
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rescale so the length is at most `max`
    pub fn clamp_length(self, max: f64) -> Self {
        let len = self.length();
        if len > max && len > 0.0 {
            self * (max / len)
        } else {
            self
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Viewport size. A particle with a square extent `e` may occupy
/// `[0, width - e] x [0, height - e]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn max_x(&self, extent: f64) -> f64 {
        (self.width - extent).max(0.0)
    }

    pub fn max_y(&self, extent: f64) -> f64 {
        (self.height - extent).max(0.0)
    }

    pub fn clamp(&self, p: Vec2, extent: f64) -> Vec2 {
        Vec2::new(
            p.x.clamp(0.0, self.max_x(extent)),
            p.y.clamp(0.0, self.max_y(extent)),
        )
    }

    pub fn contains(&self, p: Vec2, extent: f64) -> bool {
        (0.0..=self.max_x(extent)).contains(&p.x) && (0.0..=self.max_y(extent)).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_length() {
        let v = Vec2::new(3.0, 4.0).clamp_length(1.0);
        assert!((v.length() - 1.0).abs() < 1e-12);
        let short = Vec2::new(0.1, 0.1);
        assert_eq!(short.clamp_length(1.0), short);
    }

    #[test]
    fn test_bounds_never_negative() {
        let tiny = Bounds::new(50.0, 20.0);
        assert_eq!(tiny.max_x(100.0), 0.0);
        assert_eq!(tiny.clamp(Vec2::new(30.0, -5.0), 100.0), Vec2::new(0.0, 0.0));
        assert!(tiny.contains(Vec2::new(0.0, 0.0), 100.0));
    }
}
