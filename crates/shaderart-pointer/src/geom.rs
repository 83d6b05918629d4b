//! Geometry primitives in viewport space.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

use core::ops::{Div, Sub};

/// 2D vector in logical pixels, or a normalized position in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Clamps both components to `[0, 1]`.
    ///
    /// NaN components map to `0.0`.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(clamp01(self.x), clamp01(self.y))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

#[inline]
fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise division.
impl Div for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Used as the on-screen bounding box of a host element.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let d = p - self.origin;
        d.x >= 0.0 && d.y >= 0.0 && d.x < self.size.x && d.y < self.size.y
    }

    /// Maps a viewport point into this rectangle's normalized space.
    ///
    /// The result is clamped to `[0, 1]` on both axes, so points captured just
    /// outside the rectangle land on its edge. An empty rectangle maps every
    /// point to the origin.
    pub fn normalize_point(self, p: Vec2) -> Vec2 {
        if self.is_empty() {
            return Vec2::zero();
        }
        ((p - self.origin) / self.size).clamp01()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── normalize_point ───────────────────────────────────────────────────

    #[test]
    fn normalize_inside_uses_offset_and_size() {
        let rect = r(100.0, 50.0, 400.0, 300.0);
        let p = rect.normalize_point(Vec2::new(300.0, 200.0));
        assert_eq!(p, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn normalize_outside_is_clamped() {
        let rect = r(0.0, 0.0, 400.0, 300.0);
        assert_eq!(rect.normalize_point(Vec2::new(-20.0, 900.0)), Vec2::new(0.0, 1.0));
        assert_eq!(rect.normalize_point(Vec2::new(1e6, -1e6)), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normalize_empty_rect_maps_to_origin() {
        assert_eq!(r(0.0, 0.0, 0.0, 300.0).normalize_point(Vec2::new(5.0, 5.0)), Vec2::zero());
    }

    #[test]
    fn normalize_divides_each_axis_by_its_own_extent() {
        let rect = r(10.0, 20.0, 200.0, 50.0);
        assert_eq!(rect.normalize_point(Vec2::new(60.0, 45.0)), Vec2::new(0.25, 0.5));
    }

    #[test]
    fn clamp01_maps_nan_to_zero() {
        let v = Vec2::new(f32::NAN, 0.25).clamp01();
        assert_eq!(v, Vec2::new(0.0, 0.25));
    }
}
