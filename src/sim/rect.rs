//! Axis-aligned rectangles
//!
//! All collision geometry in the game is axis-aligned: obstacles, tank
//! hitboxes, and projectile bounding boxes. Rectangles are anchored at the
//! top-left corner with the y axis growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner position
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Point containment, half-open: left/top edges inclusive, right/bottom
    /// edges exclusive
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Strict overlap test; rectangles that merely share an edge do not
    /// intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains_point(Vec2::new(10.0, 20.0))); // top-left inclusive
        assert!(r.contains_point(Vec2::new(39.9, 59.9)));
        assert!(!r.contains_point(Vec2::new(40.0, 30.0))); // right exclusive
        assert!(!r.contains_point(Vec2::new(20.0, 60.0))); // bottom exclusive
        assert!(!r.contains_point(Vec2::new(9.9, 30.0)));
    }

    #[test]
    fn test_intersects_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        // Sharing an edge is not an intersection
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&c));

        let d = Rect::new(30.0, 30.0, 5.0, 5.0);
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(500.0, 400.0, 40.0, 350.0);
        assert_eq!(r.right(), 540.0);
        assert_eq!(r.bottom(), 750.0);
        assert_eq!(r.center_y(), 575.0);
    }
}
