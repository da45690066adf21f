//! Static obstacle registry
//!
//! Each level owns one `ObstacleField`, built once during level setup and
//! read-only for the rest of the level. Obstacles come in two behavioral
//! classes decided by their aspect ratio: wide rectangles act as surfaces a
//! tank can stand on, tall ones act as walls. The distinction matters to the
//! pathing heuristic, which measures lateral free distance against a
//! per-obstacle boundary pair whose orientation flips between the two
//! classes so the downstream distance arithmetic stays sign-consistent.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// The immutable obstacle set for one level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Obstacle rectangles in insertion order
    obstacles: Vec<Rect>,
    /// Per-obstacle (near, far) x coordinates used by pathing; index-matched
    /// with `obstacles`
    boundaries: Vec<(f32, f32)>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an obstacle. The boundary pair is derived here, once: a
    /// surface (width > height) exposes (left, right); a wall exposes
    /// (right, left).
    pub fn add_obstacle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = Rect::new(x, y, width, height);

        let boundary = if width > height {
            (rect.left(), rect.right())
        } else {
            (rect.right(), rect.left())
        };

        self.obstacles.push(rect);
        self.boundaries.push(boundary);
    }

    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    pub fn boundaries(&self) -> &[(f32, f32)] {
        &self.boundaries
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Iterate obstacle rects alongside their boundary pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Rect, &(f32, f32))> {
        self.obstacles.iter().zip(self.boundaries.iter())
    }

    /// True if any obstacle contains the point
    #[inline]
    pub fn hit_by_point(&self, p: Vec2) -> bool {
        self.obstacles.iter().any(|o| o.contains_point(p))
    }

    /// True if any obstacle overlaps the rect
    #[inline]
    pub fn hit_by_rect(&self, r: &Rect) -> bool {
        self.obstacles.iter().any(|o| o.intersects(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_surface_boundary_is_left_right() {
        let mut field = ObstacleField::new();
        field.add_obstacle(800.0, 300.0, 300.0, 40.0); // wide: surface
        assert_eq!(field.boundaries()[0], (800.0, 1100.0));
    }

    #[test]
    fn test_wall_boundary_is_right_left() {
        let mut field = ObstacleField::new();
        field.add_obstacle(500.0, 400.0, 40.0, 350.0); // tall: wall
        assert_eq!(field.boundaries()[0], (540.0, 500.0));
    }

    #[test]
    fn test_square_counts_as_wall() {
        // width == height falls into the wall branch
        let mut field = ObstacleField::new();
        field.add_obstacle(100.0, 100.0, 50.0, 50.0);
        assert_eq!(field.boundaries()[0], (150.0, 100.0));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut field = ObstacleField::new();
        field.add_obstacle(500.0, 400.0, 40.0, 350.0);
        field.add_obstacle(800.0, 300.0, 300.0, 40.0);
        assert_eq!(field.len(), 2);
        assert_eq!(field.obstacles()[0].x, 500.0);
        assert_eq!(field.obstacles()[1].x, 800.0);
        assert_eq!(field.boundaries()[1], (800.0, 1100.0));
    }

    #[test]
    fn test_point_query() {
        let mut field = ObstacleField::new();
        field.add_obstacle(500.0, 400.0, 40.0, 350.0);
        assert!(field.hit_by_point(Vec2::new(520.0, 500.0)));
        assert!(!field.hit_by_point(Vec2::new(499.0, 500.0)));
    }

    proptest! {
        #[test]
        fn prop_boundary_orientation(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 1.0f32..500.0,
            h in 1.0f32..500.0,
        ) {
            let mut field = ObstacleField::new();
            field.add_obstacle(x, y, w, h);
            let (near, far) = field.boundaries()[0];
            if w > h {
                prop_assert_eq!((near, far), (x, x + w));
            } else {
                prop_assert_eq!((near, far), (x + w, x));
            }
        }
    }
}
