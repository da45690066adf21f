//! Combat resolution
//!
//! One resolve call per live projectile per tick decides whether it keeps
//! flying or terminates. Target hits are checked before geometry: a shell
//! overlapping both a tank and an obstacle on the same tick counts as a
//! hit. Leaving the playfield past the floor, the ceiling, or the right
//! edge destroys the shell; the LEFT edge is deliberately not checked (the
//! player tank sits near the left wall and AI shots arc in from the right,
//! so nothing in the campaign ever exits that way).

use serde::{Deserialize, Serialize};

use crate::Playfield;
use super::obstacles::ObstacleField;
use super::projectile::Projectile;
use super::rect::Rect;

/// Shared combat contract for anything a projectile can damage
pub trait Combatant {
    /// Current hitbox
    fn bbox(&self) -> Rect;
    /// Remaining health points
    fn health(&self) -> i32;
    /// Subtract health and raise the recently-hit presentation flag
    fn apply_damage(&mut self, amount: i32);
    /// Out of play once health is exhausted
    fn is_destroyed(&self) -> bool {
        self.health() <= 0
    }
}

/// Terminal condition of a projectile step, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Still in flight
    None,
    /// Struck the target; damage has been applied
    HitActor,
    /// Struck level geometry
    HitObstacle,
    /// Left the playfield (floor, ceiling, or right edge)
    OutOfBounds,
}

impl Outcome {
    /// Anything but `None` destroys the projectile
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::None)
    }
}

/// Test an in-flight projectile against a target, the obstacle field, and
/// the playfield bounds, in that priority order.
pub fn resolve<C: Combatant>(
    shot: &Projectile,
    field: &ObstacleField,
    playfield: &Playfield,
    target: &mut C,
) -> Outcome {
    let bbox = shot.bbox();

    if bbox.intersects(&target.bbox()) {
        target.apply_damage(shot.damage);
        return Outcome::HitActor;
    }

    if field.hit_by_rect(&bbox) {
        return Outcome::HitObstacle;
    }

    if shot.pos.y > playfield.floor_y() || shot.pos.y < 0.0 || shot.pos.x > playfield.width {
        return Outcome::OutOfBounds;
    }

    Outcome::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    struct Dummy {
        bbox: Rect,
        hp: i32,
    }

    impl Combatant for Dummy {
        fn bbox(&self) -> Rect {
            self.bbox
        }
        fn health(&self) -> i32 {
            self.hp
        }
        fn apply_damage(&mut self, amount: i32) {
            self.hp -= amount;
        }
    }

    fn shot_at(x: f32, y: f32) -> Projectile {
        Projectile::new(Vec2::new(x, y), 10.0, 45.0, &Playfield::default())
    }

    fn far_target() -> Dummy {
        Dummy {
            bbox: Rect::new(5000.0, 5000.0, 70.0, 70.0),
            hp: 100,
        }
    }

    #[test]
    fn test_hit_actor_applies_damage() {
        let pf = Playfield::default();
        let field = ObstacleField::new();
        let mut target = Dummy {
            bbox: Rect::new(700.0, 596.0, 70.0, 70.0),
            hp: 100,
        };

        let outcome = resolve(&shot_at(730.0, 620.0), &field, &pf, &mut target);
        assert_eq!(outcome, Outcome::HitActor);
        assert_eq!(target.hp, 50);
        assert!(!target.is_destroyed());

        let outcome = resolve(&shot_at(730.0, 620.0), &field, &pf, &mut target);
        assert_eq!(outcome, Outcome::HitActor);
        assert!(target.is_destroyed());
    }

    #[test]
    fn test_actor_takes_priority_over_obstacle() {
        let pf = Playfield::default();
        let mut field = ObstacleField::new();
        // Obstacle overlapping the target's hitbox
        field.add_obstacle(700.0, 500.0, 40.0, 200.0);
        let mut target = Dummy {
            bbox: Rect::new(690.0, 590.0, 70.0, 70.0),
            hp: 100,
        };

        // The shell overlaps both at once; the actor hit wins
        let outcome = resolve(&shot_at(705.0, 600.0), &field, &pf, &mut target);
        assert_eq!(outcome, Outcome::HitActor);
        assert_eq!(target.hp, 50);
    }

    #[test]
    fn test_hit_obstacle() {
        let pf = Playfield::default();
        let mut field = ObstacleField::new();
        field.add_obstacle(500.0, 400.0, 40.0, 350.0);

        let outcome = resolve(&shot_at(510.0, 450.0), &field, &pf, &mut far_target());
        assert_eq!(outcome, Outcome::HitObstacle);
    }

    #[test]
    fn test_out_of_bounds_floor_and_ceiling() {
        let pf = Playfield::default();
        let field = ObstacleField::new();

        // Below the floor line
        let outcome = resolve(&shot_at(300.0, 651.0), &field, &pf, &mut far_target());
        assert_eq!(outcome, Outcome::OutOfBounds);

        // Above the top of the playfield
        let outcome = resolve(&shot_at(300.0, -1.0), &field, &pf, &mut far_target());
        assert_eq!(outcome, Outcome::OutOfBounds);
    }

    #[test]
    fn test_out_of_bounds_right_edge_only() {
        let pf = Playfield::default();
        let field = ObstacleField::new();

        let outcome = resolve(&shot_at(1101.0, 300.0), &field, &pf, &mut far_target());
        assert_eq!(outcome, Outcome::OutOfBounds);

        // Exiting the LEFT edge is not terminal; the shell keeps flying
        let outcome = resolve(&shot_at(-500.0, 300.0), &field, &pf, &mut far_target());
        assert_eq!(outcome, Outcome::None);
    }

    #[test]
    fn test_live_shell_in_open_air() {
        let pf = Playfield::default();
        let field = ObstacleField::new();

        let outcome = resolve(&shot_at(300.0, 300.0), &field, &pf, &mut far_target());
        assert_eq!(outcome, Outcome::None);
        assert!(!outcome.is_terminal());
    }
}
