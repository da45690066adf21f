//! AI firing-solution search
//!
//! Given the relative offset from an AI tank to its target, find a launch
//! angle and speed that land a shell on the target without clipping any
//! obstacle. Speeds come from a small discretized set; for each candidate
//! speed the ballistic range equation yields up to two launch angles in
//! closed form, and each in-range angle is vetted by forward-simulating the
//! trial flight against the obstacle field.
//!
//! Solutions are expressed in the solver's rightward frame (angle in
//! [0°, 90°], target at positive dx). AI guns face left, so both the trial
//! flights here and the real launch add `AI_LAUNCH_OFFSET_DEG` to the
//! solved angle.
//!
//! The search runs every tick for every AI tank (it also drives the
//! displayed aim angle), so it stays cheap: at most 21 speeds x 2 roots,
//! each with one bounded forward simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Playfield;
use crate::consts::*;
use super::obstacles::ObstacleField;
use super::projectile::Projectile;

/// Rotation from the solver's rightward frame into the leftward frame AI
/// guns actually fire in
pub const AI_LAUNCH_OFFSET_DEG: f32 = 90.0;

/// Horizontal offsets smaller than this make the range equation degenerate
const MIN_HORIZONTAL_OFFSET: f32 = 1e-3;

/// An accepted (angle, speed) launch pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiringSolution {
    /// Launch angle in degrees, within [0, 90], rightward frame
    pub angle_deg: f32,
    /// Launch speed from the candidate set
    pub speed: f32,
}

/// Search for a launch solution reaching `offset` = (dx, dy) from `origin`.
///
/// Returns the first candidate whose trial flight is obstacle-free, or
/// `None` when the whole speed set is out of range or obstructed. A
/// near-zero horizontal offset is treated as no-solution rather than fed to
/// the division in the range equation.
pub fn solve(
    origin: Vec2,
    offset: Vec2,
    field: &ObstacleField,
    playfield: &Playfield,
) -> Option<FiringSolution> {
    let (dx, dy) = (offset.x, offset.y);
    let g = playfield.gravity;

    if dx.abs() < MIN_HORIZONTAL_OFFSET {
        return None;
    }

    let speed_step = (SPEED_MAX - SPEED_MIN) / (SPEED_STEPS - 1) as f32;

    for i in 0..SPEED_STEPS {
        let v = SPEED_MIN + i as f32 * speed_step;
        let v2 = v * v;

        // Discriminant of the range equation solved for launch angle
        let disc = v2 * v2 - g * (g * dx * dx + 2.0 * dy * v2);
        if disc < 0.0 {
            // No real angle reaches the target at this speed
            continue;
        }
        let sqrt_disc = disc.sqrt();

        for numerator in [v2 + sqrt_disc, v2 - sqrt_disc] {
            let angle_deg = (numerator / (g * dx)).atan().to_degrees();
            if (0.0..=90.0).contains(&angle_deg)
                && path_is_clear(origin, angle_deg, v, field, playfield)
            {
                // First viable candidate wins
                return Some(FiringSolution { angle_deg, speed: v });
            }
        }
    }

    None
}

/// Forward-simulate a trial shell at the mirrored launch angle until it
/// reaches floor level, sampling obstacle intersection at every step.
fn path_is_clear(
    origin: Vec2,
    angle_deg: f32,
    speed: f32,
    field: &ObstacleField,
    playfield: &Playfield,
) -> bool {
    let mut trial = Projectile::probe(origin, speed, angle_deg + AI_LAUNCH_OFFSET_DEG, playfield);
    let floor_y = playfield.floor_y();

    let mut steps = 0;
    while trial.pos.y < floor_y && steps < SOLVER_MAX_STEPS {
        trial.advance();
        if field.hit_by_point(trial.pos) {
            return false;
        }
        steps += 1;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Re-run the returned solution in the solver's rightward frame and
    /// report the horizontal distance covered when the shell comes back to
    /// launch height.
    fn landing_distance(solution: FiringSolution, playfield: &Playfield) -> f32 {
        let mut p = Projectile::probe(Vec2::ZERO, solution.speed, solution.angle_deg, playfield);
        loop {
            p.advance();
            if p.pos.y >= 0.0 {
                return p.pos.x;
            }
        }
    }

    #[test]
    fn test_flat_vacuum_shot() {
        let pf = Playfield::default();
        let field = ObstacleField::new();
        let origin = Vec2::new(760.0, 596.0);

        let solution = solve(origin, Vec2::new(600.0, 0.0), &field, &pf).expect("reachable");

        // Minimal viable speed: v^2 >= g*dx = 600, first candidate is 25
        assert_eq!(solution.speed, 25.0);
        // The two roots straddle 45 degrees at near-minimal speed
        assert!((solution.angle_deg - 45.0).abs() < 10.0);

        let landed = landing_distance(solution, &pf);
        assert!((landed - 600.0).abs() <= 8.0, "landed at {landed}");
    }

    #[test]
    fn test_elevated_target() {
        // Target 350 units below the muzzle (a platform gunner firing down
        // at the floor)
        let pf = Playfield::default();
        let field = ObstacleField::new();
        let origin = Vec2::new(1000.0, 246.0);

        let solution = solve(origin, Vec2::new(900.0, -350.0), &field, &pf).expect("reachable");
        assert!((0.0..=90.0).contains(&solution.angle_deg));
        assert!(solution.speed >= SPEED_MIN && solution.speed <= SPEED_MAX);
    }

    #[test]
    fn test_blocked_by_full_height_wall() {
        let pf = Playfield::default();
        let mut field = ObstacleField::new();
        // A wall spanning far above the playfield down to the floor, between
        // origin and target: every candidate arc crosses it
        field.add_obstacle(400.0, -2000.0, 40.0, 2650.0);

        let origin = Vec2::new(760.0, 596.0);
        assert_eq!(solve(origin, Vec2::new(600.0, 0.0), &field, &pf), None);
    }

    #[test]
    fn test_clears_a_low_wall() {
        let pf = Playfield::default();
        let mut field = ObstacleField::new();
        // The campaign's center wall: tall but finite, arcs can go over it
        field.add_obstacle(500.0, 400.0, 40.0, 350.0);

        let origin = Vec2::new(728.0, 624.0);
        let solution = solve(origin, Vec2::new(600.0, 0.0), &field, &pf);
        assert!(solution.is_some());
    }

    #[test]
    fn test_degenerate_horizontal_offset() {
        let pf = Playfield::default();
        let field = ObstacleField::new();
        let origin = Vec2::new(760.0, 596.0);

        assert_eq!(solve(origin, Vec2::new(0.0, 50.0), &field, &pf), None);
        assert_eq!(solve(origin, Vec2::new(1e-6, 50.0), &field, &pf), None);
    }

    #[test]
    fn test_out_of_range_target() {
        let pf = Playfield::default();
        let field = ObstacleField::new();
        let origin = Vec2::new(760.0, 596.0);

        // Beyond the fastest candidate's maximum range
        assert_eq!(solve(origin, Vec2::new(10_000.0, 0.0), &field, &pf), None);
    }
}
