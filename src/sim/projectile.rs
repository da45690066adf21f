//! Projectile ballistics
//!
//! A projectile is a point mass under constant gravity, stepped with a
//! fixed time step. The stepper updates velocity AFTER position, using the
//! pre-update vertical velocity for the position delta; the trajectory
//! solver replays this exact scheme offline at a finer step, so the
//! integration order must not change or the two disagree about collisions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Playfield;
use crate::consts::*;
use super::rect::Rect;

/// A shell in flight
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Launch speed
    pub v0: f32,
    /// Launch angle, radians
    pub theta: f32,
    /// Current velocity; vx never changes, vy accrues gravity
    pub vel: Vec2,
    /// Health subtracted from a combatant on impact
    pub damage: i32,
    gravity: f32,
    dt: f32,
}

impl Projectile {
    /// Spawn a live shell stepped at the rendered flight rate
    pub fn new(origin: Vec2, v0: f32, angle_deg: f32, playfield: &Playfield) -> Self {
        Self::with_step(origin, v0, angle_deg, playfield, FLIGHT_DT)
    }

    /// Spawn a trial shell for the solver's forward simulation, stepped at
    /// the finer rate for collision accuracy
    pub fn probe(origin: Vec2, v0: f32, angle_deg: f32, playfield: &Playfield) -> Self {
        Self::with_step(origin, v0, angle_deg, playfield, SOLVER_DT)
    }

    fn with_step(origin: Vec2, v0: f32, angle_deg: f32, playfield: &Playfield, dt: f32) -> Self {
        let theta = angle_deg.to_radians();
        // The y axis grows downward, so an upward launch has negative vy
        let vel = Vec2::new(v0 * theta.cos(), -v0 * theta.sin());
        Self {
            pos: origin,
            v0,
            theta,
            vel,
            damage: BULLET_DAMAGE,
            gravity: playfield.gravity,
            dt,
        }
    }

    /// Advance one time step. Position first, then velocity: the position
    /// delta uses the pre-update vy.
    pub fn advance(&mut self) {
        self.pos.x += self.vel.x * self.dt;
        self.pos.y += self.vel.y * self.dt - 0.5 * self.gravity * self.dt * self.dt;
        self.vel.y += self.gravity * self.dt;
    }

    /// Bounding box used for hit tests
    #[inline]
    pub fn bbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BULLET_SIZE, BULLET_SIZE)
    }
}
