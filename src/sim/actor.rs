//! Tanks
//!
//! Two actor variants share the `Combatant` combat contract but are
//! controlled differently: the player tank is driven by per-tick input
//! commands, the enemy tank by the trajectory solver and an autonomous
//! lateral random walk. Each tank owns at most one live projectile; a fire
//! request is only honored once the previous shell is gone.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Playfield;
use crate::consts::*;
use super::combat::Combatant;
use super::obstacles::ObstacleField;
use super::projectile::Projectile;
use super::rect::Rect;
use super::solver::{self, AI_LAUNCH_OFFSET_DEG};

/// Degrees the player's gun turns per aim-input tick
const GUN_TURN_DEG: f32 = 1.0;
/// Firing power gained per charge-input tick
const CHARGE_RATE: f32 = 2.0;

/// The input-driven tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTank {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub hp: i32,
    pub speed: f32,
    /// Gun elevation in degrees, kept within (0, 90)
    pub firing_angle: f32,
    /// Charged launch power, 0-100
    pub firing_power: f32,
    /// The in-flight shell, if any
    pub shot: Option<Projectile>,
    got_hit: bool,
}

impl PlayerTank {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: TANK_SIZE,
            hp: TANK_MAX_HP,
            speed: PLAYER_SPEED,
            firing_angle: NEUTRAL_AIM_DEG,
            firing_power: 0.0,
            shot: None,
            got_hit: false,
        }
    }

    /// Where shells leave the barrel
    #[inline]
    pub fn muzzle(&self) -> Vec2 {
        self.pos + Vec2::new(0.6 * self.size, 0.4 * self.size)
    }

    #[inline]
    pub fn has_live_shot(&self) -> bool {
        self.shot.is_some()
    }

    /// Lateral movement, confined to the player zone on the left side of
    /// the playfield
    pub fn steer(&mut self, left: bool, right: bool) {
        if left && self.pos.x - self.speed > 0.0 {
            self.pos.x -= self.speed;
        }
        if right && self.pos.x + self.speed + self.size < PLAYER_ZONE_RIGHT {
            self.pos.x += self.speed;
        }
    }

    /// Gun elevation, clamped strictly inside (0, 90) degrees
    pub fn adjust_aim(&mut self, up: bool, down: bool) {
        if up && self.firing_angle + GUN_TURN_DEG < 90.0 {
            self.firing_angle += GUN_TURN_DEG;
        }
        if down && self.firing_angle - GUN_TURN_DEG > 0.0 {
            self.firing_angle -= GUN_TURN_DEG;
        }
    }

    /// Accumulate launch power while the charge input is held. Charging is
    /// ignored while a shell is in flight.
    pub fn charge(&mut self) {
        if !self.has_live_shot() && self.firing_power + CHARGE_RATE < 101.0 {
            self.firing_power = (self.firing_power + CHARGE_RATE).min(100.0);
        }
    }

    /// Release the charged shot rightward at the current gun angle. The
    /// launch speed scales linearly with charged power; power resets to
    /// zero on release.
    pub fn fire(&mut self, playfield: &Playfield) {
        let v0 = 20.0 + 15.0 * self.firing_power / 100.0;
        self.shot = Some(Projectile::new(
            self.muzzle(),
            v0,
            self.firing_angle,
            playfield,
        ));
        self.firing_power = 0.0;
    }

    /// One-tick presentation flag, cleared on read
    pub fn take_recent_hit(&mut self) -> bool {
        std::mem::take(&mut self.got_hit)
    }
}

impl Combatant for PlayerTank {
    fn bbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    fn health(&self) -> i32 {
        self.hp
    }

    fn apply_damage(&mut self, amount: i32) {
        self.hp -= amount;
        self.got_hit = true;
    }
}

/// The solver-driven tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTank {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub hp: i32,
    pub speed: f32,
    /// Displayed gun elevation in degrees; tracks the latest solution
    pub firing_angle: f32,
    /// Launch speed of the latest solution
    pub firing_power: f32,
    /// Minimum milliseconds between fire attempts
    pub reload_ms: f32,
    /// Milliseconds accumulated since the last fire attempt
    pub since_fire_ms: f32,
    /// Queued random-walk steps and their direction (+1 right, -1 left)
    moving_steps: u32,
    direction: f32,
    /// The in-flight shell, if any
    pub shot: Option<Projectile>,
    got_hit: bool,
}

impl EnemyTank {
    pub fn new(x: f32, y: f32, reload_ms: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: TANK_SIZE,
            hp: TANK_MAX_HP,
            speed: ENEMY_SPEED,
            firing_angle: NEUTRAL_AIM_DEG,
            firing_power: 0.0,
            reload_ms,
            since_fire_ms: 0.0,
            moving_steps: 0,
            direction: 1.0,
            shot: None,
            got_hit: false,
        }
    }

    /// Where shells leave the barrel
    #[inline]
    pub fn muzzle(&self) -> Vec2 {
        self.pos + Vec2::new(0.4 * self.size, 0.4 * self.size)
    }

    #[inline]
    pub fn has_live_shot(&self) -> bool {
        self.shot.is_some()
    }

    /// Track the displayed gun angle against the current target offset.
    /// Runs every tick whether or not the tank fires; no solution leaves
    /// the aim where it was.
    pub fn update_aim(&mut self, offset: Vec2, field: &ObstacleField, playfield: &Playfield) {
        if let Some(solution) = solver::solve(self.muzzle(), offset, field, playfield) {
            self.firing_angle = solution.angle_deg;
        }
    }

    /// Attempt a shot at the target offset. A viable solution launches a
    /// shell leftward at the mirrored solution angle; no solution drops the
    /// gun back to the neutral rest angle and stays silent this cycle.
    pub fn fire(&mut self, offset: Vec2, field: &ObstacleField, playfield: &Playfield) {
        match solver::solve(self.muzzle(), offset, field, playfield) {
            Some(solution) => {
                self.firing_angle = solution.angle_deg;
                self.firing_power = solution.speed;
                self.shot = Some(Projectile::new(
                    self.muzzle(),
                    solution.speed,
                    solution.angle_deg + AI_LAUNCH_OFFSET_DEG,
                    playfield,
                ));
            }
            None => {
                self.firing_angle = NEUTRAL_AIM_DEG;
            }
        }
    }

    /// Nearest free travel distance to the left and right of this tank.
    ///
    /// Obstacles on the same plane (vertical center within
    /// `PLANE_THRESHOLD`) contribute signed distances measured against
    /// their boundary pair; sibling tanks at the exact same height
    /// contribute their hitboxes. Unobstructed defaults: the playfield's
    /// right edge on the right, an unbounded sentinel on the left.
    pub fn free_span(
        &self,
        field: &ObstacleField,
        siblings: &[Rect],
        playfield: &Playfield,
    ) -> (f32, f32) {
        let bbox = self.bbox();
        let mut min_left = UNBOUNDED_SPAN;
        let mut min_right = playfield.width - bbox.right();

        for (rect, &(left_boundary, right_boundary)) in field.iter() {
            if (self.pos.y - rect.center_y()).abs() < PLANE_THRESHOLD {
                let right_distance = right_boundary - bbox.right();
                let left_distance = left_boundary - bbox.left();

                if right_distance > 0.0 && right_distance < min_right {
                    min_right = right_distance;
                }
                if left_distance < 0.0 && left_distance.abs() < min_left {
                    min_left = left_distance.abs();
                }
            }
        }

        for sibling in siblings {
            if sibling.top() == self.pos.y {
                let right_distance = sibling.left() - bbox.right();
                let left_distance = sibling.right() - bbox.left();

                if right_distance > 0.0 && right_distance < min_right {
                    min_right = right_distance;
                }
                if left_distance < 0.0 && left_distance.abs() < min_left {
                    min_left = left_distance.abs();
                }
            }
        }

        (min_left, min_right)
    }

    /// Bounded lateral random walk.
    ///
    /// With no queued steps, travel toward the side with the larger free
    /// span, drawing a distance uniformly from [0, span/2] (the halving
    /// leaves room for two tanks closing from opposite directions); equal
    /// spans queue nothing. While steps remain, advance one per tick.
    pub fn move_tank(
        &mut self,
        field: &ObstacleField,
        siblings: &[Rect],
        playfield: &Playfield,
        rng: &mut impl Rng,
    ) {
        if self.moving_steps == 0 {
            let (nearest_left, nearest_right) = self.free_span(field, siblings, playfield);

            if nearest_left < nearest_right {
                self.direction = 1.0;
                self.queue_walk(nearest_right, rng);
            } else if nearest_left > nearest_right {
                self.direction = -1.0;
                self.queue_walk(nearest_left, rng);
            }
        }

        if self.moving_steps > 0 {
            self.pos.x += self.direction * self.speed;
            self.moving_steps -= 1;
        }
    }

    fn queue_walk(&mut self, span: f32, rng: &mut impl Rng) {
        // A degenerate span clamps to zero instead of producing a negative
        // draw range
        let half = (span / 2.0).floor().max(0.0) as i32;
        let distance = rng.random_range(0..=half) as f32;
        self.moving_steps = (distance / self.speed).floor() as u32;
    }

    /// One-tick presentation flag, cleared on read
    pub fn take_recent_hit(&mut self) -> bool {
        std::mem::take(&mut self.got_hit)
    }
}

impl Combatant for EnemyTank {
    fn bbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    fn health(&self) -> i32 {
        self.hp
    }

    fn apply_damage(&mut self, amount: i32) {
        self.hp -= amount;
        self.got_hit = true;
    }
}
