//! Tank Duel - a 2D artillery-dueling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ballistics, collisions, AI targeting, game state)
//! - `playfield`: Explicit world configuration passed to every sim component
//!
//! Rendering, asset loading, and input polling live outside this crate; the
//! sim exposes per-tick snapshots (positions, health, projectile state) that
//! a front end consumes.

pub mod playfield;
pub mod sim;

pub use playfield::Playfield;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (the y axis grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 1100.0;
    pub const PLAYFIELD_HEIGHT: f32 = 700.0;
    /// Height of the floor strip at the bottom of the playfield
    pub const FLOOR_HEIGHT: f32 = 50.0;
    /// Gravitational acceleration, in playfield units per step squared
    pub const GRAVITY: f32 = 1.0;

    /// Time step for a live (rendered) projectile
    pub const FLIGHT_DT: f32 = 0.5;
    /// Finer time step used by the solver's offline forward simulation
    pub const SOLVER_DT: f32 = 0.1;
    /// Hard cap on forward-simulation steps per trial trajectory
    pub const SOLVER_MAX_STEPS: u32 = 4096;

    /// Projectile bounding box edge length
    pub const BULLET_SIZE: f32 = 7.0;
    pub const BULLET_DAMAGE: i32 = 50;

    /// Tank bounding box edge length
    pub const TANK_SIZE: f32 = 70.0;
    pub const TANK_MAX_HP: i32 = 100;
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Gun angle an AI tank falls back to when no firing solution exists
    pub const NEUTRAL_AIM_DEG: f32 = 30.0;
    /// Right edge of the zone the player tank may occupy
    pub const PLAYER_ZONE_RIGHT: f32 = 500.0;

    /// Candidate launch speeds tried by the solver: `SPEED_STEPS` values
    /// linearly spaced over [SPEED_MIN, SPEED_MAX], tuned to playfield scale
    pub const SPEED_MIN: f32 = 1.0;
    pub const SPEED_MAX: f32 = 41.0;
    pub const SPEED_STEPS: u32 = 21;

    /// Obstacles whose vertical center is within this distance of a tank
    /// constrain its lateral motion ("same plane")
    pub const PLANE_THRESHOLD: f32 = 100.0;
    /// Leftward free-span sentinel when nothing obstructs that side
    pub const UNBOUNDED_SPAN: f32 = 999_999.0;

    /// Wall-clock milliseconds per simulation tick (60 Hz frame)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Levels in the campaign
    pub const LEVEL_COUNT: u32 = 8;
    pub const STARTING_LIVES: u8 = 3;
}
