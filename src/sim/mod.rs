//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed actor update order
//! - No rendering or platform dependencies
//!
//! A front end drives `tick::tick` once per frame with a `TickInput` and
//! reads the `GameState` back as its render snapshot.

pub mod actor;
pub mod combat;
pub mod level;
pub mod obstacles;
pub mod projectile;
pub mod rect;
pub mod solver;
pub mod state;
pub mod tick;

pub use actor::{EnemyTank, PlayerTank};
pub use combat::{Combatant, Outcome, resolve};
pub use level::{EnemySpawn, LevelLayout, layout};
pub use obstacles::ObstacleField;
pub use projectile::Projectile;
pub use rect::Rect;
pub use solver::{FiringSolution, solve};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
