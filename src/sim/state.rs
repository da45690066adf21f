//! Game state
//!
//! All state a front end needs for rendering lives here and is
//! serializable, so a full per-tick snapshot is just the `GameState`
//! itself. The obstacle field is built once per level and never mutated
//! afterwards; actor health and projectile slots are only touched by the
//! tick pass.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Playfield;
use crate::consts::*;
use super::actor::{EnemyTank, PlayerTank};
use super::level;
use super::obstacles::ObstacleField;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active simulation
    Playing,
    /// All enemies destroyed; awaiting `advance_level`
    LevelCleared,
    /// Player destroyed with lives to spare; awaiting `retry_level`
    PlayerDown,
    /// Final level cleared
    Victory,
    /// Player destroyed on the last life
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Deterministic RNG driving the enemy random walk
    pub rng: Pcg32,
    /// Current level, 1-based
    pub level: u32,
    /// Player lives remaining
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub playfield: Playfield,
    pub player: PlayerTank,
    /// AI tanks in fixed update order
    pub enemies: Vec<EnemyTank>,
    /// This level's immutable obstacle set
    pub field: ObstacleField,
}

impl GameState {
    /// Start a new run at level 1
    pub fn new(seed: u64) -> Self {
        let playfield = Playfield::default();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            lives: STARTING_LIVES,
            time_ticks: 0,
            phase: GamePhase::Playing,
            playfield,
            player: PlayerTank::new(glam::Vec2::ZERO),
            enemies: Vec::new(),
            field: ObstacleField::new(),
        };
        state.load_level();
        state
    }

    /// (Re)build actors and obstacles for the current level index
    fn load_level(&mut self) {
        let layout = level::layout(self.level, &self.playfield);

        self.player = PlayerTank::new(layout.player);
        self.enemies = layout
            .enemies
            .iter()
            .map(|s| EnemyTank::new(s.x, s.y, s.reload_ms))
            .collect();
        self.field = layout.field;

        log::info!(
            "Level {} ready: {} enemies, {} obstacles",
            self.level,
            self.enemies.len(),
            self.field.len()
        );
    }

    /// Move on after a cleared level
    pub fn advance_level(&mut self) {
        debug_assert_eq!(self.phase, GamePhase::LevelCleared);
        self.level += 1;
        self.phase = GamePhase::Playing;
        self.load_level();
    }

    /// Spend a life and replay the current level
    pub fn retry_level(&mut self) {
        debug_assert_eq!(self.phase, GamePhase::PlayerDown);
        self.lives = self.lives.saturating_sub(1);
        self.phase = GamePhase::Playing;
        self.load_level();
    }

    /// Fresh run from level 1 with a new seed
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}
