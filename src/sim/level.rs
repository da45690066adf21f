//! The campaign's hand-authored levels
//!
//! Eight fixed layouts: enemy placements with per-tank reload times, plus
//! the obstacle set. Pure configuration data; nothing here is solver logic.
//! Positions are derived from the playfield so the table tracks the world
//! dimensions.

use glam::Vec2;

use crate::Playfield;
use crate::consts::LEVEL_COUNT;
use super::obstacles::ObstacleField;

/// One enemy's starting state
#[derive(Debug, Clone, Copy)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    /// Milliseconds between fire attempts
    pub reload_ms: f32,
}

/// Everything needed to populate one level
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub player: Vec2,
    pub enemies: Vec<EnemySpawn>,
    pub field: ObstacleField,
}

/// Build the layout for a 1-based level index
pub fn layout(level: u32, playfield: &Playfield) -> LevelLayout {
    let level = level.clamp(1, LEVEL_COUNT);

    // Tanks sit 54 units above the surface they stand on
    let ground_y = playfield.floor_y() - 54.0;
    let platform_y = playfield.height / 2.0 - 104.0;
    let ledge_y = 96.0;

    let spawn = |x: f32, y: f32, reload_ms: f32| EnemySpawn { x, y, reload_ms };

    let mut field = ObstacleField::new();
    // Every level has the center wall
    field.add_obstacle(500.0, playfield.height / 2.0 + 50.0, 40.0, playfield.height / 2.0);
    if level >= 6 {
        // The right-side platform
        field.add_obstacle(
            playfield.width / 2.0 + 250.0,
            playfield.height / 2.0 - 50.0,
            playfield.width / 2.0 - 250.0,
            40.0,
        );
    }
    if level >= 8 {
        // The high ledge above the wall
        field.add_obstacle(500.0, 150.0, 200.0, 40.0);
    }

    let enemies = match level {
        // A single sitting duck that never fires
        1 => vec![spawn(700.0, ground_y, 100_000.0)],
        2 => vec![spawn(700.0, ground_y, 5000.0)],
        3 => vec![spawn(700.0, ground_y, 4000.0), spawn(1000.0, ground_y, 5500.0)],
        4 => vec![spawn(700.0, ground_y, 2500.0), spawn(1000.0, ground_y, 3500.0)],
        5 => vec![
            spawn(700.0, ground_y, 3000.0),
            spawn(1000.0, ground_y, 3500.0),
            spawn(850.0, ground_y, 4000.0),
        ],
        6 => vec![
            spawn(700.0, ground_y, 3500.0),
            spawn(1000.0, ground_y, 3000.0),
            spawn(1000.0, platform_y, 2000.0),
        ],
        7 => vec![
            spawn(700.0, ground_y, 3500.0),
            spawn(1000.0, ground_y, 3000.0),
            spawn(1000.0, platform_y, 2000.0),
            spawn(900.0, platform_y, 4500.0),
        ],
        _ => vec![
            spawn(700.0, ground_y, 3500.0),
            spawn(1000.0, ground_y, 3000.0),
            spawn(1000.0, platform_y, 2000.0),
            spawn(900.0, platform_y, 4500.0),
            spawn(550.0, ledge_y, 100.0),
        ],
    };

    LevelLayout {
        player: Vec2::new(100.0, ground_y),
        enemies,
        field,
    }
}
