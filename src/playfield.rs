//! World configuration
//!
//! The playfield bounds and gravity are injected into every sim component at
//! construction rather than read from shared module state, so tests can run
//! the solver and steppers against arbitrary worlds.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed world parameters for one run of the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    /// Horizontal extent; projectiles past this edge are gone
    pub width: f32,
    /// Vertical extent; the y axis grows downward from 0 at the top
    pub height: f32,
    /// Height of the floor strip at the bottom
    pub floor_height: f32,
    /// Constant downward acceleration applied to projectiles
    pub gravity: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            floor_height: FLOOR_HEIGHT,
            gravity: GRAVITY,
        }
    }
}

impl Playfield {
    /// Vertical position of the floor surface
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height - self.floor_height
    }
}
