//! Fixed timestep simulation tick
//!
//! One tick = one frame. Update order is fixed and never interleaves:
//! player first (steer, aim, charge, fire, advance + resolve its shell),
//! then each AI tank in list order (aim, walk, maybe-fire, advance +
//! resolve its shell), then dead-enemy removal, then level-flow
//! bookkeeping. Enemy removal is two-phase: destroyed tanks are flagged
//! during the pass and compacted after it, so the iteration never mutates
//! the list it is walking.

use crate::consts::*;
use super::combat::{self, Combatant, Outcome};
use super::rect::Rect;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steer the player tank left/right
    pub left: bool,
    pub right: bool,
    /// Raise/lower the player's gun
    pub aim_up: bool,
    pub aim_down: bool,
    /// Hold to charge firing power
    pub charge: bool,
    /// Release the charged shot (edge-triggered by the front end)
    pub fire: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    let playfield = state.playfield;

    // Player update
    state.player.steer(input.left, input.right);
    state.player.adjust_aim(input.aim_up, input.aim_down);
    if input.charge {
        state.player.charge();
    }
    if input.fire && !state.player.has_live_shot() {
        log::debug!(
            "player fires: angle {:.1} power {:.0}",
            state.player.firing_angle,
            state.player.firing_power
        );
        state.player.fire(&playfield);
    }

    if let Some(shot) = state.player.shot.as_mut() {
        shot.advance();
    }
    if let Some(shot) = state.player.shot {
        // The player's shell is tested against every enemy; all overlapped
        // enemies take damage on the same tick
        let mut outcome = Outcome::None;
        for enemy in state.enemies.iter_mut() {
            match combat::resolve(&shot, &state.field, &playfield, enemy) {
                Outcome::None => {}
                terminal => outcome = terminal,
            }
        }
        if outcome.is_terminal() {
            state.player.shot = None;
        }
    }

    // AI updates, fixed order; each tank's full update completes before the
    // next begins
    for i in 0..state.enemies.len() {
        let siblings: Vec<Rect> = state
            .enemies
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, e)| e.bbox())
            .collect();

        let aim_offset = state.enemies[i].pos - state.player.pos;
        let enemy = &mut state.enemies[i];

        enemy.update_aim(aim_offset, &state.field, &playfield);
        enemy.move_tank(&state.field, &siblings, &playfield, &mut state.rng);

        if !enemy.has_live_shot() && enemy.since_fire_ms > enemy.reload_ms {
            // Offset re-read after the walk; the muzzle may have moved
            let fire_offset = enemy.pos - state.player.pos;
            enemy.fire(fire_offset, &state.field, &playfield);
            enemy.since_fire_ms = 0.0;
            if enemy.has_live_shot() {
                log::debug!(
                    "enemy {} fires: angle {:.1} speed {:.0}",
                    i,
                    enemy.firing_angle,
                    enemy.firing_power
                );
            }
        }

        if let Some(shot) = enemy.shot.as_mut() {
            shot.advance();
        }
        if let Some(shot) = enemy.shot {
            if combat::resolve(&shot, &state.field, &playfield, &mut state.player).is_terminal() {
                enemy.shot = None;
            }
        }
    }

    // Two-phase removal of destroyed enemies
    let before = state.enemies.len();
    state.enemies.retain(|e| !e.is_destroyed());
    if state.enemies.len() < before {
        log::info!(
            "{} enemy tank(s) destroyed, {} remain",
            before - state.enemies.len(),
            state.enemies.len()
        );
    }

    // Level flow: a cleared level wins over a simultaneous player death
    if state.enemies.is_empty() {
        state.phase = if state.level == LEVEL_COUNT {
            GamePhase::Victory
        } else {
            GamePhase::LevelCleared
        };
        log::info!("level {} cleared", state.level);
    } else if state.player.is_destroyed() {
        state.phase = if state.lives <= 1 {
            GamePhase::GameOver
        } else {
            GamePhase::PlayerDown
        };
        log::info!("player down ({} lives left)", state.lives.saturating_sub(1));
    }

    // Reload clocks run for every enemy, fired or not
    for enemy in &mut state.enemies {
        enemy.since_fire_ms += FRAME_MS;
    }
}
