//! Tank Duel entry point
//!
//! Headless driver: runs the campaign with a scripted autoplayer standing
//! in for real input, then prints the final state snapshot. A graphical
//! front end would replace this loop, feeding `tick` from real input and
//! rendering the `GameState` each frame.

use glam::Vec2;

use tank_duel::sim::{GamePhase, GameState, TickInput, tick};

/// Safety valve for a run that never converges
const MAX_TICKS: u64 = 200_000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("Tank Duel (headless) starting with seed {seed}");

    let mut state = GameState::new(seed);
    let mut ticks = 0u64;

    while ticks < MAX_TICKS {
        match state.phase {
            GamePhase::Playing => {
                let input = autoplay(&state);
                tick(&mut state, &input);
                ticks += 1;
            }
            GamePhase::LevelCleared => {
                log::info!("advancing to level {}", state.level + 1);
                state.advance_level();
            }
            GamePhase::PlayerDown => {
                log::info!("retrying level {}", state.level);
                state.retry_level();
            }
            GamePhase::Victory | GamePhase::GameOver => break,
        }
    }

    println!(
        "run finished after {} ticks: {:?} at level {} with {} lives",
        state.time_ticks, state.phase, state.level, state.lives
    );
    let snapshot = serde_json::to_string(&state).expect("state serializes");
    println!("final snapshot: {snapshot}");
}

/// Minimal stand-in for a human: track the lead enemy, charge to full
/// power, and release when the gun lines up.
fn autoplay(state: &GameState) -> TickInput {
    if state.player.has_live_shot() {
        return TickInput::default();
    }

    let want = desired_angle(state);
    let current = state.player.firing_angle;

    let mut input = TickInput {
        charge: true,
        ..Default::default()
    };
    if current + 1.0 <= want {
        input.aim_up = true;
    } else if current - 1.0 >= want {
        input.aim_down = true;
    }
    if state.player.firing_power >= 100.0 && (current - want).abs() < 1.5 {
        input.fire = true;
    }
    input
}

/// High-arc launch angle for a full-power shot at the lead enemy's center,
/// from the vacuum range equation. The steep root clears the center wall;
/// obstacle checking is the AI's job, not this driver's.
fn desired_angle(state: &GameState) -> f32 {
    let Some(enemy) = state.enemies.first() else {
        return 45.0;
    };
    let muzzle = state.player.muzzle();
    let target = enemy.pos + Vec2::splat(enemy.size / 2.0);

    let dx = (target.x - muzzle.x).max(1.0);
    let v0 = 35.0_f32; // full-power launch speed
    let ratio = (state.playfield.gravity * dx / (v0 * v0)).clamp(-1.0, 1.0);

    90.0 - ratio.asin().to_degrees() / 2.0
}
