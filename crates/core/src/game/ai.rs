//! Adversary steering: one decision and at most one step per adversary cadence tick.
//!
//! Chase mode mostly keeps the current heading, even into a wall, and only now and then
//! re-evaluates. Flee mode skips most ticks entirely and, when it does act, picks among
//! legal headings. Both routes finish through [`movement`](super::movement) so adversaries
//! obey the same walls and tunnels as the player.

use super::chance::Chance;
use super::movement::{legal_directions, step_target};
use crate::config::SimConfig;
use crate::grid::GridWorld;
use crate::state::Adversary;
use crate::types::{BehaviorMode, Direction};

pub fn steer_adversary<C: Chance>(
    adversary: &mut Adversary,
    grid: &GridWorld,
    mode: BehaviorMode,
    config: &SimConfig,
    chance: &mut C,
) {
    match mode {
        BehaviorMode::Flee => {
            if !chance.chance(config.flee_move_chance) {
                return;
            }
            reconsider_and_step(adversary, grid, config, chance);
        }
        BehaviorMode::Chase => {
            if chance.chance(config.chase_reconsider_chance) {
                reconsider_and_step(adversary, grid, config, chance);
            } else if let Some(next) = step_target(grid, adversary.pos, adversary.direction) {
                adversary.pos = next;
            }
            // A blocked heading simply stalls until the next reconsideration.
        }
    }
}

fn reconsider_and_step<C: Chance>(
    adversary: &mut Adversary,
    grid: &GridWorld,
    config: &SimConfig,
    chance: &mut C,
) {
    let legal = legal_directions(grid, adversary.pos);
    if !legal.is_empty() && chance.chance(config.switch_direction_chance) {
        adversary.direction = legal[chance.pick_index(legal.len())];
    }

    match step_target(grid, adversary.pos, adversary.direction) {
        Some(next) => adversary.pos = next,
        None if legal.is_empty() => adversary.direction = Direction::Neutral,
        // Blocked: take a fresh legal heading now, the step itself waits for the next cycle.
        None => adversary.direction = legal[chance.pick_index(legal.len())],
    }
}
