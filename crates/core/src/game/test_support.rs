//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating level, grid and randomness setup across many tests.
//! It does not own production gameplay logic.

use std::collections::VecDeque;

use super::*;
use crate::grid::GridWorld;

/// Power collectible position in [`corridor_level`].
pub(crate) const CORRIDOR_POWER: Coord = Coord::new(4, 1);

/// Plays back fixed rolls and picks, then falls back to a roll that never passes a check.
#[derive(Clone, Debug)]
pub(crate) struct ScriptedChance {
    rolls: VecDeque<f64>,
    picks: VecDeque<usize>,
    rolls_taken: usize,
}

impl ScriptedChance {
    pub(crate) fn new(rolls: &[f64], picks: &[usize]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            picks: picks.iter().copied().collect(),
            rolls_taken: 0,
        }
    }

    pub(crate) fn never() -> Self {
        Self::new(&[], &[])
    }

    pub(crate) fn rolls_taken(&self) -> usize {
        self.rolls_taken
    }
}

impl Chance for ScriptedChance {
    fn roll(&mut self) -> f64 {
        self.rolls_taken += 1;
        self.rolls.pop_front().unwrap_or(0.999)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len - 1)
    }
}

pub(crate) fn grid_from_rows(rows: &[&str]) -> GridWorld {
    let width = rows[0].len();
    let cells = rows
        .iter()
        .flat_map(|row| row.chars().map(|c| if c == '#' { Cell::Wall } else { Cell::Open }))
        .collect();
    GridWorld::from_cells(width, rows.len(), cells)
}

pub(crate) fn lone_adversary(pos: Coord, direction: Direction) -> Adversary {
    Adversary { slot: AdversarySlot(0), pos, direction, spawn: pos }
}

/// Seven-cell corridor with tunnels at both ends:
/// player spawn (1,1), adversaries at (5,1) and (6,1), power collectible at (4,1).
pub(crate) fn corridor_level() -> Level {
    Level {
        rows: vec!["#######".into(), ".......".into(), "#######".into()],
        player_spawn: Coord::new(1, 1),
        adversary_spawns: vec![Coord::new(5, 1), Coord::new(6, 1)],
        power_positions: vec![CORRIDOR_POWER],
        home_region: None,
        tunnel_rows: vec![1],
    }
}

/// 3x3 board, all open except a wall at (1,1); player (0,0), one adversary (2,2).
pub(crate) fn three_by_three_level() -> Level {
    Level {
        rows: vec!["...".into(), ".#.".into(), "...".into()],
        player_spawn: Coord::new(0, 0),
        adversary_spawns: vec![Coord::new(2, 2)],
        power_positions: Vec::new(),
        home_region: None,
        tunnel_rows: Vec::new(),
    }
}

/// Session whose adversaries never choose to do anything on their own.
pub(crate) fn scripted_session(level: &Level, config: SimConfig) -> Session<ScriptedChance> {
    Session::with_chance(level, config, 0, ScriptedChance::never()).expect("fixture level is valid")
}

pub(crate) fn first_adversary<C: Chance>(session: &Session<C>) -> AdversaryId {
    session.state.adversaries.keys().next().expect("fixture has adversaries")
}
