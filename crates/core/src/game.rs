use std::error::Error;
use std::fmt;

use slotmap::SlotMap;

use crate::config::{ConfigError, SimConfig};
use crate::level::{Level, LevelError, LevelLayout};
use crate::state::{Adversary, Player, PowerMode, SessionState};
use crate::types::*;

pub mod ai;
pub mod chance;
pub mod clock;
mod collision;
mod engine;
mod hash;
mod lifecycle;
pub mod movement;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_support;

use chance::{Chance, SimRng};
use clock::{SimulationClock, TimeSource};

#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    Level(LevelError),
    Config(ConfigError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(e) => write!(f, "level setup failed: {e}"),
            Self::Config(e) => write!(f, "config setup failed: {e}"),
        }
    }
}

impl Error for SetupError {}

impl From<LevelError> for SetupError {
    fn from(e: LevelError) -> Self {
        Self::Level(e)
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// One play session: the single owner of every piece of mutable simulation state.
pub struct Session<C: Chance = SimRng> {
    seed: u64,
    tick: u64,
    config: SimConfig,
    layout: LevelLayout,
    chance: C,
    time: TimeSource,
    clock: SimulationClock,
    state: SessionState,
    log: Vec<LogEvent>,
    quit_requested: bool,
}

impl Session<SimRng> {
    pub fn new(level: &Level, config: SimConfig, seed: u64) -> Result<Self, SetupError> {
        Self::with_chance(level, config, seed, SimRng::seed_from_u64(seed))
    }
}

impl<C: Chance> Session<C> {
    /// Builds a session around an explicit randomness source. `seed` is only recorded.
    pub fn with_chance(
        level: &Level,
        config: SimConfig,
        seed: u64,
        chance: C,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let layout = level.build()?;
        let time = TimeSource::virtual_steps(config.tick_period_ms);
        let clock = SimulationClock::new(time.now_ms());
        let state = initial_state(&layout, &config);
        tracing::debug!(
            seed,
            width = layout.grid.width(),
            height = layout.grid.height(),
            collectibles = layout.collectibles.len(),
            "session created"
        );
        Ok(Self {
            seed,
            tick: 0,
            config,
            layout,
            chance,
            time,
            clock,
            state,
            log: Vec::new(),
            quit_requested: false,
        })
    }

    /// Swaps the time source feeding the player gate and rearms the gate against it.
    pub fn with_time_source(mut self, time: TimeSource) -> Self {
        self.time = time;
        self.clock.rearm_player_gate(self.time.now_ms());
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn game_state(&self) -> GameState {
        self.state.status
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn behavior_mode(&self) -> BehaviorMode {
        if self.state.power.is_active() { BehaviorMode::Flee } else { BehaviorMode::Chase }
    }
}

fn initial_state(layout: &LevelLayout, config: &SimConfig) -> SessionState {
    let mut adversaries = SlotMap::with_key();
    for &(slot, spawn) in &layout.adversary_spawns {
        adversaries.insert(Adversary { slot, pos: spawn, direction: Direction::Neutral, spawn });
    }

    SessionState {
        grid: layout.grid.clone(),
        player: Player {
            pos: layout.player_spawn,
            direction: Direction::Neutral,
            score: 0,
            lives: config.starting_lives,
            mouth_open: false,
        },
        adversaries,
        collectibles: layout.collectibles.clone(),
        power: PowerMode::default(),
        status: GameState::Playing,
    }
}
