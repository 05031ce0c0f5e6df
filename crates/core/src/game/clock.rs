//! Multi-cadence gating on top of the single external tick.
//! Each gate keeps its own counter or timestamp; none is derived from another.
//! Power mode countdown lives with [`crate::state::PowerMode`].

use std::time::Instant;

use crate::config::SimConfig;

/// Where the player gate reads "now" from.
#[derive(Clone, Debug)]
pub enum TimeSource {
    /// Every tick advances time by exactly one nominal period.
    Virtual { period_ms: u64, now_ms: u64 },
    /// Real monotonic time since the session was created.
    Wall { origin: Instant },
}

impl TimeSource {
    pub fn virtual_steps(period_ms: u64) -> Self {
        TimeSource::Virtual { period_ms, now_ms: 0 }
    }

    pub fn wall() -> Self {
        TimeSource::Wall { origin: Instant::now() }
    }

    pub(crate) fn advance(&mut self) {
        if let TimeSource::Virtual { period_ms, now_ms } = self {
            *now_ms = now_ms.saturating_add(*period_ms);
        }
    }

    pub fn now_ms(&self) -> u64 {
        match self {
            TimeSource::Virtual { now_ms, .. } => *now_ms,
            TimeSource::Wall { origin } => {
                u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateFirings {
    pub animation: bool,
    pub player_move: bool,
    pub adversaries: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationClock {
    last_player_move_ms: u64,
    adversary_ticks: u32,
    animation_ticks: u32,
}

impl SimulationClock {
    pub fn new(now_ms: u64) -> Self {
        Self { last_player_move_ms: now_ms, adversary_ticks: 0, animation_ticks: 0 }
    }

    /// Restarts the player gate's timer without touching the tick counters.
    pub fn rearm_player_gate(&mut self, now_ms: u64) {
        self.last_player_move_ms = now_ms;
    }

    pub fn step(&mut self, now_ms: u64, config: &SimConfig) -> GateFirings {
        self.animation_ticks += 1;
        let animation = self.animation_ticks >= config.animation_divisor;
        if animation {
            self.animation_ticks = 0;
        }

        let player_move =
            now_ms.saturating_sub(self.last_player_move_ms) >= config.player_move_delay_ms;
        if player_move {
            self.last_player_move_ms = now_ms;
        }

        self.adversary_ticks += 1;
        let adversaries = self.adversary_ticks >= config.adversary_move_divisor;
        if adversaries {
            self.adversary_ticks = 0;
        }

        GateFirings { animation, player_move, adversaries }
    }

    pub(crate) fn counters(&self) -> (u64, u32, u32) {
        (self.last_player_move_ms, self.adversary_ticks, self.animation_ticks)
    }
}
