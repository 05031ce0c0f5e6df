//! Tunable simulation constants.
//!
//! Defaults reproduce the reference game: a ~33 ms driver, a 150 ms player gate,
//! adversaries every second tick, a 15-tick animation toggle and a 300-tick power mode.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Nominal driver period. Only used by the virtual time source and for rescaling.
    pub tick_period_ms: u64,
    /// Minimum elapsed time between two player move attempts.
    pub player_move_delay_ms: u64,
    /// Adversaries take one AI cycle every `adversary_move_divisor` ticks.
    pub adversary_move_divisor: u32,
    /// Player animation phase flips every `animation_divisor` ticks.
    pub animation_divisor: u32,
    /// Power mode length, counted in driver ticks.
    pub power_duration_ticks: u32,
    pub ordinary_value: u32,
    pub power_value: u32,
    pub adversary_bonus: u32,
    pub starting_lives: u32,
    pub flee_move_chance: f64,
    pub chase_reconsider_chance: f64,
    pub switch_direction_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 33,
            player_move_delay_ms: 150,
            adversary_move_divisor: 2,
            animation_divisor: 15,
            power_duration_ticks: 300,
            ordinary_value: 10,
            power_value: 50,
            adversary_bonus: 200,
            starting_lives: 3,
            flee_move_chance: 0.30,
            chase_reconsider_chance: 0.15,
            switch_direction_chance: 0.30,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroValue { field: &'static str },
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroValue { field } => write!(f, "config field `{field}` must be non-zero"),
            Self::ProbabilityOutOfRange { field, value } => {
                write!(f, "config field `{field}` must lie in [0, 1], got {value}")
            }
            Self::Parse(message) => write!(f, "invalid config TOML: {message}"),
        }
    }
}

impl Error for ConfigError {}

impl SimConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_zero = [
            ("tick_period_ms", self.tick_period_ms),
            ("player_move_delay_ms", self.player_move_delay_ms),
            ("adversary_move_divisor", u64::from(self.adversary_move_divisor)),
            ("animation_divisor", u64::from(self.animation_divisor)),
            ("power_duration_ticks", u64::from(self.power_duration_ticks)),
            ("starting_lives", u64::from(self.starting_lives)),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::ZeroValue { field });
            }
        }

        let probabilities = [
            ("flee_move_chance", self.flee_move_chance),
            ("chase_reconsider_chance", self.chase_reconsider_chance),
            ("switch_direction_chance", self.switch_direction_chance),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// Re-targets the driver period, stretching or shrinking the power duration so it
    /// still covers the same wall-clock span. Never rounds down to zero ticks.
    pub fn with_tick_period(mut self, tick_period_ms: u64) -> Self {
        let period = tick_period_ms.max(1);
        let span_ms = u64::from(self.power_duration_ticks) * self.tick_period_ms;
        let ticks = (span_ms + period / 2) / period;
        self.power_duration_ticks = u32::try_from(ticks.max(1)).unwrap_or(u32::MAX);
        self.tick_period_ms = period;
        self
    }
}
