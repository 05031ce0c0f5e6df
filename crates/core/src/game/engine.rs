//! Per-tick simulation loop.
//! Order inside one tick: gates, player step, adversary cycle, collectible contact,
//! adversary contact, power countdown, victory check. Nothing spans two ticks except
//! the clock's counters.

use super::ai::steer_adversary;
use super::movement::attempt_move;
use super::*;

impl<C: Chance> Session<C> {
    /// Processes exactly one driver tick and reports the game state afterwards.
    /// Terminal states only advance the tick counter and the time source.
    pub fn advance_one_tick(&mut self) -> GameState {
        let tick = self.tick;
        self.tick += 1;
        self.time.advance();
        if self.state.status.is_terminal() {
            return self.state.status;
        }

        let gates = self.clock.step(self.time.now_ms(), &self.config);

        if gates.animation {
            self.state.player.mouth_open = !self.state.player.mouth_open;
        }

        if gates.player_move {
            let player = &mut self.state.player;
            player.pos = attempt_move(&self.state.grid, player.pos, player.direction);
        }

        if gates.adversaries {
            let mode = self.behavior_mode();
            for (_, adversary) in self.state.adversaries.iter_mut() {
                steer_adversary(adversary, &self.state.grid, mode, &self.config, &mut self.chance);
            }
        }

        let power_refreshed = self.resolve_collectible_contact(tick);
        self.resolve_adversary_contacts(tick);

        // A freshly started power mode begins counting down on the next tick.
        if !power_refreshed && self.state.power.count_down() {
            self.log.push(LogEvent::PowerModeEnded { tick });
            tracing::debug!(tick, "power mode ended");
        }

        self.check_victory(tick);
        self.state.status
    }

    /// Runs up to `max_ticks` ticks, stopping early once the run has finished.
    pub fn advance(&mut self, max_ticks: u32) -> AdvanceResult {
        if let Some(outcome) = self.finished_outcome() {
            return AdvanceResult {
                simulated_ticks: 0,
                stop_reason: AdvanceStopReason::Finished(outcome),
            };
        }

        let mut steps = 0;
        while steps < max_ticks {
            self.advance_one_tick();
            steps += 1;
            if let Some(outcome) = self.finished_outcome() {
                return AdvanceResult {
                    simulated_ticks: steps,
                    stop_reason: AdvanceStopReason::Finished(outcome),
                };
            }
        }
        AdvanceResult { simulated_ticks: steps, stop_reason: AdvanceStopReason::BudgetExhausted }
    }
}
