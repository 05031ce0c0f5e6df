//! Player contact with collectibles and adversaries.
//!
//! Capturing an adversary during power mode removes it for the rest of the session.
//! Losing a life only resets positions: whoever is still on the board goes back to
//! its spawn, nobody captured earlier comes back.

use super::*;

impl<C: Chance> Session<C> {
    /// Consumes the collectible under the player, if any. Returns true when it started
    /// (or refreshed) power mode.
    pub(super) fn resolve_collectible_contact(&mut self, tick: u64) -> bool {
        let pos = self.state.player.pos;
        let Some(kind) = self.state.collectibles.remove(&pos) else {
            return false;
        };

        let value = match kind {
            CollectibleKind::Ordinary => self.config.ordinary_value,
            CollectibleKind::Power => self.config.power_value,
        };
        self.state.player.score = self.state.player.score.saturating_add(value);
        self.log.push(LogEvent::CollectibleConsumed { tick, pos, kind, value });

        if kind != CollectibleKind::Power {
            return false;
        }
        let duration_ticks = self.config.power_duration_ticks;
        self.state.power.activate(duration_ticks);
        self.log.push(LogEvent::PowerModeStarted { tick, duration_ticks });
        tracing::debug!(tick, duration_ticks, "power mode started");
        true
    }

    pub(super) fn resolve_adversary_contacts(&mut self, tick: u64) {
        let player_pos = self.state.player.pos;
        let touching: Vec<AdversaryId> = self
            .state
            .adversaries
            .iter()
            .filter(|(_, adversary)| adversary.pos == player_pos)
            .map(|(id, _)| id)
            .collect();

        for id in touching {
            if self.state.power.is_active() {
                if let Some(captured) = self.state.adversaries.remove(id) {
                    let bonus = self.config.adversary_bonus;
                    self.state.player.score = self.state.player.score.saturating_add(bonus);
                    self.log.push(LogEvent::AdversaryCaptured { tick, slot: captured.slot, bonus });
                }
                continue;
            }

            let slot = self.state.adversaries[id].slot;
            let player = &mut self.state.player;
            player.lives = player.lives.saturating_sub(1);
            let lives_left = player.lives;
            self.log.push(LogEvent::LifeLost { tick, slot, lives_left });

            if lives_left == 0 {
                self.state.status = GameState::GameOver;
                let score = self.state.player.score;
                self.log.push(LogEvent::GameOver { tick, score });
                tracing::debug!(tick, score, "game over");
            } else {
                self.reset_positions();
            }
            // Everyone else is back at spawn (or the run is over); one life per tick.
            break;
        }
    }

    fn reset_positions(&mut self) {
        let player = &mut self.state.player;
        player.pos = self.layout.player_spawn;
        player.direction = Direction::Neutral;
        self.clock.rearm_player_gate(self.time.now_ms());

        for (_, adversary) in self.state.adversaries.iter_mut() {
            adversary.pos = adversary.spawn;
            adversary.direction = Direction::Neutral;
        }
    }
}
