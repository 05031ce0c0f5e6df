//! Game lifecycle: Playing -> Victory | GameOver, and back to Playing on restart.
//! Also the entry point for decoded input intents.

use super::*;

impl<C: Chance> Session<C> {
    pub fn apply_intent(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::Quit => {
                self.quit_requested = true;
                IntentOutcome::QuitRequested
            }
            Intent::Move(direction) => {
                if self.state.status != GameState::Playing {
                    return IntentOutcome::Ignored;
                }
                self.state.player.direction = direction;
                IntentOutcome::Accepted
            }
            Intent::Restart => {
                if !self.state.status.is_terminal() {
                    return IntentOutcome::Ignored;
                }
                self.restart();
                IntentOutcome::Accepted
            }
        }
    }

    pub fn finished_outcome(&self) -> Option<RunOutcome> {
        match self.state.status {
            GameState::Playing => None,
            GameState::Victory => Some(RunOutcome::Victory),
            GameState::GameOver => Some(RunOutcome::Defeat),
        }
    }

    /// Rebuilds actors, collectibles, score, lives, power mode and gates from the level.
    /// The tick counter, time source and randomness stream carry on.
    fn restart(&mut self) {
        self.state = initial_state(&self.layout, &self.config);
        self.clock = SimulationClock::new(self.time.now_ms());
        self.log.push(LogEvent::Restarted { tick: self.tick });
        tracing::debug!(tick = self.tick, "session restarted");
    }

    pub(super) fn check_victory(&mut self, tick: u64) {
        if self.state.status != GameState::Playing || !self.state.collectibles.is_empty() {
            return;
        }
        self.state.status = GameState::Victory;
        let score = self.state.player.score;
        self.log.push(LogEvent::Victory { tick, score });
        tracing::debug!(tick, score, "victory");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn move_intents_are_ignored_outside_playing() {
        let mut session = scripted_session(&corridor_level(), SimConfig::default());
        assert_eq!(session.apply_intent(Intent::Move(Direction::Left)), IntentOutcome::Accepted);
        assert_eq!(session.state.player.direction, Direction::Left);

        session.state.status = GameState::GameOver;
        assert_eq!(session.apply_intent(Intent::Move(Direction::Right)), IntentOutcome::Ignored);
        assert_eq!(session.state.player.direction, Direction::Left);
    }

    #[test]
    fn restart_is_only_accepted_from_a_terminal_state() {
        let mut session = scripted_session(&corridor_level(), SimConfig::default());
        assert_eq!(session.apply_intent(Intent::Restart), IntentOutcome::Ignored);

        session.state.status = GameState::Victory;
        session.state.player.score = 990;
        session.state.player.lives = 1;
        session.state.collectibles.clear();
        session.state.power.activate(12);
        let captured = first_adversary(&session);
        session.state.adversaries.remove(captured);

        assert_eq!(session.apply_intent(Intent::Restart), IntentOutcome::Accepted);
        assert_eq!(session.state.status, GameState::Playing);
        assert_eq!(session.state.player.score, 0);
        assert_eq!(session.state.player.lives, 3);
        assert!(!session.state.power.is_active());
        assert_eq!(session.state.adversaries.len(), 2);
        assert_eq!(session.state.collectibles.len(), session.layout.collectibles.len());
        assert!(matches!(session.log().last(), Some(LogEvent::Restarted { .. })));
    }

    #[test]
    fn quit_is_reported_in_any_state() {
        let mut session = scripted_session(&corridor_level(), SimConfig::default());
        session.state.status = GameState::GameOver;
        assert_eq!(session.apply_intent(Intent::Quit), IntentOutcome::QuitRequested);
        assert!(session.quit_requested());
    }

    #[test]
    fn victory_needs_every_collectible_gone() {
        let mut session = scripted_session(&corridor_level(), SimConfig::default());
        session.state.collectibles.retain(|_, kind| *kind == CollectibleKind::Power);
        session.check_victory(0);
        assert_eq!(session.state.status, GameState::Playing);

        session.state.collectibles.clear();
        session.check_victory(1);
        assert_eq!(session.state.status, GameState::Victory);
        assert_eq!(session.finished_outcome(), Some(RunOutcome::Victory));
    }
}
