use chase_core::{
    Direction, GameState, InputJournal, InputPayload, Intent, Level, ReplayError, Session,
    SimConfig, replay_to_end,
};

/// Play a session while journaling every intent, ship the journal as one JSON document,
/// then replay the decoded copy. The snapshot hash must match.
#[test]
fn json_journal_replays_to_the_live_hash() {
    let level = Level::classic();
    let seed = 12345u64;

    let mut session = Session::new(&level, SimConfig::default(), seed).unwrap();
    let mut journal = InputJournal::new(seed, level.content_hash());

    let script = [
        (0, Intent::Move(Direction::Left)),
        (30, Intent::Move(Direction::Up)),
        (31, Intent::Move(Direction::Right)),
        (250, Intent::Move(Direction::Down)),
        (400, Intent::Move(Direction::Left)),
    ];
    for (tick, intent) in script {
        while session.current_tick() < tick {
            session.advance_one_tick();
        }
        session.apply_intent(intent);
        journal.append_intent(session.current_tick(), intent);
    }
    session.advance(500);
    let live_hash = session.snapshot_hash();
    journal.append_checkpoint(session.current_tick(), live_hash);

    let text = serde_json::to_string(&journal).unwrap();
    let decoded: InputJournal = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, journal);
    assert_eq!(decoded.inputs.len(), 6);

    let result = replay_to_end(&level, &SimConfig::default(), &decoded).unwrap();
    assert_eq!(result.final_snapshot_hash, live_hash);
    assert_eq!(result.final_tick, session.current_tick());
    assert_eq!(result.checkpoints_verified, 1);
}

/// Game over, restart and play on: the restart intent lands on the same tick in replay.
#[test]
fn restart_after_game_over_replays_identically() {
    let level = Level::classic();
    let config = SimConfig { starting_lives: 1, ..SimConfig::default() };
    let seed = 9;

    let mut session = Session::new(&level, config.clone(), seed).unwrap();
    let mut journal = InputJournal::new(seed, level.content_hash());
    session.apply_intent(Intent::Move(Direction::Right));
    journal.append_intent(0, Intent::Move(Direction::Right));

    session.advance(20_000);
    if session.game_state() != GameState::Playing {
        session.apply_intent(Intent::Restart);
        journal.append_intent(session.current_tick(), Intent::Restart);
    }
    session.advance(100);
    journal.append_checkpoint(session.current_tick(), session.snapshot_hash());

    let result = replay_to_end(&level, &config, &journal).unwrap();
    assert_eq!(result.final_snapshot_hash, session.snapshot_hash());
    assert_eq!(result.final_state, session.game_state());
}

#[test]
fn tampered_checkpoint_reports_divergence() {
    let level = Level::classic();
    let mut session = Session::new(&level, SimConfig::default(), 5).unwrap();
    session.advance(90);

    let mut journal = InputJournal::new(5, level.content_hash());
    journal.append_checkpoint(session.current_tick(), session.snapshot_hash().wrapping_add(1));

    let result = replay_to_end(&level, &SimConfig::default(), &journal);
    assert!(matches!(result, Err(ReplayError::Diverged { seq: 0, .. })), "got: {result:?}");
}

#[test]
fn checkpoint_payload_survives_json() {
    let mut journal = InputJournal::new(1, 2);
    journal.append_checkpoint(7, u64::MAX);
    let decoded: InputJournal =
        serde_json::from_str(&serde_json::to_string(&journal).unwrap()).unwrap();
    assert_eq!(decoded.inputs[0].payload, InputPayload::Checkpoint { snapshot_hash: u64::MAX });
}
