use std::fs;

use arena_core::{BattleEvent, BattleOutcome, RecordingSink};
use arena_runtime::{Advance, Arena, EventLogSink, FanoutSink, PaceMode, ScriptedPacer};

/// End-to-End Session Scenario Test
///
/// This test walks a complete play session:
/// 1. Arena loads content from a data directory
/// 2. Two players pick presets by index
/// 3. The battle is watched round by round, then switched to skip
/// 4. Events reach every sink and the report is exported as JSON
#[test]
fn test_complete_session_scenario() {
    // ================================================================
    // PHASE 1: Content loading
    // ================================================================
    let data = tempfile::tempdir().expect("temp dir");
    fs::write(
        data.path().join("roster.ron"),
        r#"[
            (name: "Swordsman", class: "Swordsman", max_health: 100, attack: 25, defense: 8),
            (name: "Mage", class: "Mage", max_health: 80, attack: 35, defense: 5),
        ]"#,
    )
    .expect("write roster");
    fs::write(
        data.path().join("names.toml"),
        r#"character_names = ["Ayla", "Bren", "Cato"]"#,
    )
    .expect("write names");
    fs::write(
        data.path().join("info.toml"),
        "[game_info]\ncontent = \"Two fighters enter.\"\n",
    )
    .expect("write info");

    let mut arena = Arena::builder()
        .data_dir(data.path())
        .expect("content should load")
        .seed(2024)
        .build();

    assert_eq!(arena.info(), Some("Two fighters enter."));
    assert_eq!(arena.settings().battle.max_rounds, 50);

    // ================================================================
    // PHASE 2: Manual selection
    // ================================================================
    let matchup = arena.select(0, 1).expect("valid presets");
    assert_eq!(matchup.first.name(), "Player 1");
    assert_eq!(matchup.second.class(), "Mage");

    // ================================================================
    // PHASE 3: Watching the battle
    // ================================================================
    let logs = tempfile::tempdir().expect("temp dir");
    let recorder = RecordingSink::new();
    let event_log = EventLogSink::create(logs.path(), "events.jsonl").expect("create log");
    let log_path = event_log.path().to_path_buf();

    let mut session = arena
        .start(matchup, FanoutSink::new().with(recorder.clone()).with(event_log))
        .expect("battle should start");
    assert_eq!(session.mode(), PaceMode::Manual);

    let first = session.step().expect("round").expect("not finished");
    assert_eq!(first.round, 1);

    let mut pacer = ScriptedPacer::new([Advance::Next, Advance::Skip]);
    let report = session.run(&mut pacer).expect("battle should finish");

    assert_eq!(session.mode(), PaceMode::Instant);
    assert!(pacer.asked() <= 2);
    assert_eq!(report.outcome, BattleOutcome::Victory);
    assert!(report.total_rounds <= 50);

    // ================================================================
    // PHASE 4: Sinks and export
    // ================================================================
    let events = recorder.events();
    assert!(matches!(events.first(), Some(BattleEvent::Started { .. })));
    assert!(matches!(
        events.last(),
        Some(BattleEvent::Ended {
            outcome: BattleOutcome::Victory,
            ..
        })
    ));
    assert_eq!(events.len(), report.total_rounds as usize + 2);

    let json: serde_json::Value =
        serde_json::from_str(&session.report_json().expect("json")).expect("valid json");
    assert_eq!(json["report"]["outcome"], "victory");
    assert_eq!(json["report"]["total_rounds"], report.total_rounds);
    assert_eq!(json["summary"]["ended"], true);

    drop(session);
    let replayed = EventLogSink::read_events(&log_path).expect("read log");
    assert_eq!(replayed, events);
}

#[test]
fn test_session_seed_replays_the_whole_session() {
    let play = || {
        let mut arena = Arena::builder().seed(99).build();
        let matchup = arena.random().expect("builtin roster");
        let names = (
            matchup.first.name().to_owned(),
            matchup.second.name().to_owned(),
        );
        let mut session = arena
            .start(matchup, RecordingSink::new())
            .expect("battle should start")
            .with_mode(PaceMode::Instant);
        let report = session.run(&mut ScriptedPacer::default()).expect("finish");
        (names, report)
    };

    let (names, report) = play();
    assert_ne!(names.0, names.1);
    assert_eq!(play(), (names, report));
}

#[test]
fn test_successive_battles_use_fresh_streams() {
    let mut arena = Arena::builder().seed(7).build();
    let mut logs = Vec::new();
    for _ in 0..2 {
        let matchup = arena.select(0, 0).expect("valid presets");
        let mut session = arena
            .start(matchup, RecordingSink::new())
            .expect("battle should start");
        session.finish().expect("finish");
        logs.push(session.into_battle().log().to_vec());
    }
    assert_ne!(logs[0], logs[1]);
}

#[test]
fn test_broken_content_is_reported() {
    let data = tempfile::tempdir().expect("temp dir");
    fs::write(data.path().join("roster.ron"), "not ron at all").expect("write roster");

    let err = Arena::builder().data_dir(data.path()).unwrap_err();
    assert!(err.to_string().contains("failed to load arena content"));
}
