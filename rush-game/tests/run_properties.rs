//! End-to-end properties of the run engine: idempotent success, penalty
//! accumulation, fatal fails, pool exhaustion, persistence round-trips, and
//! the daily window boundary.

use chrono::{NaiveDate, NaiveDateTime};
use rush_game::{
    AdvanceCommit, GameOutcomeEvent, MemoryStore, Resolution, RunConfig, RunEngine,
    RunPhase, StageId,
};

fn at(day: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(hh, mm, 0)
        .unwrap()
}

fn started(config: RunConfig, store: MemoryStore) -> RunEngine<MemoryStore> {
    let mut engine = RunEngine::new(config, store, 0xC0FFEE, at(5, 12, 0));
    assert!(engine.start());
    engine
}

#[test]
fn idempotent_success_never_double_advances() {
    let mut engine = started(RunConfig::default(), MemoryStore::new());
    let generation = engine.generation();

    let first = engine.resolve_outcome(generation, GameOutcomeEvent::success(30, "done"));
    assert!(matches!(first, Resolution::OverlayPending { .. }));
    let second = engine.resolve_outcome(generation, GameOutcomeEvent::success(30, "done"));
    assert_eq!(second, Resolution::Ignored);

    assert_eq!(engine.score(), 30);
    assert_eq!(engine.overlay().map(|o| o.final_stage), Some(false));
    assert_eq!(engine.acknowledge_success(), Resolution::TransitionStarted);
    assert_eq!(engine.acknowledge_success(), Resolution::Ignored);
    assert_eq!(engine.commit_advance(at(5, 12, 0)), AdvanceCommit::NextStage);
    assert_eq!(engine.current_index(), 1);
    assert_eq!(engine.commit_advance(at(5, 12, 0)), AdvanceCommit::Ignored);
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn penalties_accumulate_without_moving_the_stage() {
    let mut engine = started(RunConfig::default(), MemoryStore::new());
    let generation = engine.generation();
    let stage_before = engine.current_stage();

    for n in 1..=4u32 {
        let resolution = engine.resolve_outcome(
            generation,
            GameOutcomeEvent::fail_retry(5, "not yet"),
        );
        assert_eq!(resolution, Resolution::RetryAllowed);
        assert_eq!(engine.time_elapsed(), 5 * n);
        assert_eq!(engine.penalty_count(), n);
    }
    assert_eq!(engine.current_stage(), stage_before);
    assert_eq!(engine.phase(), RunPhase::Playing);
}

#[test]
fn fatal_fail_terminates_from_any_stage() {
    for stages_cleared in 0..3 {
        let mut engine = started(RunConfig::default(), MemoryStore::new());
        for _ in 0..stages_cleared {
            let generation = engine.generation();
            engine.resolve_outcome(generation, GameOutcomeEvent::success(10, "ok"));
            engine.acknowledge_success();
            engine.commit_advance(at(5, 12, 0));
        }
        let generation = engine.generation();
        let resolution =
            engine.resolve_outcome(generation, GameOutcomeEvent::fail_fatal("collapse"));
        assert_eq!(resolution, Resolution::RunEnded);
        assert_eq!(engine.phase(), RunPhase::Finished);
        assert!(engine.run_failed());
    }
}

#[test]
fn short_pool_fills_the_whole_sequence() {
    let config = RunConfig {
        sequence_length: 5,
        pool: vec![StageId::Timing, StageId::Sequence],
        ..RunConfig::default()
    };
    let engine = started(config, MemoryStore::new());
    assert_eq!(engine.sequence().len(), 5);
    for stage in [StageId::Timing, StageId::Sequence] {
        let count = engine.sequence().iter().filter(|s| **s == stage).count();
        assert!(count >= 2, "{stage} drawn only {count} times");
    }
}

#[test]
fn snapshot_round_trips_into_a_fresh_engine() {
    let store = MemoryStore::new();
    let mut engine = started(RunConfig::default(), store.clone());
    let generation = engine.generation();
    engine.resolve_outcome(generation, GameOutcomeEvent::success(75, "first stage down"));
    engine.acknowledge_success();
    engine.commit_advance(at(5, 12, 0));
    engine.tick_second();
    engine.tick_second();

    let restored = RunEngine::new(RunConfig::default(), store, 0xB0BA, at(5, 12, 1));
    assert_eq!(restored.phase(), RunPhase::Playing);
    assert_eq!(restored.current_index(), engine.current_index());
    assert_eq!(restored.score(), engine.score());
    assert_eq!(restored.time_elapsed(), engine.time_elapsed());
    assert_eq!(restored.notes(), engine.notes());
    assert_eq!(restored.sequence(), engine.sequence());
}

#[test]
fn finishing_clears_the_snapshot_and_locks_the_window() {
    let store = MemoryStore::new();
    let mut engine = started(RunConfig::default(), store.clone());
    loop {
        let generation = engine.generation();
        engine.resolve_outcome(generation, GameOutcomeEvent::success(10, "ok"));
        engine.acknowledge_success();
        if engine.commit_advance(at(5, 14, 30)) == AdvanceCommit::Finished {
            break;
        }
    }
    assert!(store.snapshot().is_none());
    let record = store.completion().expect("completion recorded");
    assert_eq!(record.last_completed_window_key, "2026-08-04");

    // A new engine the same evening sees the lock; after the boundary it
    // does not.
    let locked = RunEngine::new(RunConfig::default(), store.clone(), 1, at(5, 23, 30));
    assert!(locked.daily_locked());
    let unlocked = RunEngine::new(RunConfig::default(), store, 1, at(6, 0, 1));
    assert!(!unlocked.daily_locked());
}

#[test]
fn daily_boundary_flips_an_existing_lock() {
    let store = MemoryStore::new();
    let mut engine = RunEngine::new(RunConfig::default(), store, 2, at(5, 23, 30));
    engine.start();
    loop {
        let generation = engine.generation();
        engine.resolve_outcome(generation, GameOutcomeEvent::success(10, "ok"));
        engine.acknowledge_success();
        // Completion lands at 23:58 on day 5, inside the 2026-08-04 window.
        if engine.commit_advance(at(5, 23, 58)) == AdvanceCommit::Finished {
            break;
        }
    }
    assert!(engine.daily_locked());
    engine.refresh_daily_lock(at(5, 23, 30));
    assert!(engine.daily_locked());
    engine.refresh_daily_lock(at(6, 0, 1));
    assert!(!engine.daily_locked());
}

#[test]
fn failed_runs_leave_the_day_replayable() {
    let store = MemoryStore::new();
    let mut engine = started(RunConfig::default(), store.clone());
    let generation = engine.generation();
    engine.resolve_outcome(generation, GameOutcomeEvent::fail_fatal("interrupted"));
    assert_eq!(engine.phase(), RunPhase::Finished);
    assert!(store.completion().is_none());
    assert!(!engine.daily_locked());
    assert!(engine.start(), "restart after a failed run must be allowed");
}

#[test]
fn restart_overwrites_an_in_progress_run() {
    let store = MemoryStore::new();
    let mut engine = started(RunConfig::default(), store.clone());
    let generation = engine.generation();
    engine.resolve_outcome(generation, GameOutcomeEvent::fail_retry(5, "stumble"));
    assert_eq!(engine.time_elapsed(), 5);

    assert!(engine.start());
    assert_eq!(engine.time_elapsed(), 0);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.penalty_count(), 0);
    assert!(engine.notes().is_empty());
    assert_eq!(store.snapshot().unwrap().time_elapsed_seconds, 0);
}
