//! The run engine: one complete attempt at the daily stage sequence.
//!
//! The engine is a synchronous state machine. It owns every field of the run
//! aggregate and the storage handle, and it never reads the wall clock or
//! schedules timers itself: the shell drives it with `tick_second`, passes
//! "now" into the operations that need it, and owns the short perceptual
//! delays between `begin`-style operations and `commit_advance`.

use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::RunStore;
use crate::daily;
use crate::outcome::{
    DEFAULT_TIME_PENALTY, GameOutcomeEvent, OutcomeKind, StatusContext,
};
use crate::snapshot::{DailyCompletionRecord, RunSnapshot};
use crate::stage::{DAILY_STAGES, StageId, build_sequence};

/// Delay between marking a transition and committing it, in milliseconds.
/// The engine does not sleep; the shell schedules `commit_advance` after this.
pub const STAGE_TRANSITION_MS: u32 = 220;

/// Success-overlay dwell before the shell acknowledges, in milliseconds.
pub const OVERLAY_DWELL_MS: u32 = 500;
pub const OVERLAY_DWELL_FINAL_MS: u32 = 900;

/// Cadence for recomputing the advisory daily lock, in milliseconds.
pub const DAILY_LOCK_REFRESH_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunPhase {
    #[default]
    Idle,
    Playing,
    Finished,
}

/// Configuration fixed for the lifetime of an engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Number of stages per run.
    pub sequence_length: usize,
    /// Global time budget fed to stages through [`StatusContext`].
    pub total_time: u32,
    /// Pool the sequence is drawn from.
    pub pool: Vec<StageId>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sequence_length: 5,
            total_time: 20,
            pool: DAILY_STAGES.to_vec(),
        }
    }
}

/// Marker for a success advance deferred behind the celebratory overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessOverlay {
    pub final_stage: bool,
}

/// What the engine did with an outcome event, so the shell can choreograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Dropped: wrong phase, duplicate success, or guarded transition.
    Ignored,
    /// Dropped: the event came from a replaced controller instance.
    Stale,
    /// Penalty applied; the stage stays up for another attempt.
    RetryAllowed,
    /// Fatal fail; the run is now finished.
    RunEnded,
    /// Success pended; the shell shows the overlay, then acknowledges.
    OverlayPending { final_stage: bool },
    /// A transition began; the shell commits after [`STAGE_TRANSITION_MS`].
    TransitionStarted,
}

/// Result of committing a staged transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceCommit {
    /// Duplicate timer fire or no transition staged.
    Ignored,
    /// Moved to the next stage; a fresh controller generation is live.
    NextStage,
    /// That was the final stage; the run finished successfully.
    Finished,
}

pub struct RunEngine<S: RunStore> {
    store: S,
    config: RunConfig,
    rng: ChaCha20Rng,
    seed: u64,

    phase: RunPhase,
    sequence: Vec<StageId>,
    current_index: usize,
    score: u32,
    time_elapsed: u32,
    notes: Vec<String>,
    penalty_count: u32,
    run_failed: bool,

    overlay: Option<SuccessOverlay>,
    /// Stage index whose success awaits acknowledgement.
    pending_advance: Option<usize>,
    /// Stage index staged for commit by `begin_advance`.
    staged_index: Option<usize>,
    transitioning: bool,
    advance_guard: bool,

    /// Bumped for every fresh controller instance; events carrying an older
    /// generation are discarded.
    generation: u64,
    daily_locked: bool,
}

impl<S: RunStore> RunEngine<S> {
    /// Initialize the engine: compute the daily lock and, if a playable
    /// snapshot survives in the store, resume it.
    pub fn new(config: RunConfig, store: S, seed: u64, now: NaiveDateTime) -> Self {
        let mut engine = Self {
            store,
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            phase: RunPhase::Idle,
            sequence: Vec::new(),
            current_index: 0,
            score: 0,
            time_elapsed: 0,
            notes: Vec::new(),
            penalty_count: 0,
            run_failed: false,
            overlay: None,
            pending_advance: None,
            staged_index: None,
            transitioning: false,
            advance_guard: false,
            generation: 0,
            daily_locked: false,
        };
        engine.refresh_daily_lock(now);
        engine.try_resume();
        engine
    }

    /// Begin a fresh run, overwriting any in-progress one.
    ///
    /// Returns `false` (and stays idle) when the configured pool is empty.
    pub fn start(&mut self) -> bool {
        let sequence = build_sequence(&self.config.pool, self.config.sequence_length, &mut self.rng);
        if sequence.is_empty() {
            return false;
        }
        let _ = self.store.clear_snapshot();
        self.sequence = sequence;
        self.phase = RunPhase::Playing;
        self.current_index = 0;
        self.score = 0;
        self.time_elapsed = 0;
        self.notes.clear();
        self.penalty_count = 0;
        self.run_failed = false;
        self.overlay = None;
        self.pending_advance = None;
        self.staged_index = None;
        self.transitioning = false;
        self.advance_guard = false;
        self.generation += 1;
        self.persist();
        true
    }

    /// The core reducer. `generation` is the controller generation captured
    /// when the emitting stage instance was created.
    pub fn resolve_outcome(&mut self, generation: u64, event: GameOutcomeEvent) -> Resolution {
        if generation != self.generation {
            return Resolution::Stale;
        }
        if self.phase != RunPhase::Playing || self.current_stage().is_none() {
            return Resolution::Ignored;
        }
        if event.kind == OutcomeKind::Success
            && (self.pending_advance.is_some() || self.overlay.is_some())
        {
            // Duplicate success before acknowledgement: drop it whole.
            return Resolution::Ignored;
        }

        if let Some(delta) = event.payload.score_delta {
            self.score = self.score.saturating_add_signed(delta);
        }
        if let Some(note) = &event.payload.note {
            let stage_name = self
                .current_stage()
                .map_or("Stage", StageId::name);
            self.notes.push(format!("{stage_name}: {note}"));
        }

        match event.kind {
            OutcomeKind::Fail => {
                let penalty = event
                    .payload
                    .time_penalty
                    .unwrap_or(DEFAULT_TIME_PENALTY);
                self.time_elapsed += penalty;
                self.penalty_count += 1;
                if event.payload.retry {
                    self.persist();
                    return Resolution::RetryAllowed;
                }
                self.run_failed = true;
                self.finish();
                Resolution::RunEnded
            }
            OutcomeKind::Success => {
                let final_stage = self.current_index + 1 == self.sequence.len();
                self.overlay = Some(SuccessOverlay { final_stage });
                self.pending_advance = Some(self.current_index);
                self.persist();
                Resolution::OverlayPending { final_stage }
            }
            OutcomeKind::Complete => {
                self.persist();
                if self.begin_advance(self.current_index) {
                    Resolution::TransitionStarted
                } else {
                    Resolution::Ignored
                }
            }
        }
    }

    /// Release a pending success: clears the overlay and stages the advance.
    /// No-op unless a success is pending.
    pub fn acknowledge_success(&mut self) -> Resolution {
        let Some(stage_index) = self.pending_advance.take() else {
            return Resolution::Ignored;
        };
        self.overlay = None;
        if self.begin_advance(stage_index) {
            Resolution::TransitionStarted
        } else {
            Resolution::Ignored
        }
    }

    /// Commit a staged transition after the perceptual delay. Safe to call
    /// on a stray timer fire; the guard turns duplicates into no-ops.
    pub fn commit_advance(&mut self, now: NaiveDateTime) -> AdvanceCommit {
        let Some(stage_index) = self.staged_index.take() else {
            return AdvanceCommit::Ignored;
        };
        self.transitioning = false;
        self.advance_guard = false;
        if stage_index + 1 >= self.sequence.len() {
            self.run_failed = false;
            self.finish();
            self.record_completion(now);
            return AdvanceCommit::Finished;
        }
        self.current_index = stage_index + 1;
        self.generation += 1;
        self.persist();
        AdvanceCommit::NextStage
    }

    /// One second of play time. No-op outside the playing phase.
    pub fn tick_second(&mut self) {
        if self.phase != RunPhase::Playing {
            return;
        }
        self.time_elapsed += 1;
        self.persist();
    }

    /// Recompute the advisory daily lock against the stored completion
    /// record. Policy enforcement belongs to the shell.
    pub fn refresh_daily_lock(&mut self, now: NaiveDateTime) {
        let record = self.store.load_completion().ok().flatten();
        self.daily_locked = daily::is_locked(record.as_ref(), now);
    }

    fn begin_advance(&mut self, stage_index: usize) -> bool {
        if self.advance_guard {
            return false;
        }
        self.advance_guard = true;
        self.transitioning = true;
        self.staged_index = Some(stage_index);
        true
    }

    fn finish(&mut self) {
        self.phase = RunPhase::Finished;
        self.overlay = None;
        self.pending_advance = None;
        self.staged_index = None;
        self.transitioning = false;
        self.advance_guard = false;
        let _ = self.store.clear_snapshot();
    }

    fn record_completion(&mut self, now: NaiveDateTime) {
        let record = DailyCompletionRecord {
            last_completed_window_key: daily::window_key(now),
        };
        let _ = self.store.save_completion(&record);
        self.daily_locked = true;
    }

    fn persist(&self) {
        if self.phase != RunPhase::Playing {
            return;
        }
        let snapshot = RunSnapshot {
            phase: self.phase,
            sequence_ids: self.sequence.iter().map(|s| s.to_string()).collect(),
            current_index: self.current_index,
            score: self.score,
            time_elapsed_seconds: self.time_elapsed,
            notes: self.notes.clone(),
        };
        // Persistence is an optimization, never a correctness requirement.
        let _ = self.store.save_snapshot(&snapshot);
    }

    fn try_resume(&mut self) {
        if self.phase != RunPhase::Idle {
            return;
        }
        let Ok(Some(snapshot)) = self.store.load_snapshot() else {
            return;
        };
        if snapshot.phase != RunPhase::Playing || snapshot.sequence_ids.is_empty() {
            let _ = self.store.clear_snapshot();
            return;
        }
        let mut sequence = Vec::with_capacity(snapshot.sequence_ids.len());
        for id in &snapshot.sequence_ids {
            match StageId::from_str(id) {
                Ok(stage) => sequence.push(stage),
                // Never attempt a partial restoration.
                Err(()) => {
                    let _ = self.store.clear_snapshot();
                    return;
                }
            }
        }
        if snapshot.current_index >= sequence.len() {
            let _ = self.store.clear_snapshot();
            return;
        }
        self.sequence = sequence;
        self.current_index = snapshot.current_index;
        self.score = snapshot.score;
        self.time_elapsed = snapshot.time_elapsed_seconds;
        self.notes = snapshot.notes;
        self.phase = RunPhase::Playing;
        self.generation += 1;
    }

    #[must_use]
    pub const fn phase(&self) -> RunPhase {
        self.phase
    }

    #[must_use]
    pub fn sequence(&self) -> &[StageId] {
        &self.sequence
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// The stage currently in play, if any.
    #[must_use]
    pub fn current_stage(&self) -> Option<StageId> {
        if self.phase != RunPhase::Playing {
            return None;
        }
        self.sequence.get(self.current_index).copied()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }

    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    #[must_use]
    pub const fn penalty_count(&self) -> u32 {
        self.penalty_count
    }

    #[must_use]
    pub const fn run_failed(&self) -> bool {
        self.run_failed
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<SuccessOverlay> {
        self.overlay
    }

    #[must_use]
    pub const fn transitioning(&self) -> bool {
        self.transitioning
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn daily_locked(&self) -> bool {
        self.daily_locked
    }

    #[must_use]
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Deterministic seed for the current controller instance, derived from
    /// the engine seed and generation so replaced controllers never share
    /// puzzle state.
    #[must_use]
    pub const fn controller_seed(&self) -> u64 {
        self.seed ^ self.generation.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    /// Clock context for the active stage.
    #[must_use]
    pub const fn status(&self) -> StatusContext {
        StatusContext {
            time_elapsed_seconds: self.time_elapsed,
            time_left_seconds: self.config.total_time.saturating_sub(self.time_elapsed),
        }
    }
}
