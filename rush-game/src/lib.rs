//! The Rush game engine
//!
//! Platform-agnostic core logic for The Rush, a daily puzzle run of chained
//! mini-games. This crate provides the run engine, the grid-tracing path
//! engine, puzzle generation, and mini-game controllers without UI or
//! platform-specific dependencies.

pub mod daily;
pub mod minigames;
pub mod outcome;
pub mod path;
pub mod puzzles;
pub mod run;
pub mod share;
pub mod snapshot;
pub mod stage;

// Re-export commonly used types
pub use daily::{next_reset, time_until_reset, window_key};
pub use minigames::{
    BoardEvent, EliminateSession, GuessOutcome, LanguageSession, MiniGridSession,
    SelectResult, SequenceSession, StageController, TimingSession, WordleSession, ZipSession,
};
pub use outcome::{
    DEFAULT_TIME_PENALTY, GameOutcomeEvent, OutcomeKind, OutcomePayload, StatusContext,
};
pub use path::{Anchor, Cell, PathEngine, PathStatus, VisitOutcome};
pub use run::{
    AdvanceCommit, DAILY_LOCK_REFRESH_MS, OVERLAY_DWELL_FINAL_MS, OVERLAY_DWELL_MS,
    Resolution, RunConfig, RunEngine, RunPhase, STAGE_TRANSITION_MS, SuccessOverlay,
};
pub use share::{
    SHARE_NOTE_COPIED, SHARE_NOTE_SHARED, SHARE_NOTE_UNAVAILABLE, SHARE_TITLE,
    format_run_time, share_payload,
};
pub use snapshot::{DailyCompletionRecord, MemoryStore, RunSnapshot};
pub use stage::{ALL_STAGES, DAILY_STAGES, StageId, StageInfo, build_sequence};

/// Trait for abstracting the durable run records.
/// Platform-specific shells provide this; the engine treats every error as
/// absence of saved state.
pub trait RunStore {
    type Error: std::error::Error + 'static;

    /// Persist the mid-run snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_snapshot(&self, snapshot: &RunSnapshot) -> Result<(), Self::Error>;

    /// Load the mid-run snapshot, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_snapshot(&self) -> Result<Option<RunSnapshot>, Self::Error>;

    /// Delete the mid-run snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be deleted.
    fn clear_snapshot(&self) -> Result<(), Self::Error>;

    /// Persist the daily completion record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save_completion(&self, record: &DailyCompletionRecord) -> Result<(), Self::Error>;

    /// Load the daily completion record, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_completion(&self) -> Result<Option<DailyCompletionRecord>, Self::Error>;
}
