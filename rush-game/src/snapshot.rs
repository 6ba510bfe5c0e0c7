//! Durable projections of a run: the mid-run snapshot and the daily
//! completion record.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use crate::RunStore;
use crate::run::RunPhase;

/// Externally durable projection of an in-progress run. Written on every
/// state change while playing, cleared on any terminal transition, and read
/// only when a fresh engine initializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub phase: RunPhase,
    pub sequence_ids: Vec<String>,
    pub current_index: usize,
    pub score: u32,
    pub time_elapsed_seconds: u32,
    pub notes: Vec<String>,
}

/// Window key of the last successfully completed run. Overwritten only on a
/// non-failed finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCompletionRecord {
    pub last_completed_window_key: String,
}

/// In-memory store used by native tests and non-browser shells. Shares its
/// slots through `Rc` so a test can inspect what the engine persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Rc<RefCell<Option<RunSnapshot>>>,
    completion: Rc<RefCell<Option<DailyCompletionRecord>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the persisted snapshot without going through the trait.
    #[must_use]
    pub fn snapshot(&self) -> Option<RunSnapshot> {
        self.snapshot.borrow().clone()
    }

    #[must_use]
    pub fn completion(&self) -> Option<DailyCompletionRecord> {
        self.completion.borrow().clone()
    }

    /// Seed the store with a snapshot, as if a previous session had saved it.
    pub fn set_snapshot(&self, snapshot: Option<RunSnapshot>) {
        *self.snapshot.borrow_mut() = snapshot;
    }

    pub fn set_completion(&self, record: Option<DailyCompletionRecord>) {
        *self.completion.borrow_mut() = record;
    }
}

impl RunStore for MemoryStore {
    type Error = Infallible;

    fn save_snapshot(&self, snapshot: &RunSnapshot) -> Result<(), Self::Error> {
        *self.snapshot.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }

    fn load_snapshot(&self) -> Result<Option<RunSnapshot>, Self::Error> {
        Ok(self.snapshot.borrow().clone())
    }

    fn clear_snapshot(&self) -> Result<(), Self::Error> {
        *self.snapshot.borrow_mut() = None;
        Ok(())
    }

    fn save_completion(&self, record: &DailyCompletionRecord) -> Result<(), Self::Error> {
        *self.completion.borrow_mut() = Some(record.clone());
        Ok(())
    }

    fn load_completion(&self) -> Result<Option<DailyCompletionRecord>, Self::Error> {
        Ok(self.completion.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let snapshot = RunSnapshot {
            phase: RunPhase::Playing,
            sequence_ids: vec!["timing".into(), "zipPuzzle".into()],
            current_index: 1,
            score: 120,
            time_elapsed_seconds: 42,
            notes: vec!["Timing: Pulse aligned".into()],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"sequenceIds\""));
        assert!(json.contains("\"timeElapsedSeconds\""));
        let back: RunSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn memory_store_roundtrips_both_records() {
        let store = MemoryStore::new();
        assert!(store.load_snapshot().unwrap().is_none());

        let record = DailyCompletionRecord {
            last_completed_window_key: "2026-08-05".into(),
        };
        store.save_completion(&record).unwrap();
        assert_eq!(store.load_completion().unwrap(), Some(record));

        let snapshot = RunSnapshot {
            phase: RunPhase::Playing,
            sequence_ids: vec!["eliminate".into()],
            current_index: 0,
            score: 0,
            time_elapsed_seconds: 0,
            notes: Vec::new(),
        };
        store.save_snapshot(&snapshot).unwrap();
        store.clear_snapshot().unwrap();
        assert!(store.load_snapshot().unwrap().is_none());
    }
}
