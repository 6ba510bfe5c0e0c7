//! Web-specific engine plumbing
//!
//! Provides the browser `localStorage` implementation of the run store and
//! re-exports the core game logic types.

use gloo::storage::{LocalStorage, Storage};

// Re-export all types from rush-game
pub use rush_game::*;

const SNAPSHOT_KEY: &str = "rush.run.snapshot";
const COMPLETION_KEY: &str = "rush.run.daily";

#[derive(Debug, thiserror::Error)]
pub enum WebStoreError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Run store backed by `localStorage`. Reads treat any failure (missing key,
/// quota, corrupt JSON) as absence; the engine never sees a partial record.
pub struct WebRunStore;

impl RunStore for WebRunStore {
    type Error = WebStoreError;

    fn save_snapshot(&self, snapshot: &RunSnapshot) -> Result<(), Self::Error> {
        LocalStorage::set(SNAPSHOT_KEY, snapshot).map_err(|e| {
            log::warn!("run snapshot not saved: {e:?}");
            WebStoreError::Storage(format!("{e:?}"))
        })
    }

    fn load_snapshot(&self) -> Result<Option<RunSnapshot>, Self::Error> {
        match LocalStorage::get(SNAPSHOT_KEY) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(_) => Ok(None), // No save found
        }
    }

    fn clear_snapshot(&self) -> Result<(), Self::Error> {
        LocalStorage::delete(SNAPSHOT_KEY);
        Ok(())
    }

    fn save_completion(&self, record: &DailyCompletionRecord) -> Result<(), Self::Error> {
        LocalStorage::set(COMPLETION_KEY, record).map_err(|e| {
            log::warn!("daily record not saved: {e:?}");
            WebStoreError::Storage(format!("{e:?}"))
        })
    }

    fn load_completion(&self) -> Result<Option<DailyCompletionRecord>, Self::Error> {
        match LocalStorage::get(COMPLETION_KEY) {
            Ok(record) => Ok(Some(record)),
            Err(_) => Ok(None),
        }
    }
}

/// Store used by the shell: `localStorage` in the browser, in-memory when
/// rendering natively (tests, SSR).
#[cfg(target_arch = "wasm32")]
pub type ShellStore = WebRunStore;
#[cfg(not(target_arch = "wasm32"))]
pub type ShellStore = rush_game::MemoryStore;

#[must_use]
pub fn shell_store() -> ShellStore {
    #[cfg(target_arch = "wasm32")]
    {
        WebRunStore
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        rush_game::MemoryStore::new()
    }
}
