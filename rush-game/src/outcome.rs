//! Outcome events emitted by mini-game controllers toward the run engine.

/// Penalty applied when a fail event carries no explicit penalty.
pub const DEFAULT_TIME_PENALTY: u32 = 5;

/// A mini-game's verdict on the current stage attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Stage cleared; the advance is deferred behind the success overlay.
    Success,
    /// Attempt failed. Recoverable when `retry` is set, fatal otherwise.
    Fail,
    /// Stage cleared without the celebratory deferral.
    Complete,
}

/// Optional payload attached to an outcome event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomePayload {
    pub score_delta: Option<i32>,
    pub note: Option<String>,
    /// Fail only: the engine stays on the stage and invites another attempt.
    pub retry: bool,
    /// Fail only: seconds added to the clock. Defaults to
    /// [`DEFAULT_TIME_PENALTY`] when absent.
    pub time_penalty: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcomeEvent {
    pub kind: OutcomeKind,
    pub payload: OutcomePayload,
}

impl GameOutcomeEvent {
    #[must_use]
    pub fn success(score_delta: i32, note: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            payload: OutcomePayload {
                score_delta: Some(score_delta),
                note: Some(note.into()),
                ..OutcomePayload::default()
            },
        }
    }

    #[must_use]
    pub fn complete(score_delta: i32, note: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Complete,
            payload: OutcomePayload {
                score_delta: Some(score_delta),
                note: Some(note.into()),
                ..OutcomePayload::default()
            },
        }
    }

    /// Recoverable failure: penalty plus another attempt at the same stage.
    #[must_use]
    pub fn fail_retry(time_penalty: u32, note: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Fail,
            payload: OutcomePayload {
                note: Some(note.into()),
                retry: true,
                time_penalty: Some(time_penalty),
                ..OutcomePayload::default()
            },
        }
    }

    /// Fatal failure: the run ends after the penalty is applied.
    #[must_use]
    pub fn fail_fatal(note: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Fail,
            payload: OutcomePayload {
                note: Some(note.into()),
                ..OutcomePayload::default()
            },
        }
    }
}

/// Clock context fed to the active mini-game. Absent entirely in a practice
/// context where no global clock applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusContext {
    pub time_elapsed_seconds: u32,
    pub time_left_seconds: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_retry_carries_penalty() {
        let event = GameOutcomeEvent::fail_retry(4, "Wrong number");
        assert_eq!(event.kind, OutcomeKind::Fail);
        assert!(event.payload.retry);
        assert_eq!(event.payload.time_penalty, Some(4));
        assert_eq!(event.payload.score_delta, None);
    }

    #[test]
    fn fatal_fail_has_no_retry_and_default_penalty_slot() {
        let event = GameOutcomeEvent::fail_fatal("Outside the calm");
        assert!(!event.payload.retry);
        assert_eq!(event.payload.time_penalty, None);
    }
}
