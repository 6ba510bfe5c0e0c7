//! Controller for the rhythm-tap stage: one tap, one verdict.

use rand::Rng;

use crate::outcome::GameOutcomeEvent;
use crate::puzzles::timing::{
    PulseResult, PulseZone, evaluate, generate_speed, generate_zone,
};

const MISS_PENALTY: u32 = 5;

pub struct TimingSession {
    zone: PulseZone,
    speed: f32,
    resolved: bool,
    result: Option<PulseResult>,
}

impl TimingSession {
    pub fn new(rng: &mut impl Rng, practice: bool) -> Self {
        Self {
            zone: generate_zone(rng),
            speed: generate_speed(practice, rng),
            resolved: false,
            result: None,
        }
    }

    #[must_use]
    pub const fn zone(&self) -> PulseZone {
        self.zone
    }

    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    #[must_use]
    pub const fn resolved(&self) -> bool {
        self.resolved
    }

    #[must_use]
    pub const fn result(&self) -> Option<PulseResult> {
        self.result
    }

    /// Grade the single tap. A miss is fatal at the engine: the fail event
    /// carries no retry flag. Subsequent taps are swallowed.
    pub fn tap(&mut self, position: f32) -> Option<(PulseResult, GameOutcomeEvent)> {
        if self.resolved {
            return None;
        }
        self.resolved = true;
        let result = evaluate(self.zone, position);
        self.result = Some(result);
        let event = if result.is_success() {
            GameOutcomeEvent::success(result.score_delta(), result.note())
        } else {
            let mut event = GameOutcomeEvent::fail_fatal(result.note());
            event.payload.time_penalty = Some(MISS_PENALTY);
            event
        };
        Some((result, event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::OutcomeKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn session() -> TimingSession {
        let mut rng = ChaCha20Rng::seed_from_u64(33);
        TimingSession::new(&mut rng, false)
    }

    #[test]
    fn center_tap_is_a_perfect_success() {
        let mut session = session();
        let (result, event) = session.tap(session.zone().center()).unwrap();
        assert_eq!(result, PulseResult::Perfect);
        assert_eq!(event.kind, OutcomeKind::Success);
        assert_eq!(event.payload.score_delta, Some(140));
    }

    #[test]
    fn far_tap_is_a_fatal_miss() {
        let mut session = session();
        let (result, event) = session.tap(0.0).unwrap();
        assert_eq!(result, PulseResult::Miss);
        assert_eq!(event.kind, OutcomeKind::Fail);
        assert!(!event.payload.retry);
        assert_eq!(event.payload.time_penalty, Some(5));
    }

    #[test]
    fn second_tap_is_swallowed() {
        let mut session = session();
        assert!(session.tap(50.0).is_some());
        assert!(session.tap(50.0).is_none());
    }
}
