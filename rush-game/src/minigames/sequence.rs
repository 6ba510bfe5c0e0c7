//! Controller for the sequence-completion stage.

use rand::Rng;

use crate::minigames::SelectResult;
use crate::outcome::GameOutcomeEvent;
use crate::puzzles::sequence::{SequenceRoundInstance, prepare_rounds};

const WRONG_NUMBER_PENALTY: u32 = 4;

pub struct SequenceSession {
    rounds: Vec<SequenceRoundInstance>,
    round_index: usize,
    total_score: u32,
    locked: bool,
    finished: bool,
}

impl SequenceSession {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            rounds: prepare_rounds(rng),
            round_index: 0,
            total_score: 0,
            locked: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&SequenceRoundInstance> {
        self.rounds.get(self.round_index)
    }

    #[must_use]
    pub const fn round_index(&self) -> usize {
        self.round_index
    }

    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub const fn locked(&self) -> bool {
        self.locked
    }

    pub fn select(&mut self, option_index: usize) -> SelectResult {
        if self.locked || self.finished {
            return SelectResult::Ignored;
        }
        let Some(round) = self.rounds.get(self.round_index) else {
            return SelectResult::Ignored;
        };
        let Some(option) = round.options.get(option_index) else {
            return SelectResult::Ignored;
        };
        if *option != round.answer {
            return SelectResult::Wrong(GameOutcomeEvent::fail_retry(
                WRONG_NUMBER_PENALTY,
                "Wrong number",
            ));
        }
        self.total_score += round.points;
        self.locked = true;
        SelectResult::RoundWon
    }

    pub fn advance_round(&mut self) -> Option<GameOutcomeEvent> {
        if !self.locked || self.finished {
            return None;
        }
        if self.round_index + 1 >= self.rounds.len() {
            self.finished = true;
            return Some(GameOutcomeEvent::success(
                self.total_score as i32,
                "Sequence completed",
            ));
        }
        self.round_index += 1;
        self.locked = false;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn answer_index(session: &SequenceSession) -> usize {
        let round = session.round().unwrap();
        round.options.iter().position(|o| *o == round.answer).unwrap()
    }

    #[test]
    fn full_clear_sums_round_points() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let mut session = SequenceSession::new(&mut rng);
        let mut last = None;
        for _ in 0..3 {
            let index = answer_index(&session);
            assert_eq!(session.select(index), SelectResult::RoundWon);
            last = session.advance_round();
        }
        let event = last.expect("success after round three");
        assert_eq!(event.payload.score_delta, Some(140));
        assert_eq!(event.payload.note.as_deref(), Some("Sequence completed"));
    }

    #[test]
    fn wrong_number_keeps_the_round_open() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut session = SequenceSession::new(&mut rng);
        let round = session.round().unwrap();
        let wrong = round.options.iter().position(|o| *o != round.answer).unwrap();
        assert!(matches!(session.select(wrong), SelectResult::Wrong(_)));
        assert!(!session.locked());
        assert_eq!(session.round_index(), 0);
    }
}
