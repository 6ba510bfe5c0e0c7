//! Controller for the language-guessing stage.

use rand::Rng;

use crate::minigames::SelectResult;
use crate::outcome::GameOutcomeEvent;
use crate::puzzles::language::{
    LanguageRoundInstance, POINTS_PER_ROUND, TOTAL_LANGUAGE_ROUNDS, sample_rounds,
};

const WRONG_GUESS_PENALTY: u32 = 4;

pub struct LanguageSession {
    rounds: Vec<LanguageRoundInstance>,
    round_index: usize,
    total_score: u32,
    locked: bool,
    finished: bool,
}

impl LanguageSession {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            rounds: sample_rounds(TOTAL_LANGUAGE_ROUNDS, rng),
            round_index: 0,
            total_score: 0,
            locked: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&LanguageRoundInstance> {
        self.rounds.get(self.round_index)
    }

    #[must_use]
    pub const fn round_index(&self) -> usize {
        self.round_index
    }

    #[must_use]
    pub const fn total_rounds(&self) -> usize {
        TOTAL_LANGUAGE_ROUNDS
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
                WRONG_GUESS_PENALTY,
                "Wrong language guess",
            ));
        }
        self.total_score += POINTS_PER_ROUND;
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
                "Languages identified",
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

    #[test]
    fn three_correct_rounds_emit_one_success() {
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        let mut session = LanguageSession::new(&mut rng);
        for round in 0..3 {
            let answer_index = {
                let current = session.round().unwrap();
                current
                    .options
                    .iter()
                    .position(|o| *o == current.answer)
                    .unwrap()
            };
            assert_eq!(session.select(answer_index), SelectResult::RoundWon);
            let event = session.advance_round();
            if round < 2 {
                assert!(event.is_none());
            } else {
                let event = event.unwrap();
                assert_eq!(event.payload.score_delta, Some(120));
                assert_eq!(event.payload.note.as_deref(), Some("Languages identified"));
            }
        }
    }

    #[test]
    fn wrong_option_penalizes_four_seconds() {
        let mut rng = ChaCha20Rng::seed_from_u64(15);
        let mut session = LanguageSession::new(&mut rng);
        let wrong_index = {
            let current = session.round().unwrap();
            current
                .options
                .iter()
                .position(|o| *o != current.answer)
                .unwrap()
        };
        match session.select(wrong_index) {
            SelectResult::Wrong(event) => {
                assert!(event.payload.retry);
                assert_eq!(event.payload.time_penalty, Some(4));
            }
            other => panic!("expected wrong guess, got {other:?}"),
        }
        assert_eq!(session.round_index(), 0);
    }
}
