//! Controller for the four-letter word-guessing stage.

use rand::Rng;
use std::collections::HashSet;

use crate::outcome::GameOutcomeEvent;
use crate::puzzles::wordle::{
    LetterState, MAX_ATTEMPTS, WORD_LENGTH, attempt_score, evaluate_guess, pick_bank,
    pick_target, valid_words,
};

const WRONG_GUESS_PENALTY: u32 = 2;

/// What a submitted guess amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input while already resolved.
    Ignored,
    /// Not four letters, or not in the theme list; only the message changed.
    Invalid,
    /// Target found; forward the success event.
    Solved(GameOutcomeEvent),
    /// Wrong word with attempts left; forward the retry fail.
    Miss(GameOutcomeEvent),
    /// Wrong word on the last attempt: the penalty fail is followed by the
    /// fatal fail. Forward both, in order.
    Lost {
        penalty: GameOutcomeEvent,
        fatal: GameOutcomeEvent,
    },
}

pub struct WordleSession {
    theme: &'static str,
    target: &'static str,
    valid: HashSet<&'static str>,
    guesses: Vec<String>,
    evaluations: Vec<[LetterState; WORD_LENGTH]>,
    current: String,
    message: String,
    resolved: bool,
}

impl WordleSession {
    pub fn new(rng: &mut impl Rng) -> Self {
        let bank = pick_bank(rng);
        Self {
            theme: bank.theme,
            target: pick_target(bank, rng),
            valid: valid_words(bank),
            guesses: Vec::new(),
            evaluations: Vec::new(),
            current: String::new(),
            message: format!("Guess the {WORD_LENGTH}-letter word."),
            resolved: false,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> &'static str {
        self.theme
    }

    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[must_use]
    pub fn evaluations(&self) -> &[[LetterState; WORD_LENGTH]] {
        &self.evaluations
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn resolved(&self) -> bool {
        self.resolved
    }

    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.guesses.len()
    }

    pub fn type_letter(&mut self, letter: char) {
        if self.resolved || self.current.len() >= WORD_LENGTH {
            return;
        }
        if letter.is_ascii_alphabetic() {
            self.current.push(letter.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        if self.resolved {
            return;
        }
        self.current.pop();
    }

    pub fn submit(&mut self) -> GuessOutcome {
        if self.resolved {
            return GuessOutcome::Ignored;
        }
        if self.current.len() != WORD_LENGTH {
            self.message = format!("Enter {WORD_LENGTH} letters.");
            return GuessOutcome::Invalid;
        }
        if !self.valid.contains(self.current.as_str()) {
            self.message = "Word not in this theme list.".to_string();
            return GuessOutcome::Invalid;
        }

        let guess = std::mem::take(&mut self.current);
        let attempt = self.guesses.len();
        self.evaluations.push(evaluate_guess(&guess, self.target));
        let solved = guess == self.target;
        self.guesses.push(guess);

        if solved {
            self.resolved = true;
            return GuessOutcome::Solved(GameOutcomeEvent::success(
                attempt_score(attempt),
                format!("Solved in {}/{MAX_ATTEMPTS}", attempt + 1),
            ));
        }

        let penalty = GameOutcomeEvent::fail_retry(WRONG_GUESS_PENALTY, "Incorrect guess");
        if self.guesses.len() >= MAX_ATTEMPTS {
            self.resolved = true;
            let fatal = GameOutcomeEvent::fail_fatal(format!("Word was {}", self.target));
            return GuessOutcome::Lost { penalty, fatal };
        }
        self.message = "Try another word.".to_string();
        GuessOutcome::Miss(penalty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::OutcomeKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn session() -> WordleSession {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        WordleSession::new(&mut rng)
    }

    fn type_word(session: &mut WordleSession, word: &str) {
        for letter in word.chars() {
            session.type_letter(letter);
        }
    }

    #[test]
    fn solving_on_first_attempt_scores_140() {
        let mut session = session();
        let target = session.target;
        type_word(&mut session, target);
        match session.submit() {
            GuessOutcome::Solved(event) => {
                assert_eq!(event.kind, OutcomeKind::Success);
                assert_eq!(event.payload.score_delta, Some(140));
                assert_eq!(event.payload.note.as_deref(), Some("Solved in 1/5"));
            }
            other => panic!("expected solve, got {other:?}"),
        }
        assert!(session.resolved());
    }

    #[test]
    fn short_or_unknown_words_emit_no_events() {
        let mut session = session();
        type_word(&mut session, "AB");
        assert_eq!(session.submit(), GuessOutcome::Invalid);
        assert_eq!(session.message(), "Enter 4 letters.");
        session.backspace();
        session.backspace();
        type_word(&mut session, "QQQQ");
        assert_eq!(session.submit(), GuessOutcome::Invalid);
        assert_eq!(session.message(), "Word not in this theme list.");
        assert_eq!(session.attempt_index(), 0);
    }

    #[test]
    fn exhausting_attempts_is_penalty_then_fatal() {
        let mut session = session();
        let wrong = session
            .valid
            .iter()
            .find(|word| **word != session.target)
            .copied()
            .unwrap();
        for attempt in 0..MAX_ATTEMPTS {
            type_word(&mut session, wrong);
            match session.submit() {
                GuessOutcome::Miss(event) => {
                    assert!(attempt < MAX_ATTEMPTS - 1);
                    assert!(event.payload.retry);
                    assert_eq!(event.payload.time_penalty, Some(2));
                }
                GuessOutcome::Lost { penalty, fatal } => {
                    assert_eq!(attempt, MAX_ATTEMPTS - 1);
                    assert!(penalty.payload.retry);
                    assert!(!fatal.payload.retry);
                    let note = fatal.payload.note.unwrap();
                    assert!(note.starts_with("Word was "));
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        assert!(session.resolved());
    }

    #[test]
    fn typing_stops_at_four_letters() {
        let mut session = session();
        type_word(&mut session, "ABCDE");
        assert_eq!(session.current().len(), 4);
    }
}
