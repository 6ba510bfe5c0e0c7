//! Controller for the odd-one-out stage: three rounds, banked scoring, and
//! a 25-point bonus for a clean round.

use rand::Rng;

use crate::minigames::SelectResult;
use crate::outcome::GameOutcomeEvent;
use crate::puzzles::eliminate::{
    EliminateDifficulty, EliminatePuzzle, generate_eliminate_puzzle,
};

pub const TOTAL_ELIMINATE_ROUNDS: usize = 3;
const WRONG_PICK_PENALTY: u32 = 5;

/// Points for a solved round: base 50 plus a clean-round bonus.
#[must_use]
pub const fn round_score(wrong_attempts: u32) -> u32 {
    50 + if wrong_attempts == 0 { 25 } else { 0 }
}

pub struct EliminateSession {
    puzzles: Vec<EliminatePuzzle>,
    round_index: usize,
    wrong_attempts: u32,
    banked_score: u32,
    round_resolved: bool,
    finished: bool,
}

impl EliminateSession {
    pub fn new(rng: &mut impl Rng) -> Self {
        let difficulty = EliminateDifficulty::sample(rng);
        let puzzles = (0..TOTAL_ELIMINATE_ROUNDS)
            .map(|_| generate_eliminate_puzzle(difficulty, rng))
            .collect();
        Self {
            puzzles,
            round_index: 0,
            wrong_attempts: 0,
            banked_score: 0,
            round_resolved: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&EliminatePuzzle> {
        self.puzzles.get(self.round_index)
    }

    #[must_use]
    pub const fn round_index(&self) -> usize {
        self.round_index
    }

    #[must_use]
    pub const fn round_resolved(&self) -> bool {
        self.round_resolved
    }

    #[must_use]
    pub const fn banked_score(&self) -> u32 {
        self.banked_score
    }

    /// Pick the item at `index` as the intruder.
    pub fn select(&mut self, index: usize) -> SelectResult {
        if self.round_resolved || self.finished {
            return SelectResult::Ignored;
        }
        let Some(puzzle) = self.puzzles.get(self.round_index) else {
            return SelectResult::Ignored;
        };
        if index >= puzzle.items.len() {
            return SelectResult::Ignored;
        }
        if index != puzzle.correct_index {
            self.wrong_attempts += 1;
            return SelectResult::Wrong(GameOutcomeEvent::fail_retry(
                WRONG_PICK_PENALTY,
                "The intruder remains",
            ));
        }
        self.banked_score += round_score(self.wrong_attempts);
        self.round_resolved = true;
        SelectResult::RoundWon
    }

    /// Move past a solved round once the shell's dwell has played. Returns
    /// the stage success event after the final round.
    pub fn advance_round(&mut self) -> Option<GameOutcomeEvent> {
        if !self.round_resolved || self.finished {
            return None;
        }
        if self.round_index + 1 >= TOTAL_ELIMINATE_ROUNDS {
            self.finished = true;
            return Some(GameOutcomeEvent::success(
                self.banked_score as i32,
                "Patterns eliminated",
            ));
        }
        self.round_index += 1;
        self.wrong_attempts = 0;
        self.round_resolved = false;
        None
    }
}
