//! Four-letter word-guessing: themed banks, guess evaluation, and attempt
//! scoring.

use rand::Rng;
use std::collections::HashSet;

pub const WORD_LENGTH: usize = 4;
pub const MAX_ATTEMPTS: usize = 5;

pub struct WordBank {
    pub theme: &'static str,
    pub targets: &'static [&'static str],
    pub extras: &'static [&'static str],
}

pub const WORD_BANKS: &[WordBank] = &[
    WordBank {
        theme: "Nature",
        targets: &["WAVE", "SAGE", "MOON", "WIND", "MOSS", "TREE", "LAKE", "RAIN", "FROG", "ROCK"],
        extras: &["LEAF", "BARK", "DUNE", "SOIL", "POND", "MIST", "BIRD", "VINE"],
    },
    WordBank {
        theme: "Home",
        targets: &["LAMP", "SOFA", "DOOR", "SINK", "RUGS", "OVEN", "BELL", "BOOK", "MUGS", "TILE"],
        extras: &["WALL", "ROOF", "BATH", "DESK", "CUPS", "PANS", "BOWL"],
    },
    WordBank {
        theme: "Action",
        targets: &["JUMP", "PLAN", "MOVE", "DRAW", "READ", "PLAY", "MAKE", "SEND", "CODE"],
        extras: &["TYPE", "EDIT", "TEST", "PUSH", "SHIP", "TASK", "WORK", "RACE"],
    },
    WordBank {
        theme: "Travel",
        targets: &["ROAD", "RAIL", "PORT", "SHIP", "TRIP", "CAMP", "MAPS", "TOUR", "CITY", "COZY"],
        extras: &["BIKE", "TAXI", "LANE", "GATE", "PASS", "STOP", "RIDE", "FUEL"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

/// Pick a theme bank at random.
pub fn pick_bank(rng: &mut impl Rng) -> &'static WordBank {
    &WORD_BANKS[rng.gen_range(0..WORD_BANKS.len())]
}

/// Pick a target word from a bank.
pub fn pick_target(bank: &'static WordBank, rng: &mut impl Rng) -> &'static str {
    bank.targets[rng.gen_range(0..bank.targets.len())]
}

/// All words accepted as guesses for a bank.
#[must_use]
pub fn valid_words(bank: &WordBank) -> HashSet<&'static str> {
    bank.targets.iter().chain(bank.extras).copied().collect()
}

/// Two-pass evaluation: exact positions first, then remaining letters, each
/// target letter consumable once so duplicates mark correctly.
#[must_use]
pub fn evaluate_guess(guess: &str, target: &str) -> [LetterState; WORD_LENGTH] {
    let mut result = [LetterState::Absent; WORD_LENGTH];
    let guess_bytes: Vec<u8> = guess.bytes().take(WORD_LENGTH).collect();
    let mut remaining: Vec<Option<u8>> = target.bytes().take(WORD_LENGTH).map(Some).collect();

    for (i, &letter) in guess_bytes.iter().enumerate() {
        if remaining.get(i).copied().flatten() == Some(letter) {
            result[i] = LetterState::Correct;
            remaining[i] = None;
        }
    }
    for (i, &letter) in guess_bytes.iter().enumerate() {
        if result[i] == LetterState::Correct {
            continue;
        }
        if let Some(slot) = remaining
            .iter()
            .position(|candidate| *candidate == Some(letter))
        {
            result[i] = LetterState::Present;
            remaining[slot] = None;
        }
    }
    result
}

/// Score for solving on the zero-based attempt index: 140 minus 12 per
/// attempt, floored at 60.
#[must_use]
pub const fn attempt_score(attempt: usize) -> i32 {
    let raw = 140 - 12 * attempt as i32;
    if raw < 60 { 60 } else { raw }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_all_correct() {
        assert_eq!(evaluate_guess("MOON", "MOON"), [LetterState::Correct; 4]);
    }

    #[test]
    fn duplicate_letters_consume_target_slots() {
        // Target has one O; the second O in the guess must stay absent.
        let result = evaluate_guess("DOOR", "ROAD");
        assert_eq!(
            result,
            [
                LetterState::Present, // D
                LetterState::Correct, // O
                LetterState::Absent,  // second O
                LetterState::Present, // R
            ]
        );
    }

    #[test]
    fn attempt_score_floors_at_sixty() {
        assert_eq!(attempt_score(0), 140);
        assert_eq!(attempt_score(2), 116);
        assert_eq!(attempt_score(4), 92);
        assert_eq!(attempt_score(10), 60);
    }

    #[test]
    fn banks_contain_only_four_letter_words() {
        for bank in WORD_BANKS {
            for word in bank.targets.iter().chain(bank.extras) {
                assert_eq!(word.len(), WORD_LENGTH, "{word}");
            }
        }
    }
}
