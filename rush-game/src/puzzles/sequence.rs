//! Number-sequence rounds: three fixed escalating rounds with shuffled
//! answer options.

use rand::Rng;
use rand::seq::SliceRandom;

pub struct SequenceRound {
    pub difficulty: &'static str,
    pub sequence: &'static [i64],
    pub missing_index: usize,
    pub answer: i64,
    pub options: [i64; 3],
    pub points: u32,
}

pub const ROUNDS: &[SequenceRound] = &[
    SequenceRound {
        difficulty: "Easy",
        sequence: &[2, 4, 6, 8, 10],
        missing_index: 3,
        answer: 8,
        options: [7, 8, 9],
        points: 35,
    },
    SequenceRound {
        difficulty: "Medium",
        sequence: &[3, 6, 10, 15, 21],
        missing_index: 4,
        answer: 21,
        options: [20, 21, 24],
        points: 45,
    },
    SequenceRound {
        difficulty: "Decently Hard",
        sequence: &[7, 11, 18, 29, 47],
        missing_index: 2,
        answer: 18,
        options: [17, 18, 21],
        points: 60,
    },
];

/// A round prepared for play, options shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRoundInstance {
    pub difficulty: &'static str,
    pub sequence: &'static [i64],
    pub missing_index: usize,
    pub answer: i64,
    pub options: Vec<i64>,
    pub points: u32,
}

/// All rounds in order, each with its options shuffled.
pub fn prepare_rounds(rng: &mut impl Rng) -> Vec<SequenceRoundInstance> {
    ROUNDS
        .iter()
        .map(|round| {
            let mut options = round.options.to_vec();
            options.shuffle(rng);
            SequenceRoundInstance {
                difficulty: round.difficulty,
                sequence: round.sequence,
                missing_index: round.missing_index,
                answer: round.answer,
                options,
                points: round.points,
            }
        })
        .collect()
}
