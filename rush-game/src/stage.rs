//! Stage identities, metadata, and the daily sequence builder.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of one mini-game. Stage ids are the unit of persistence: a saved
/// run stores these and must resolve every one of them on reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StageId {
    Eliminate,
    GuessLanguage,
    Sequence,
    Timing,
    Wordle4,
    MiniGrid,
    ZipPuzzle,
}

impl StageId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eliminate => "eliminate",
            Self::GuessLanguage => "guessLanguage",
            Self::Sequence => "sequence",
            Self::Timing => "timing",
            Self::Wordle4 => "wordle4",
            Self::MiniGrid => "miniGrid",
            Self::ZipPuzzle => "zipPuzzle",
        }
    }

    /// Static metadata for this stage.
    #[must_use]
    pub const fn info(self) -> &'static StageInfo {
        match self {
            Self::Eliminate => &ALL_STAGES[0],
            Self::GuessLanguage => &ALL_STAGES[1],
            Self::Sequence => &ALL_STAGES[2],
            Self::Timing => &ALL_STAGES[3],
            Self::Wordle4 => &ALL_STAGES[4],
            Self::MiniGrid => &ALL_STAGES[5],
            Self::ZipPuzzle => &ALL_STAGES[6],
        }
    }

    /// Display name shown in headers and note prefixes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eliminate" => Ok(Self::Eliminate),
            "guessLanguage" => Ok(Self::GuessLanguage),
            "sequence" => Ok(Self::Sequence),
            "timing" => Ok(Self::Timing),
            "wordle4" => Ok(Self::Wordle4),
            "miniGrid" => Ok(Self::MiniGrid),
            "zipPuzzle" => Ok(Self::ZipPuzzle),
            _ => Err(()),
        }
    }
}

impl From<StageId> for String {
    fn from(value: StageId) -> Self {
        value.as_str().to_string()
    }
}

/// Immutable per-stage metadata. The run engine treats stages as opaque
/// references; everything here is presentation and budget data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageInfo {
    pub id: StageId,
    pub name: &'static str,
    pub description: &'static str,
    /// Suggested per-stage time budget in seconds.
    pub default_time_limit: u32,
    pub difficulty_weight: f32,
}

pub const ALL_STAGES: [StageInfo; 7] = [
    StageInfo {
        id: StageId::Eliminate,
        name: "Eliminate",
        description: "Identify the lone element that breaks the quiet pattern.",
        default_time_limit: 25,
        difficulty_weight: 2.0,
    },
    StageInfo {
        id: StageId::GuessLanguage,
        name: "Guess Language",
        description: "Read a phrase and identify its language from the choices.",
        default_time_limit: 25,
        difficulty_weight: 1.8,
    },
    StageInfo {
        id: StageId::Sequence,
        name: "Sequence",
        description: "Find the missing number in each sequence across three escalating rounds.",
        default_time_limit: 25,
        difficulty_weight: 1.9,
    },
    StageInfo {
        id: StageId::Timing,
        name: "Timing",
        description: "Center your focus and tap as the pulse enters the calm zone.",
        default_time_limit: 20,
        difficulty_weight: 1.1,
    },
    StageInfo {
        id: StageId::Wordle4,
        name: "Wordle 4",
        description: "Find the hidden 4-letter word in five guesses.",
        default_time_limit: 35,
        difficulty_weight: 2.2,
    },
    StageInfo {
        id: StageId::MiniGrid,
        name: "Mini Grid",
        description: "Fill the composed micro-grid with precise intent.",
        default_time_limit: 25,
        difficulty_weight: 2.0,
    },
    StageInfo {
        id: StageId::ZipPuzzle,
        name: "Zip Puzzle",
        description: "Glide a single line through the grid, touching anchors in precise order.",
        default_time_limit: 30,
        difficulty_weight: 3.0,
    },
];

/// The pool a daily run draws from.
pub const DAILY_STAGES: [StageId; 5] = [
    StageId::Eliminate,
    StageId::GuessLanguage,
    StageId::Sequence,
    StageId::Timing,
    StageId::ZipPuzzle,
];

/// Build a run sequence of `length` stages from `pool`.
///
/// The pool is shuffled whenever the cycling index wraps, so a pool shorter
/// than the requested length repeats with a re-shuffled order instead of
/// erroring. An empty pool yields an empty sequence.
#[must_use]
pub fn build_sequence(pool: &[StageId], length: usize, rng: &mut impl Rng) -> Vec<StageId> {
    if pool.is_empty() {
        return Vec::new();
    }
    let mut shuffled = pool.to_vec();
    let length = length.max(1);
    let mut sequence = Vec::with_capacity(length);
    for i in 0..length {
        if i % shuffled.len() == 0 {
            shuffled.shuffle(rng);
        }
        sequence.push(shuffled[i % shuffled.len()]);
    }
    sequence
}
