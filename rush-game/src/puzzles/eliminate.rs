//! Odd-one-out puzzle generation: category sets, property rules, and
//! sequence rules, mixed by difficulty.

use rand::Rng;
use rand::seq::SliceRandom;

pub struct CategorySet {
    pub name: &'static str,
    pub pool: &'static [&'static str],
    pub intruders: &'static [&'static str],
}

pub struct PropertyRule {
    pub description: &'static str,
    pub correct_pool: &'static [&'static str],
    pub intruder_pool: &'static [&'static str],
}

struct SequenceRule {
    explanation: &'static str,
    valid: &'static [&'static str],
    intruders: &'static [&'static str],
}

pub const CATEGORIES: &[CategorySet] = &[
    CategorySet {
        name: "Fruits",
        pool: &["Apple", "Pear", "Banana", "Orange", "Grape", "Peach", "Plum", "Mango", "Kiwi"],
        intruders: &["Carrot", "Celery", "Cucumber"],
    },
    CategorySet {
        name: "Animals",
        pool: &["Horse", "Lion", "Zebra", "Camel", "Panda", "Tiger", "Koala"],
        intruders: &["Bonsai", "Quartz", "Velvet"],
    },
    CategorySet {
        name: "Gemstones",
        pool: &["Ruby", "Emerald", "Sapphire", "Diamond", "Topaz", "Opal", "Garnet"],
        intruders: &["Marble", "Pearl", "Ivory"],
    },
    CategorySet {
        name: "Capital Cities",
        pool: &["Paris", "Rome", "Berlin", "Madrid", "Vienna", "Prague", "Oslo", "Athens"],
        intruders: &["Sydney", "Zurich", "Montreal"],
    },
    CategorySet {
        name: "Tea Varietals",
        pool: &["Sencha", "Matcha", "Oolong", "Assam", "Darjeeling", "Gyokuro"],
        intruders: &["Espresso", "Cocoa"],
    },
];

pub const PROPERTY_RULES: &[PropertyRule] = &[
    PropertyRule {
        description: "Four-letter words",
        correct_pool: &["Lily", "Rose", "Iris", "Fern", "Mint", "Lace", "Nori"],
        intruder_pool: &["Tulip", "Daisy", "Petal"],
    },
    PropertyRule {
        description: "Even numbers",
        correct_pool: &["2", "4", "6", "8", "10", "12", "14"],
        intruder_pool: &["9", "11", "15"],
    },
    PropertyRule {
        description: "Prime numbers",
        correct_pool: &["2", "3", "5", "7", "11", "13", "17"],
        intruder_pool: &["12", "15", "21"],
    },
    PropertyRule {
        description: "Words ending with a vowel",
        correct_pool: &["Aura", "Mosa", "Cameo", "Halo", "Tempo", "Solea"],
        intruder_pool: &["Velvet", "Marble", "Quartz"],
    },
];

const SEQUENCE_RULES: &[SequenceRule] = &[
    SequenceRule {
        explanation: "Consecutive numbers (+2)",
        valid: &["4", "6", "8", "10", "12", "14", "16"],
        intruders: &["11", "13", "15"],
    },
    SequenceRule {
        explanation: "Alphabetical month order",
        valid: &["April", "August", "December", "February", "January", "July", "June"],
        intruders: &["October", "November", "September"],
    },
    SequenceRule {
        explanation: "Roman numerals",
        valid: &["I", "II", "III", "IV", "V", "VI", "VII"],
        intruders: &["A", "B", "C"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminateMode {
    Category,
    Property,
    Sequence,
}

impl EliminateMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Property => "Property",
            Self::Sequence => "Sequence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminateDifficulty {
    Easy,
    Medium,
    Hard,
}

impl EliminateDifficulty {
    /// Uniformly sampled difficulty, the way a daily stage rolls one.
    pub fn sample(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => Self::Easy,
            1 => Self::Medium,
            _ => Self::Hard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminatePuzzle {
    pub items: Vec<&'static str>,
    pub correct_index: usize,
    pub explanation: String,
    pub mode: EliminateMode,
}

fn sample_five(pool: &'static [&'static str], rng: &mut impl Rng) -> Vec<&'static str> {
    let mut clone: Vec<&'static str> = pool.to_vec();
    clone.shuffle(rng);
    clone.truncate(5);
    clone
}

fn pick_intruder(
    intruders: &'static [&'static str],
    taken: &[&'static str],
    rng: &mut impl Rng,
) -> &'static str {
    let free: Vec<&'static str> = intruders
        .iter()
        .filter(|candidate| !taken.contains(candidate))
        .copied()
        .collect();
    free.choose(rng)
        .or_else(|| intruders.first())
        .copied()
        .unwrap_or("")
}

fn assemble(
    mut items: Vec<&'static str>,
    intruder: &'static str,
    explanation: String,
    mode: EliminateMode,
    rng: &mut impl Rng,
) -> EliminatePuzzle {
    items.push(intruder);
    items.shuffle(rng);
    let correct_index = items.iter().position(|item| *item == intruder).unwrap_or(0);
    EliminatePuzzle {
        items,
        correct_index,
        explanation,
        mode,
    }
}

fn build_category_puzzle(rng: &mut impl Rng) -> EliminatePuzzle {
    let category = &CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
    let items = sample_five(category.pool, rng);
    let intruder = pick_intruder(category.intruders, &items, rng);
    assemble(
        items,
        intruder,
        format!("{} set", category.name),
        EliminateMode::Category,
        rng,
    )
}

fn build_property_puzzle(rng: &mut impl Rng) -> EliminatePuzzle {
    let rule = &PROPERTY_RULES[rng.gen_range(0..PROPERTY_RULES.len())];
    let items = sample_five(rule.correct_pool, rng);
    let intruder = pick_intruder(rule.intruder_pool, &items, rng);
    assemble(
        items,
        intruder,
        rule.description.to_string(),
        EliminateMode::Property,
        rng,
    )
}

fn build_sequence_puzzle(rng: &mut impl Rng) -> EliminatePuzzle {
    let rule = &SEQUENCE_RULES[rng.gen_range(0..SEQUENCE_RULES.len())];
    let items = sample_five(rule.valid, rng);
    let intruder = pick_intruder(rule.intruders, &items, rng);
    assemble(
        items,
        intruder,
        rule.explanation.to_string(),
        EliminateMode::Sequence,
        rng,
    )
}

/// Generate one puzzle at the given difficulty: easy draws category sets,
/// hard draws the trickier rule kinds, medium mixes all three.
pub fn generate_eliminate_puzzle(
    difficulty: EliminateDifficulty,
    rng: &mut impl Rng,
) -> EliminatePuzzle {
    match difficulty {
        EliminateDifficulty::Easy => build_category_puzzle(rng),
        EliminateDifficulty::Hard => {
            if rng.gen_bool(0.5) {
                build_property_puzzle(rng)
            } else {
                build_sequence_puzzle(rng)
            }
        }
        EliminateDifficulty::Medium => match rng.gen_range(0..3) {
            0 => build_category_puzzle(rng),
            1 => build_property_puzzle(rng),
            _ => build_sequence_puzzle(rng),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn generated_puzzle_is_well_formed() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..50 {
            let difficulty = EliminateDifficulty::sample(&mut rng);
            let puzzle = generate_eliminate_puzzle(difficulty, &mut rng);
            assert_eq!(puzzle.items.len(), 6);
            assert!(puzzle.correct_index < puzzle.items.len());
            let intruder = puzzle.items[puzzle.correct_index];
            assert_eq!(
                puzzle.items.iter().filter(|i| **i == intruder).count(),
                1,
                "intruder must be unique in {:?}",
                puzzle.items
            );
        }
    }

    #[test]
    fn easy_always_draws_categories() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        for _ in 0..20 {
            let puzzle = generate_eliminate_puzzle(EliminateDifficulty::Easy, &mut rng);
            assert_eq!(puzzle.mode, EliminateMode::Category);
        }
    }
}
