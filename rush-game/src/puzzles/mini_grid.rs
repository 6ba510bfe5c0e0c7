//! Micro-crossword layouts for the grid-fill puzzle.

use rand::Rng;

pub const GRID_BASE_SCORE: i32 = 50;
pub const GRID_TIME_PENALTY: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Across,
    Down,
}

pub struct GridWord {
    pub direction: Direction,
    pub clue: &'static str,
    pub positions: &'static [(usize, usize)],
}

/// A solved layout: `None` cells are blocks, `Some` cells hold the answer
/// letter.
pub struct GridPuzzle {
    pub grid: &'static [&'static [Option<char>]],
    pub words: &'static [GridWord],
}

impl GridPuzzle {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

pub const GRID_PUZZLES: &[GridPuzzle] = &[GridPuzzle {
    grid: &[
        &[Some('C'), Some('A'), Some('T')],
        &[Some('A'), None, Some('E')],
        &[Some('T'), Some('E'), Some('A')],
    ],
    words: &[
        GridWord {
            direction: Direction::Across,
            clue: "Small feline",
            positions: &[(0, 0), (0, 1), (0, 2)],
        },
        GridWord {
            direction: Direction::Across,
            clue: "Warm drink",
            positions: &[(2, 0), (2, 1), (2, 2)],
        },
        GridWord {
            direction: Direction::Down,
            clue: "Feline sound",
            positions: &[(0, 2), (1, 2), (2, 2)],
        },
        GridWord {
            direction: Direction::Down,
            clue: "Beverage plant",
            positions: &[(0, 0), (1, 0), (2, 0)],
        },
    ],
}];

/// Pick a layout at random.
pub fn pick_puzzle(rng: &mut impl Rng) -> &'static GridPuzzle {
    &GRID_PUZZLES[rng.gen_range(0..GRID_PUZZLES.len())]
}
