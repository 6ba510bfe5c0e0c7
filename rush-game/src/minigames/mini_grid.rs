//! Controller for the grid-fill stage: a micro-crossword with word-wise
//! cursor movement, one hint, and signature-deduplicated misfill penalties.

use rand::Rng;

use crate::outcome::GameOutcomeEvent;
use crate::puzzles::mini_grid::{
    Direction, GRID_BASE_SCORE, GRID_TIME_PENALTY, GridPuzzle, pick_puzzle,
};

/// One playable square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Unplayable block.
    Block,
    Empty,
    Letter(char),
}

/// What the board did after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    None,
    /// Board is full but wrong; forward the fail event. Emitted at most once
    /// per distinct board signature.
    Misaligned(GameOutcomeEvent),
    /// Board matches; dwell briefly, then call `completion_event`.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

pub struct MiniGridSession {
    puzzle: &'static GridPuzzle,
    entries: Vec<Vec<GridCell>>,
    active_word: usize,
    active_cell: usize,
    hint_used: bool,
    penalized_signature: Option<String>,
    message: Option<&'static str>,
    resolved: bool,
    completion_guard: bool,
}

impl MiniGridSession {
    pub fn new(rng: &mut impl Rng) -> Self {
        let puzzle = pick_puzzle(rng);
        let entries = puzzle
            .grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_some() {
                            GridCell::Empty
                        } else {
                            GridCell::Block
                        }
                    })
                    .collect()
            })
            .collect();
        let active_word = puzzle
            .words
            .iter()
            .position(|word| word.direction == Direction::Across)
            .unwrap_or(0);
        Self {
            puzzle,
            entries,
            active_word,
            active_cell: 0,
            hint_used: false,
            penalized_signature: None,
            message: None,
            resolved: false,
            completion_guard: false,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &'static GridPuzzle {
        self.puzzle
    }

    #[must_use]
    pub fn entry(&self, row: usize, col: usize) -> GridCell {
        self.entries
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(GridCell::Block)
    }

    #[must_use]
    pub const fn active_word(&self) -> usize {
        self.active_word
    }

    /// The grid position under the cursor.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        let positions = self.puzzle.words[self.active_word].positions;
        positions[self.active_cell.min(positions.len() - 1)]
    }

    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        self.message
    }

    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    #[must_use]
    pub const fn resolved(&self) -> bool {
        self.resolved
    }

    /// Select the word covering `(row, col)`, preferring the current
    /// direction, and park the cursor there.
    pub fn select_cell(&mut self, row: usize, col: usize) {
        if self.resolved {
            return;
        }
        if self.puzzle.letter_at(row, col).is_none() {
            return;
        }
        let current_direction = self.puzzle.words[self.active_word].direction;
        let covering = |direction: Option<Direction>| {
            self.puzzle.words.iter().position(|word| {
                direction.is_none_or(|d| word.direction == d)
                    && word.positions.contains(&(row, col))
            })
        };
        let Some(word_index) = covering(Some(current_direction)).or_else(|| covering(None))
        else {
            return;
        };
        let cell_index = self.puzzle.words[word_index]
            .positions
            .iter()
            .position(|p| *p == (row, col))
            .unwrap_or(0);
        self.active_word = word_index;
        self.active_cell = cell_index;
    }

    /// Jump to the word covering a cell, parking the cursor at the word's
    /// first unfilled square.
    fn select_word(&mut self, word_index: usize, fallback_cell: usize) {
        let word = &self.puzzle.words[word_index];
        let first_empty = word
            .positions
            .iter()
            .position(|&(row, col)| self.entry(row, col) == GridCell::Empty);
        self.active_word = word_index;
        self.active_cell = first_empty.unwrap_or(fallback_cell);
    }

    pub fn handle_letter(&mut self, letter: char) -> BoardEvent {
        if self.resolved || !letter.is_ascii_alphabetic() {
            return BoardEvent::None;
        }
        let (row, col) = self.cursor();
        self.entries[row][col] = GridCell::Letter(letter.to_ascii_uppercase());
        self.message = None;
        let positions = self.puzzle.words[self.active_word].positions;
        if self.active_cell + 1 < positions.len() {
            self.active_cell += 1;
        }
        self.evaluate_board()
    }

    pub fn handle_backspace(&mut self) -> BoardEvent {
        if self.resolved {
            return BoardEvent::None;
        }
        let (row, col) = self.cursor();
        if matches!(self.entry(row, col), GridCell::Letter(_)) {
            self.entries[row][col] = GridCell::Empty;
            return self.evaluate_board();
        }
        if self.active_cell > 0 {
            self.active_cell -= 1;
            let (prev_row, prev_col) = self.cursor();
            self.entries[prev_row][prev_col] = GridCell::Empty;
        }
        self.evaluate_board()
    }

    /// Walk from the cursor in the arrow direction to the next letter cell
    /// and select the word there, preferring the axis of travel.
    pub fn handle_arrow(&mut self, key: ArrowKey) {
        if self.resolved {
            return;
        }
        let (mut row, mut col) = self.cursor();
        let (d_row, d_col): (isize, isize) = match key {
            ArrowKey::Left => (0, -1),
            ArrowKey::Right => (0, 1),
            ArrowKey::Up => (-1, 0),
            ArrowKey::Down => (1, 0),
        };
        loop {
            let next_row = row as isize + d_row;
            let next_col = col as isize + d_col;
            if next_row < 0
                || next_col < 0
                || next_row as usize >= self.puzzle.rows()
                || next_col as usize >= self.puzzle.cols()
            {
                return;
            }
            row = next_row as usize;
            col = next_col as usize;
            if self.puzzle.letter_at(row, col).is_some() {
                let preferred = if d_row != 0 {
                    Direction::Down
                } else {
                    Direction::Across
                };
                let target = self
                    .puzzle
                    .words
                    .iter()
                    .position(|word| {
                        word.direction == preferred && word.positions.contains(&(row, col))
                    })
                    .or_else(|| {
                        self.puzzle
                            .words
                            .iter()
                            .position(|word| word.positions.contains(&(row, col)))
                    });
                if let Some(word_index) = target {
                    let cell_index = self.puzzle.words[word_index]
                        .positions
                        .iter()
                        .position(|p| *p == (row, col))
                        .unwrap_or(0);
                    self.active_word = word_index;
                    self.active_cell = cell_index;
                }
                return;
            }
        }
    }

    /// Fill one unfinished word. Usable once; shaves a point off the score.
    /// The filled word can complete the board, so the board is re-evaluated.
    pub fn use_hint(&mut self) -> BoardEvent {
        if self.hint_used || self.resolved {
            return BoardEvent::None;
        }
        let word_index = self
            .puzzle
            .words
            .iter()
            .position(|word| {
                word.positions
                    .iter()
                    .any(|&(row, col)| self.entry(row, col) == GridCell::Empty)
            })
            .unwrap_or(0);
        for &(row, col) in self.puzzle.words[word_index].positions {
            if let Some(letter) = self.puzzle.letter_at(row, col) {
                self.entries[row][col] = GridCell::Letter(letter);
            }
        }
        self.hint_used = true;
        self.message = Some("Lift granted.");
        self.penalized_signature = None;
        let last = self.puzzle.words[word_index].positions.len() - 1;
        self.select_word(word_index, last);
        self.evaluate_board()
    }

    /// Emit the deferred success once the shell's dwell has played.
    pub fn completion_event(&mut self) -> Option<GameOutcomeEvent> {
        if !self.resolved || self.completion_guard {
            return None;
        }
        self.completion_guard = true;
        let score = GRID_BASE_SCORE - i32::from(self.hint_used);
        Some(GameOutcomeEvent::success(score, "Mini grid composed"))
    }

    fn signature(&self) -> String {
        self.entries
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        GridCell::Block => '#',
                        GridCell::Empty => '_',
                        GridCell::Letter(letter) => *letter,
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("|")
    }

    fn evaluate_board(&mut self) -> BoardEvent {
        let has_empty = self
            .entries
            .iter()
            .any(|row| row.iter().any(|cell| *cell == GridCell::Empty));
        if has_empty {
            self.penalized_signature = None;
            return BoardEvent::None;
        }
        let matches = self.entries.iter().enumerate().all(|(row_index, row)| {
            row.iter().enumerate().all(|(col_index, cell)| match cell {
                GridCell::Block | GridCell::Empty => true,
                GridCell::Letter(letter) => {
                    self.puzzle.letter_at(row_index, col_index) == Some(*letter)
                }
            })
        });
        if matches {
            self.resolved = true;
            return BoardEvent::Completed;
        }
        let signature = self.signature();
        if self.penalized_signature.as_deref() == Some(signature.as_str()) {
            return BoardEvent::None;
        }
        self.penalized_signature = Some(signature);
        self.message = Some("Letters misaligned.");
        BoardEvent::Misaligned(GameOutcomeEvent::fail_retry(
            GRID_TIME_PENALTY,
            "Mini grid unsettled",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn session() -> MiniGridSession {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        MiniGridSession::new(&mut rng)
    }

    fn fill_solution(session: &mut MiniGridSession) -> BoardEvent {
        let mut last = BoardEvent::None;
        for row in 0..session.puzzle().rows() {
            for col in 0..session.puzzle().cols() {
                if let Some(letter) = session.puzzle().letter_at(row, col) {
                    session.select_cell(row, col);
                    last = session.handle_letter(letter);
                }
            }
        }
        last
    }

    #[test]
    fn correct_fill_completes_once() {
        let mut session = session();
        assert_eq!(fill_solution(&mut session), BoardEvent::Completed);
        let event = session.completion_event().expect("success after dwell");
        assert_eq!(event.payload.score_delta, Some(50));
        assert_eq!(event.payload.note.as_deref(), Some("Mini grid composed"));
        assert!(session.completion_event().is_none());
    }

    #[test]
    fn hint_shaves_a_point() {
        let mut session = session();
        session.use_hint();
        assert!(session.hint_used());
        assert_eq!(fill_solution(&mut session), BoardEvent::Completed);
        let event = session.completion_event().unwrap();
        assert_eq!(event.payload.score_delta, Some(49));
    }

    #[test]
    fn full_wrong_board_penalizes_once_per_signature() {
        let mut session = session();
        // Fill every cell with the right letters except the last, flipped.
        let mut cells: Vec<(usize, usize, char)> = Vec::new();
        for row in 0..session.puzzle().rows() {
            for col in 0..session.puzzle().cols() {
                if let Some(letter) = session.puzzle().letter_at(row, col) {
                    cells.push((row, col, letter));
                }
            }
        }
        let (last_row, last_col, last_letter) = cells.pop().unwrap();
        for (row, col, letter) in cells {
            session.select_cell(row, col);
            assert_eq!(session.handle_letter(letter), BoardEvent::None);
        }
        let wrong = if last_letter == 'Z' { 'Q' } else { 'Z' };
        session.select_cell(last_row, last_col);
        match session.handle_letter(wrong) {
            BoardEvent::Misaligned(event) => {
                assert!(event.payload.retry);
                assert_eq!(event.payload.time_penalty, Some(5));
            }
            other => panic!("expected misalignment, got {other:?}"),
        }
        // Same wrong board again: no second penalty.
        session.select_cell(last_row, last_col);
        assert_eq!(session.handle_letter(wrong), BoardEvent::None);
        // Fixing the letter completes the board.
        session.select_cell(last_row, last_col);
        assert_eq!(session.handle_letter(last_letter), BoardEvent::Completed);
    }

    #[test]
    fn backspace_clears_then_steps_back() {
        let mut session = session();
        session.select_cell(0, 0);
        session.handle_letter('C');
        // Cursor advanced to (0,1); backspace with an empty cursor cell
        // steps back and clears (0,0).
        session.handle_backspace();
        assert_eq!(session.entry(0, 0), GridCell::Empty);
    }

    #[test]
    fn arrows_walk_to_the_next_letter_cell() {
        let mut session = session();
        session.select_cell(0, 0);
        session.handle_arrow(ArrowKey::Down);
        let (row, col) = session.cursor();
        assert_eq!((row, col), (1, 0));
        // The selected word should run down that column.
        let word = &session.puzzle().words[session.active_word()];
        assert_eq!(word.direction, Direction::Down);
    }
}
