//! Controller for the grid-tracing stage: wraps the path engine and scores
//! the win.

use rand::Rng;

use crate::outcome::GameOutcomeEvent;
use crate::path::{Cell, PathEngine, PathStatus, VisitOutcome};
use crate::puzzles::zip::{ZipPuzzle, generate_zip_puzzle};

pub struct ZipSession {
    puzzle: ZipPuzzle,
    engine: PathEngine,
    announced: bool,
}

impl ZipSession {
    pub fn new(rng: &mut impl Rng) -> Self {
        let puzzle = generate_zip_puzzle(rng);
        let engine = PathEngine::new(puzzle.size, &puzzle.anchors);
        Self {
            puzzle,
            engine,
            announced: false,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &ZipPuzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn engine(&self) -> &PathEngine {
        &self.engine
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.engine.status() == PathStatus::Won
    }

    /// Forward one pointer sample to the path engine.
    pub fn visit(&mut self, cell: Cell) -> VisitOutcome {
        self.engine.visit(cell)
    }

    pub fn undo(&mut self) -> bool {
        self.engine.undo()
    }

    /// The win announcement, exactly once: grid size base, time bonus, and
    /// an accuracy bonus for a trace that never backtracked.
    pub fn completion_event(&mut self, time_left: u32) -> Option<GameOutcomeEvent> {
        if !self.won() || self.announced {
            return None;
        }
        self.announced = true;
        let base = self.puzzle.size as i32 * 10;
        let time_bonus = time_left as i32 * 2;
        let accuracy_bonus = if self.engine.has_backtracked() { 0 } else { 20 };
        Some(GameOutcomeEvent::success(
            base + time_bonus + accuracy_bonus,
            "Zip complete",
        ))
    }
}
