//! Mini-game controllers: one per stage, each owning its generated puzzle
//! plus round/attempt state and emitting [`GameOutcomeEvent`]s upward. The
//! run engine never reaches into these; the shell renders them and forwards
//! the events.

pub mod eliminate;
pub mod language;
pub mod mini_grid;
pub mod sequence;
pub mod timing;
pub mod wordle;
pub mod zip;

use rand::Rng;

use crate::stage::StageId;

pub use eliminate::EliminateSession;
pub use language::LanguageSession;
pub use mini_grid::{BoardEvent, MiniGridSession};
pub use sequence::SequenceSession;
pub use timing::TimingSession;
pub use wordle::{GuessOutcome, WordleSession};
pub use zip::ZipSession;

/// Shared result of picking an answer in the option-grid games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectResult {
    /// Input arrived while the round was locked or resolved.
    Ignored,
    /// Wrong pick; forward the carried fail event to the engine.
    Wrong(crate::outcome::GameOutcomeEvent),
    /// Round solved; dwell briefly, then call `advance_round`.
    RoundWon,
}

/// The controller slot resolved at sequence-build time, keyed by stage id.
pub enum StageController {
    Eliminate(EliminateSession),
    GuessLanguage(LanguageSession),
    Sequence(SequenceSession),
    Timing(TimingSession),
    Wordle4(WordleSession),
    MiniGrid(MiniGridSession),
    ZipPuzzle(ZipSession),
}

impl StageController {
    /// Build a fresh controller instance for a stage. Instances are never
    /// reused across attempts; the engine's generation guard relies on that.
    pub fn instantiate(stage: StageId, rng: &mut impl Rng) -> Self {
        match stage {
            StageId::Eliminate => Self::Eliminate(EliminateSession::new(rng)),
            StageId::GuessLanguage => Self::GuessLanguage(LanguageSession::new(rng)),
            StageId::Sequence => Self::Sequence(SequenceSession::new(rng)),
            StageId::Timing => Self::Timing(TimingSession::new(rng, false)),
            StageId::Wordle4 => Self::Wordle4(WordleSession::new(rng)),
            StageId::MiniGrid => Self::MiniGrid(MiniGridSession::new(rng)),
            StageId::ZipPuzzle => Self::ZipPuzzle(ZipSession::new(rng)),
        }
    }

    #[must_use]
    pub const fn stage(&self) -> StageId {
        match self {
            Self::Eliminate(_) => StageId::Eliminate,
            Self::GuessLanguage(_) => StageId::GuessLanguage,
            Self::Sequence(_) => StageId::Sequence,
            Self::Timing(_) => StageId::Timing,
            Self::Wordle4(_) => StageId::Wordle4,
            Self::MiniGrid(_) => StageId::MiniGrid,
            Self::ZipPuzzle(_) => StageId::ZipPuzzle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::ALL_STAGES;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn every_stage_id_resolves_to_a_controller() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for info in &ALL_STAGES {
            let controller = StageController::instantiate(info.id, &mut rng);
            assert_eq!(controller.stage(), info.id);
        }
    }
}
