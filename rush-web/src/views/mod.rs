//! One view per mini-game. Each view owns its controller behind a mutable
//! ref, renders from it, and forwards outcome events upward through the
//! `on_event` callback it was instantiated with.

pub mod eliminate;
pub mod language;
pub mod mini_grid;
pub mod sequence;
pub mod timing;
pub mod wordle;
pub mod zip;

pub use eliminate::EliminateView;
pub use language::LanguageView;
pub use mini_grid::MiniGridView;
pub use sequence::SequenceView;
pub use timing::TimingView;
pub use wordle::WordleView;
pub use zip::ZipView;
