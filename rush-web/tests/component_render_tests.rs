//! Server-side render smoke tests for every stage view: each must mount
//! with a fresh controller and draw its opening state.

use futures::executor::block_on;
use yew::prelude::*;
use yew::LocalServerRenderer;

use rush_web::views::{
    EliminateView, LanguageView, MiniGridView, SequenceView, TimingView, WordleView, ZipView,
};

#[test]
fn eliminate_view_opens_on_round_one() {
    let props = rush_web::views::eliminate::Props {
        seed: 11,
        on_event: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<EliminateView>::with_props(props).render());
    assert!(html.contains("Eliminate — Round 1 of 3"));
    assert!(html.contains("Select the item that does not belong."));
    assert!(html.matches("option-tile").count() >= 6);
}

#[test]
fn language_view_shows_a_phrase_and_four_options() {
    let props = rush_web::views::language::Props {
        seed: 12,
        on_event: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LanguageView>::with_props(props).render());
    assert!(html.contains("Guess Language - Round 1 of 3"));
    assert!(html.matches("option-row").count() >= 4);
}

#[test]
fn sequence_view_hides_the_missing_term() {
    let props = rush_web::views::sequence::Props {
        seed: 13,
        on_event: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SequenceView>::with_props(props).render());
    assert!(html.contains("Sequence - Round 1 of 3"));
    assert!(html.contains('?'));
}

#[test]
fn timing_view_draws_the_track() {
    let props = rush_web::views::timing::Props {
        seed: 14,
        on_event: Callback::noop(),
        status: None,
    };
    let html = block_on(LocalServerRenderer::<TimingView>::with_props(props).render());
    assert!(html.contains("pulse-track"));
    assert!(html.contains("calm band"));
}

#[test]
fn wordle_view_lays_out_grid_and_keyboard() {
    let props = rush_web::views::wordle::Props {
        seed: 15,
        on_event: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<WordleView>::with_props(props).render());
    assert!(html.contains("Wordle 4"));
    assert!(html.matches("wordle-row").count() >= 5);
    assert!(html.contains("Enter"));
}

#[test]
fn mini_grid_view_shows_clues() {
    let props = rush_web::views::mini_grid::Props {
        seed: 16,
        on_event: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<MiniGridView>::with_props(props).render());
    assert!(html.contains("Mini Grid"));
    assert!(html.contains("Small feline"));
    assert!(html.contains("Hint"));
}

#[test]
fn zip_view_numbers_its_anchors() {
    let props = rush_web::views::zip::Props {
        seed: 17,
        on_event: Callback::noop(),
        status: None,
    };
    let html = block_on(LocalServerRenderer::<ZipView>::with_props(props).render());
    assert!(html.contains("zip-grid"));
    assert!(html.contains("zip-anchor"));
    assert!(html.contains("Undo"));
}
