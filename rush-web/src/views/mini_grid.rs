//! Grid-fill stage view: clickable cells, an on-screen letter row, one hint.

use gloo::timers::callback::Timeout;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use crate::game::minigames::mini_grid::{ArrowKey, GridCell};
use crate::game::{BoardEvent, GameOutcomeEvent, MiniGridSession};

const COMPLETION_DWELL_MS: u32 = 900;
const LETTER_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: u64,
    pub on_event: Callback<GameOutcomeEvent>,
}

#[function_component(MiniGridView)]
pub fn mini_grid_view(props: &Props) -> Html {
    let seed = props.seed;
    let session = use_mut_ref(move || MiniGridSession::new(&mut ChaCha20Rng::seed_from_u64(seed)));
    let update = use_force_update();
    let completion_timer = use_mut_ref(|| None::<Timeout>);

    let handle_board_event = {
        let session = session.clone();
        let completion_timer = completion_timer.clone();
        let on_event = props.on_event.clone();
        move |board_event: BoardEvent| match board_event {
            BoardEvent::None => {}
            BoardEvent::Misaligned(event) => on_event.emit(event),
            BoardEvent::Completed => {
                let session = session.clone();
                let on_event = on_event.clone();
                let timer = Timeout::new(COMPLETION_DWELL_MS, move || {
                    if let Some(event) = session.borrow_mut().completion_event() {
                        on_event.emit(event);
                    }
                });
                completion_timer.borrow_mut().replace(timer);
            }
        }
    };

    let on_letter = {
        let session = session.clone();
        let update = update.clone();
        let handle_board_event = handle_board_event.clone();
        Callback::from(move |letter: char| {
            let board_event = session.borrow_mut().handle_letter(letter);
            handle_board_event(board_event);
            update.force_update();
        })
    };

    let on_back = {
        let session = session.clone();
        let update = update.clone();
        let handle_board_event = handle_board_event.clone();
        Callback::from(move |_: MouseEvent| {
            let board_event = session.borrow_mut().handle_backspace();
            handle_board_event(board_event);
            update.force_update();
        })
    };

    let on_hint = {
        let session = session.clone();
        let update = update.clone();
        let handle_board_event = handle_board_event.clone();
        Callback::from(move |_: MouseEvent| {
            // A hint can finish the board outright.
            let board_event = session.borrow_mut().use_hint();
            handle_board_event(board_event);
            update.force_update();
        })
    };

    let on_cell = {
        let session = session.clone();
        let update = update.clone();
        Callback::from(move |(row, col): (usize, usize)| {
            session.borrow_mut().select_cell(row, col);
            update.force_update();
        })
    };

    let on_arrow = {
        let session = session.clone();
        let update = update.clone();
        Callback::from(move |key: ArrowKey| {
            session.borrow_mut().handle_arrow(key);
            update.force_update();
        })
    };

    let state = session.borrow();
    let puzzle = state.puzzle();
    let cursor = state.cursor();
    let active_positions = puzzle.words[state.active_word()].positions;

    let grid_rows = (0..puzzle.rows()).map(|row| {
        let cells = (0..puzzle.cols()).map(|col| {
            let entry = state.entry(row, col);
            let mut class = classes!("grid-cell");
            match entry {
                GridCell::Block => class.push("grid-cell--block"),
                GridCell::Empty | GridCell::Letter(_) => {
                    if (row, col) == cursor {
                        class.push("grid-cell--cursor");
                    } else if active_positions.contains(&(row, col)) {
                        class.push("grid-cell--active-word");
                    }
                }
            }
            let text = match entry {
                GridCell::Letter(letter) => letter.to_string(),
                GridCell::Block | GridCell::Empty => String::new(),
            };
            let on_cell = on_cell.clone();
            html! {
                <button
                    key={format!("{row}-{col}")}
                    type="button"
                    class={class}
                    disabled={entry == GridCell::Block}
                    onclick={Callback::from(move |_| on_cell.emit((row, col)))}
                >
                    { text }
                </button>
            }
        });
        html! { <div key={row} class="grid-row">{ for cells }</div> }
    });

    let clues = puzzle.words.iter().enumerate().map(|(index, word)| {
        let marker = if index == state.active_word() { "clue clue--active" } else { "clue" };
        html! { <li key={index} class={marker}>{ word.clue }</li> }
    });

    let keyboard = LETTER_ROWS.iter().map(|row| {
        let keys = row.chars().map(|letter| {
            let on_letter = on_letter.clone();
            html! {
                <button
                    key={letter.to_string()}
                    type="button"
                    class="wordle-key"
                    onclick={Callback::from(move |_| on_letter.emit(letter))}
                >
                    { letter }
                </button>
            }
        });
        html! { <div key={*row} class="wordle-keyboard-row">{ for keys }</div> }
    });

    let arrows = [
        (ArrowKey::Left, "←"),
        (ArrowKey::Up, "↑"),
        (ArrowKey::Down, "↓"),
        (ArrowKey::Right, "→"),
    ]
    .map(|(key, glyph)| {
        let on_arrow = on_arrow.clone();
        html! {
            <button
                key={glyph}
                type="button"
                class="wordle-key"
                onclick={Callback::from(move |_| on_arrow.emit(key))}
            >
                { glyph }
            </button>
        }
    });

    html! {
        <div class="mini-grid-view">
            <div class="stage-heading">
                <p class="stage-heading__round">{ "Mini Grid" }</p>
                if let Some(message) = state.message() {
                    <p class="stage-heading__rule">{ message }</p>
                }
            </div>
            <div class="mini-grid">{ for grid_rows }</div>
            <ul class="clue-list">{ for clues }</ul>
            <div class="wordle-keyboard">
                { for keyboard }
                <div class="wordle-keyboard-row">
                    { for arrows.into_iter() }
                    <button type="button" class="wordle-key wordle-key--back" onclick={on_back}>
                        { "Back" }
                    </button>
                    <button
                        type="button"
                        class="wordle-key wordle-key--hint"
                        disabled={state.hint_used()}
                        onclick={on_hint}
                    >
                        { "Hint" }
                    </button>
                </div>
            </div>
        </div>
    }
}
