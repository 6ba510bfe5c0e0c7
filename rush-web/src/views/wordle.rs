//! Four-letter word-guessing stage view with an on-screen keyboard.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use crate::game::puzzles::wordle::{LetterState, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{GameOutcomeEvent, GuessOutcome, WordleSession};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: u64,
    pub on_event: Callback<GameOutcomeEvent>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Key {
    Letter(char),
    Enter,
    Back,
}

fn cell_class(state: Option<LetterState>) -> &'static str {
    match state {
        Some(LetterState::Correct) => "wordle-cell wordle-cell--correct",
        Some(LetterState::Present) => "wordle-cell wordle-cell--present",
        Some(LetterState::Absent) => "wordle-cell wordle-cell--absent",
        None => "wordle-cell",
    }
}

#[function_component(WordleView)]
pub fn wordle_view(props: &Props) -> Html {
    let seed = props.seed;
    let session = use_mut_ref(move || WordleSession::new(&mut ChaCha20Rng::seed_from_u64(seed)));
    let update = use_force_update();

    let on_key = {
        let session = session.clone();
        let update = update.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |key: Key| {
            match key {
                Key::Letter(letter) => session.borrow_mut().type_letter(letter),
                Key::Back => session.borrow_mut().backspace(),
                Key::Enter => match session.borrow_mut().submit() {
                    GuessOutcome::Ignored | GuessOutcome::Invalid => {}
                    GuessOutcome::Solved(event) | GuessOutcome::Miss(event) => {
                        on_event.emit(event);
                    }
                    GuessOutcome::Lost { penalty, fatal } => {
                        on_event.emit(penalty);
                        on_event.emit(fatal);
                    }
                },
            }
            update.force_update();
        })
    };

    let state = session.borrow();
    let attempt_row = state.attempt_index();
    let resolved = state.resolved();

    let rows = (0..MAX_ATTEMPTS).map(|row| {
        let guess = state.guesses().get(row);
        let evaluation = state.evaluations().get(row);
        let is_current = row == attempt_row && !resolved;
        let display: Vec<char> = match (guess, is_current) {
            (Some(word), _) => word.chars().collect(),
            (None, true) => state.current().chars().collect(),
            (None, false) => Vec::new(),
        };
        let cells = (0..WORD_LENGTH).map(|col| {
            let letter = display.get(col).copied();
            let cell_state = guess.and(evaluation).map(|eval| eval[col]);
            html! {
                <div key={format!("cell-{row}-{col}")} class={cell_class(cell_state)}>
                    { letter.map(String::from).unwrap_or_default() }
                </div>
            }
        });
        html! { <div key={format!("row-{row}")} class="wordle-row">{ for cells }</div> }
    });

    let keyboard = KEYBOARD_ROWS.iter().map(|row| {
        let keys = row.chars().map(|letter| {
            let on_key = on_key.clone();
            html! {
                <button
                    key={letter.to_string()}
                    type="button"
                    class="wordle-key"
                    onclick={Callback::from(move |_| on_key.emit(Key::Letter(letter)))}
                >
                    { letter }
                </button>
            }
        });
        html! { <div key={*row} class="wordle-keyboard-row">{ for keys }</div> }
    });

    let on_enter = {
        let on_key = on_key.clone();
        Callback::from(move |_| on_key.emit(Key::Enter))
    };
    let on_back = {
        let on_key = on_key.clone();
        Callback::from(move |_| on_key.emit(Key::Back))
    };

    html! {
        <div class="wordle-view">
            <div class="stage-heading">
                <p class="stage-heading__round">{ format!("Wordle 4 - {}", state.theme()) }</p>
                <p class="stage-heading__rule">{ state.message() }</p>
            </div>
            <div class="wordle-grid">{ for rows }</div>
            <div class="wordle-keyboard">
                { for keyboard }
                <div class="wordle-keyboard-row">
                    <button type="button" class="wordle-key wordle-key--enter" onclick={on_enter}>
                        { "Enter" }
                    </button>
                    <button type="button" class="wordle-key wordle-key--back" onclick={on_back}>
                        { "Back" }
                    </button>
                </div>
            </div>
        </div>
    }
}
