//! Language-guessing stage view.

use gloo::timers::callback::Timeout;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use crate::game::{GameOutcomeEvent, LanguageSession, SelectResult};

const WRONG_CLEAR_MS: u32 = 280;
const ROUND_DWELL_MS: u32 = 340;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: u64,
    pub on_event: Callback<GameOutcomeEvent>,
}

#[function_component(LanguageView)]
pub fn language_view(props: &Props) -> Html {
    let seed = props.seed;
    let session = use_mut_ref(move || LanguageSession::new(&mut ChaCha20Rng::seed_from_u64(seed)));
    let selected = use_state(|| None::<(usize, bool)>);
    let pending_timer = use_mut_ref(|| None::<Timeout>);

    let on_pick = {
        let session = session.clone();
        let selected = selected.clone();
        let pending_timer = pending_timer.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |index: usize| {
            match session.borrow_mut().select(index) {
                SelectResult::Ignored => {}
                SelectResult::Wrong(event) => {
                    selected.set(Some((index, false)));
                    on_event.emit(event);
                    let selected = selected.clone();
                    let timer = Timeout::new(WRONG_CLEAR_MS, move || selected.set(None));
                    pending_timer.borrow_mut().replace(timer);
                }
                SelectResult::RoundWon => {
                    selected.set(Some((index, true)));
                    let session = session.clone();
                    let selected = selected.clone();
                    let on_event = on_event.clone();
                    let timer = Timeout::new(ROUND_DWELL_MS, move || {
                        if let Some(event) = session.borrow_mut().advance_round() {
                            on_event.emit(event);
                            return;
                        }
                        selected.set(None);
                    });
                    pending_timer.borrow_mut().replace(timer);
                }
            }
        })
    };

    let state = session.borrow();
    let Some(round) = state.round() else {
        return html! { <div class="stage-empty">{ "Preparing round…" }</div> };
    };
    let round_label = format!(
        "Guess Language - Round {} of {}",
        state.round_index() + 1,
        state.total_rounds()
    );
    let reveal_correct = selected.is_some_and(|(_, correct)| !correct);
    let answer = round.answer;

    let options = round.options.iter().enumerate().map(|(index, option)| {
        let is_selected = selected.map(|(i, _)| i) == Some(index);
        let was_correct = selected.is_some_and(|(_, correct)| correct);
        let mut class = classes!("option-row");
        if is_selected {
            class.push(if was_correct {
                "option-row--correct"
            } else {
                "option-row--wrong"
            });
        }
        if reveal_correct && *option == answer {
            class.push("option-row--revealed");
        }
        let on_pick = on_pick.clone();
        html! {
            <button
                key={format!("{}-{option}", round.phrase)}
                type="button"
                class={class}
                onclick={Callback::from(move |_| on_pick.emit(index))}
            >
                { *option }
            </button>
        }
    });

    html! {
        <div class="language-view">
            <div class="stage-heading">
                <p class="stage-heading__round">{ round_label }</p>
                <p class="stage-heading__rule">{ round.family }</p>
                <p class="stage-heading__phrase">{ round.phrase }</p>
            </div>
            <div class="option-list">{ for options }</div>
        </div>
    }
}
