//! Sequence-completion stage view.

use gloo::timers::callback::Timeout;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use crate::game::{GameOutcomeEvent, SelectResult, SequenceSession};

const WRONG_CLEAR_MS: u32 = 280;
const ROUND_DWELL_MS: u32 = 340;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: u64,
    pub on_event: Callback<GameOutcomeEvent>,
}

#[function_component(SequenceView)]
pub fn sequence_view(props: &Props) -> Html {
    let seed = props.seed;
    let session = use_mut_ref(move || SequenceSession::new(&mut ChaCha20Rng::seed_from_u64(seed)));
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
        return html! { <div class="stage-empty">{ "Preparing sequence…" }</div> };
    };
    let round_label = format!(
        "Sequence - Round {} of {}",
        state.round_index() + 1,
        state.total_rounds()
    );

    let terms = round.sequence.iter().enumerate().map(|(index, value)| {
        let display = if index == round.missing_index {
            "?".to_string()
        } else {
            value.to_string()
        };
        html! { <span key={index} class="sequence-term">{ display }</span> }
    });

    let answer = round.answer;
    let options = round.options.iter().enumerate().map(|(index, option)| {
        let is_selected = selected.map(|(i, _)| i) == Some(index);
        let mut class = classes!("option-row");
        if is_selected {
            class.push(if *option == answer {
                "option-row--correct"
            } else {
                "option-row--wrong"
            });
        }
        let on_pick = on_pick.clone();
        html! {
            <button
                key={format!("{index}-{option}")}
                type="button"
                class={class}
                onclick={Callback::from(move |_| on_pick.emit(index))}
            >
                { option.to_string() }
            </button>
        }
    });

    html! {
        <div class="sequence-view">
            <div class="stage-heading">
                <p class="stage-heading__round">{ round_label }</p>
                <p class="stage-heading__rule">{ round.difficulty }</p>
                <div class="sequence-terms">{ for terms }</div>
            </div>
            <div class="option-list">{ for options }</div>
        </div>
    }
}
