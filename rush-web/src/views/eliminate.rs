//! Odd-one-out stage view.

use gloo::timers::callback::Timeout;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use crate::game::minigames::eliminate::TOTAL_ELIMINATE_ROUNDS;
use crate::game::{EliminateSession, GameOutcomeEvent, SelectResult};

const WRONG_SHAKE_MS: u32 = 400;
const ROUND_DWELL_MS: u32 = 320;
const ROUND_FADE_MS: u32 = 180;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: u64,
    pub on_event: Callback<GameOutcomeEvent>,
}

#[function_component(EliminateView)]
pub fn eliminate_view(props: &Props) -> Html {
    let seed = props.seed;
    let session = use_mut_ref(move || EliminateSession::new(&mut ChaCha20Rng::seed_from_u64(seed)));
    let interaction = use_state(|| None::<(usize, bool)>);
    let feedback = use_state(|| None::<&'static str>);
    let fading = use_state(|| false);
    let pending_timer = use_mut_ref(|| None::<Timeout>);

    let on_pick = {
        let session = session.clone();
        let interaction = interaction.clone();
        let feedback = feedback.clone();
        let fading = fading.clone();
        let pending_timer = pending_timer.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |index: usize| {
            if *fading {
                return;
            }
            match session.borrow_mut().select(index) {
                SelectResult::Ignored => {}
                SelectResult::Wrong(event) => {
                    interaction.set(Some((index, false)));
                    feedback.set(Some("That choice still fits the set."));
                    on_event.emit(event);
                    let interaction = interaction.clone();
                    let timer = Timeout::new(WRONG_SHAKE_MS, move || interaction.set(None));
                    pending_timer.borrow_mut().replace(timer);
                }
                SelectResult::RoundWon => {
                    interaction.set(Some((index, true)));
                    feedback.set(Some("Beautiful deduction."));
                    let session = session.clone();
                    let on_event = on_event.clone();
                    let interaction = interaction.clone();
                    let feedback = feedback.clone();
                    let fading = fading.clone();
                    let fading_outer = fading.clone();
                    let timer = Timeout::new(ROUND_DWELL_MS, move || {
                        fading_outer.set(true);
                        Timeout::new(ROUND_FADE_MS, move || {
                            if let Some(event) = session.borrow_mut().advance_round() {
                                on_event.emit(event);
                                return;
                            }
                            interaction.set(None);
                            feedback.set(None);
                            fading.set(false);
                        })
                        .forget();
                    });
                    pending_timer.borrow_mut().replace(timer);
                }
            }
        })
    };

    let state = session.borrow();
    let Some(puzzle) = state.puzzle() else {
        return html! { <div class="stage-empty">{ "Preparing puzzle…" }</div> };
    };
    let round_label = format!(
        "Eliminate — Round {} of {TOTAL_ELIMINATE_ROUNDS}",
        state.round_index() + 1
    );
    let rule_label = format!("{}: {}", puzzle.mode.as_str(), puzzle.explanation);
    let resolved = state.round_resolved();
    let correct_index = puzzle.correct_index;

    let tiles = puzzle.items.iter().enumerate().map(|(index, item)| {
        let is_active = interaction.map(|(i, _)| i) == Some(index);
        let is_wrong = is_active && interaction.is_some_and(|(_, correct)| !correct);
        let is_revealed = resolved && index == correct_index;
        let mut class = classes!("option-tile");
        if is_revealed {
            class.push("option-tile--correct");
        } else if is_wrong {
            class.push("option-tile--wrong");
            class.push("option-tile--shake");
        }
        let on_pick = on_pick.clone();
        html! {
            <button
                key={format!("{item}-{index}")}
                type="button"
                class={class}
                onclick={Callback::from(move |_| on_pick.emit(index))}
            >
                { *item }
            </button>
        }
    });

    let grid_class = if *fading {
        classes!("option-grid", "option-grid--fading")
    } else {
        classes!("option-grid")
    };

    html! {
        <div class="eliminate-view">
            <div class="stage-heading">
                <p class="stage-heading__round">{ round_label }</p>
                <p class="stage-heading__rule">{ rule_label }</p>
                <h3 class="stage-heading__prompt">{ "Select the item that does not belong." }</h3>
            </div>
            <div class={grid_class}>{ for tiles }</div>
            if let Some(text) = *feedback {
                <p class="stage-feedback">{ text }</p>
            }
        </div>
    }
}
