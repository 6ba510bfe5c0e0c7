//! Rhythm-tap stage view: the pulse sweeps on an animation interval until
//! the single tap resolves the stage.

use gloo::timers::callback::Interval;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use crate::game::puzzles::timing::{advance_phase, pulse_position};
use crate::game::{GameOutcomeEvent, StatusContext, TimingSession};

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: u64,
    pub on_event: Callback<GameOutcomeEvent>,
    /// Absent in a practice context; the pulse then drifts slower.
    #[prop_or_default]
    pub status: Option<StatusContext>,
}

#[function_component(TimingView)]
pub fn timing_view(props: &Props) -> Html {
    let seed = props.seed;
    let practice = props.status.is_none();
    let session = use_mut_ref(move || {
        TimingSession::new(&mut ChaCha20Rng::seed_from_u64(seed), practice)
    });
    let progress = use_state(|| 50.0f32);
    let sweep = use_mut_ref(|| None::<Interval>);

    {
        let session = session.clone();
        let progress = progress.clone();
        let sweep = sweep.clone();
        use_effect_with((), move |()| {
            let speed = session.borrow().speed();
            let mut phase = 0.0f32;
            let interval = Interval::new(FRAME_MS, move || {
                phase = advance_phase(phase, speed);
                progress.set(pulse_position(phase));
            });
            sweep.borrow_mut().replace(interval);
            let sweep = sweep.clone();
            move || drop(sweep.borrow_mut().take())
        });
    }

    let on_tap = {
        let session = session.clone();
        let progress = progress.clone();
        let sweep = sweep.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = session.borrow_mut().tap(*progress);
            let Some((_, event)) = outcome else { return };
            // Freeze the indicator where the tap landed.
            drop(sweep.borrow_mut().take());
            on_event.emit(event);
        })
    };

    let state = session.borrow();
    let zone = state.zone();
    let result = state.result();
    let zone_style = format!(
        "left: {:.2}%; width: {:.2}%;",
        zone.start,
        zone.spread()
    );
    let indicator_style = format!("left: {:.2}%;", *progress);

    html! {
        <div class="timing-view">
            <p class="stage-heading__prompt">
                { "Tap once as the pulse drifts softly through the calm band." }
            </p>
            <button type="button" class="pulse-track" onclick={on_tap}>
                <div class="pulse-track__baseline" />
                <div class="pulse-track__zone" style={zone_style}>
                    <div class="pulse-track__zone-ring" />
                </div>
                <div class="pulse-track__indicator" style={indicator_style} />
            </button>
            if let Some(result) = result {
                <div class="pulse-result">
                    { result.label() }
                    <span class="pulse-result__score">
                        { format!("(+{})", result.score_delta()) }
                    </span>
                </div>
            }
        </div>
    }
}
