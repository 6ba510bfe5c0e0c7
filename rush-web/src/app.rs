//! Application shell: owns the run engine instance, drives its clock and
//! transition timers, and derives every screen from engine state.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::components::{FixedHeader, NotesList, StageFrame, SuccessOverlay, SunriseCountdown};
use crate::dom::{entropy_seed, local_now};
use crate::game::{
    DAILY_LOCK_REFRESH_MS, GameOutcomeEvent, Resolution, RunConfig, RunEngine, RunPhase,
    STAGE_TRANSITION_MS, ShellStore, StageId, format_run_time, shell_store,
};
use crate::share::share_run;
use crate::views::{
    EliminateView, LanguageView, MiniGridView, SequenceView, TimingView, WordleView, ZipView,
};

type SharedEngine = Rc<RefCell<RunEngine<ShellStore>>>;

fn schedule_commit(
    engine: &SharedEngine,
    slot: &Rc<RefCell<Option<Timeout>>>,
    update: &UseForceUpdateHandle,
) {
    let engine = engine.clone();
    let update = update.clone();
    let timer = Timeout::new(STAGE_TRANSITION_MS, move || {
        engine.borrow_mut().commit_advance(local_now());
        update.force_update();
    });
    slot.borrow_mut().replace(timer);
}

#[function_component(App)]
pub fn app() -> Html {
    html! { <RunView /> }
}

#[function_component(RunView)]
pub fn run_view() -> Html {
    let engine: SharedEngine = use_mut_ref(|| {
        RunEngine::new(RunConfig::default(), shell_store(), entropy_seed(), local_now())
    });
    let update = use_force_update();
    let commit_timer = use_mut_ref(|| None::<Timeout>);
    let share_note = use_state(|| None::<&'static str>);

    // One-second clock, restarted whenever the engine enters Playing.
    {
        let engine = engine.clone();
        let update = update.clone();
        let playing = engine.borrow().phase() == RunPhase::Playing;
        use_effect_with(playing, move |playing| {
            let ticker = playing.then(|| {
                Interval::new(1_000, move || {
                    engine.borrow_mut().tick_second();
                    update.force_update();
                })
            });
            move || drop(ticker)
        });
    }

    // Advisory daily-lock refresh.
    {
        let engine = engine.clone();
        let update = update.clone();
        use_effect_with((), move |()| {
            let refresher = Interval::new(DAILY_LOCK_REFRESH_MS, move || {
                engine.borrow_mut().refresh_daily_lock(local_now());
                update.force_update();
            });
            move || drop(refresher)
        });
    }

    let on_start = {
        let engine = engine.clone();
        let update = update.clone();
        let share_note = share_note.clone();
        Callback::from(move |_: MouseEvent| {
            share_note.set(None);
            engine.borrow_mut().start();
            update.force_update();
        })
    };

    let generation = engine.borrow().generation();
    let on_event = {
        let engine = engine.clone();
        let update = update.clone();
        let commit_timer = commit_timer.clone();
        Callback::from(move |event: GameOutcomeEvent| {
            let resolution = engine.borrow_mut().resolve_outcome(generation, event);
            if resolution == Resolution::TransitionStarted {
                schedule_commit(&engine, &commit_timer, &update);
            }
            update.force_update();
        })
    };

    let on_overlay_done = {
        let engine = engine.clone();
        let update = update.clone();
        let commit_timer = commit_timer.clone();
        Callback::from(move |()| {
            let resolution = engine.borrow_mut().acknowledge_success();
            if resolution == Resolution::TransitionStarted {
                schedule_commit(&engine, &commit_timer, &update);
            }
            update.force_update();
        })
    };

    let on_share = {
        let engine = engine.clone();
        let share_note = share_note.clone();
        Callback::from(move |_: MouseEvent| {
            let total = engine.borrow().time_elapsed();
            let share_note = share_note.clone();
            wasm_bindgen_futures::spawn_local(async move {
                share_note.set(Some(share_run(total).await));
            });
        })
    };

    let state = engine.borrow();
    let phase = state.phase();
    let header = html! {
        <FixedHeader
            phase={phase}
            current_index={state.current_index()}
            total_stages={state.sequence().len().max(state.config().sequence_length)}
            time_elapsed={state.time_elapsed()}
            penalty_count={state.penalty_count()}
        />
    };

    let body = match phase {
        RunPhase::Idle => {
            let locked = state.daily_locked();
            html! {
                <StageFrame>
                    <div class="idle-view">
                        <p class="idle-view__blurb">
                            { "Today's run features composed decisions. Preserve calm, react with precision." }
                        </p>
                        if locked {
                            <p class="idle-view__locked">{ "Daily run complete." }</p>
                            <SunriseCountdown />
                        }
                        <button
                            type="button"
                            class="begin-button"
                            disabled={locked}
                            onclick={on_start.clone()}
                        >
                            { "Begin Run" }
                        </button>
                    </div>
                </StageFrame>
            }
        }
        RunPhase::Finished => {
            let failed = state.run_failed();
            let message = if failed {
                "Run interrupted. Begin anew."
            } else {
                "Daily run complete."
            };
            let note_line = if failed {
                Html::default()
            } else {
                share_note.map_or_else(Html::default, |note| {
                    html! { <p class="share-note">{ note }</p> }
                })
            };
            html! {
                <StageFrame>
                    <div class="finished-view">
                        <div class="finished-view__time">
                            <p class="finished-view__label">{ "Final Time" }</p>
                            <p class="finished-view__value">{ format_run_time(state.time_elapsed()) }</p>
                        </div>
                        <p class="finished-view__message">{ message }</p>
                        <div class="finished-view__actions">
                            if !failed {
                                <button type="button" class="share-button" onclick={on_share}>
                                    { "Share Result" }
                                </button>
                            }
                            <button type="button" class="restart-button" onclick={on_start.clone()}>
                                { "Restart Run" }
                            </button>
                        </div>
                        { note_line }
                        <NotesList notes={state.notes().to_vec()} />
                    </div>
                </StageFrame>
            }
        }
        RunPhase::Playing => {
            let overlay = state.overlay();
            let stage_node = state.current_stage().map_or_else(Html::default, |stage| {
                render_stage(stage, &state, &on_event)
            });
            let veiled = state.transitioning() || overlay.is_some();
            let stage_class = if veiled {
                "stage-host stage-host--veiled"
            } else {
                "stage-host"
            };
            html! {
                <StageFrame class={classes!(overlay.is_some().then_some("stage-frame--celebrating"))}>
                    <div class="stage-layer">
                        <div class={stage_class}>{ stage_node }</div>
                        <SuccessOverlay
                            show={overlay.is_some()}
                            final_stage={overlay.is_some_and(|o| o.final_stage)}
                            on_complete={on_overlay_done}
                        />
                    </div>
                </StageFrame>
            }
        }
    };

    html! {
        <>
            { header }
            <main class="stage-layout">{ body }</main>
        </>
    }
}

fn render_stage(
    stage: StageId,
    state: &RunEngine<ShellStore>,
    on_event: &Callback<GameOutcomeEvent>,
) -> Html {
    let seed = state.controller_seed();
    let status = state.status();
    let key = format!("{stage}-{}", state.generation());
    let on_event = on_event.clone();
    match stage {
        StageId::Eliminate => html! {
            <EliminateView key={key} seed={seed} on_event={on_event} />
        },
        StageId::GuessLanguage => html! {
            <LanguageView key={key} seed={seed} on_event={on_event} />
        },
        StageId::Sequence => html! {
            <SequenceView key={key} seed={seed} on_event={on_event} />
        },
        StageId::Timing => html! {
            <TimingView key={key} seed={seed} on_event={on_event} status={Some(status)} />
        },
        StageId::Wordle4 => html! {
            <WordleView key={key} seed={seed} on_event={on_event} />
        },
        StageId::MiniGrid => html! {
            <MiniGridView key={key} seed={seed} on_event={on_event} />
        },
        StageId::ZipPuzzle => html! {
            <ZipView key={key} seed={seed} on_event={on_event} status={Some(status)} />
        },
    }
}
