//! Grid-tracing stage view: pointer-driven path drawing over the anchor
//! grid, with shake feedback on rejected cells.

use gloo::timers::callback::Timeout;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::game::{Cell, GameOutcomeEvent, StatusContext, VisitOutcome, ZipSession};

const SHAKE_MS: u32 = 220;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub seed: u64,
    pub on_event: Callback<GameOutcomeEvent>,
    #[prop_or_default]
    pub status: Option<StatusContext>,
}

fn cell_from_pointer(event: &PointerEvent, grid: &HtmlElement, size: usize) -> Option<Cell> {
    let rect = grid.get_bounding_client_rect();
    let x = f64::from(event.client_x()) - rect.left();
    let y = f64::from(event.client_y()) - rect.top();
    if x < 0.0 || y < 0.0 || x > rect.width() || y > rect.height() {
        return None;
    }
    let cell_size = rect.width() / size as f64;
    if cell_size <= 0.0 {
        return None;
    }
    let col = ((x / cell_size) as usize).min(size - 1);
    let row = ((y / cell_size) as usize).min(size - 1);
    Some(Cell::new(row, col))
}

#[function_component(ZipView)]
pub fn zip_view(props: &Props) -> Html {
    let seed = props.seed;
    let session = use_mut_ref(move || ZipSession::new(&mut ChaCha20Rng::seed_from_u64(seed)));
    let update = use_force_update();
    let grid_ref = use_node_ref();
    let tracing = use_mut_ref(|| false);
    let shake = use_state(|| None::<Cell>);
    let shake_timer = use_mut_ref(|| None::<Timeout>);
    let time_left = props.status.map_or(0, |status| status.time_left_seconds);

    let process_pointer = {
        let session = session.clone();
        let update = update.clone();
        let grid_ref = grid_ref.clone();
        let shake = shake.clone();
        let shake_timer = shake_timer.clone();
        let on_event = props.on_event.clone();
        move |event: &PointerEvent| {
            let Some(grid) = grid_ref.cast::<HtmlElement>() else {
                return;
            };
            let size = session.borrow().puzzle().size;
            let Some(cell) = cell_from_pointer(event, &grid, size) else {
                return;
            };
            let outcome = session.borrow_mut().visit(cell);
            match outcome {
                VisitOutcome::Ignored => return,
                VisitOutcome::Rejected(cell) => {
                    shake.set(Some(cell));
                    let shake = shake.clone();
                    let timer = Timeout::new(SHAKE_MS, move || shake.set(None));
                    shake_timer.borrow_mut().replace(timer);
                }
                VisitOutcome::Changed => {
                    if let Some(event) = session.borrow_mut().completion_event(time_left) {
                        on_event.emit(event);
                    }
                }
            }
            update.force_update();
        }
    };

    let on_pointer_down = {
        let tracing = tracing.clone();
        let process_pointer = process_pointer.clone();
        Callback::from(move |event: PointerEvent| {
            event.prevent_default();
            if let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                let _ = target.set_pointer_capture(event.pointer_id());
            }
            *tracing.borrow_mut() = true;
            process_pointer(&event);
        })
    };
    let on_pointer_move = {
        let tracing = tracing.clone();
        let process_pointer = process_pointer.clone();
        Callback::from(move |event: PointerEvent| {
            if *tracing.borrow() {
                process_pointer(&event);
            }
        })
    };
    let on_pointer_up = {
        let tracing = tracing.clone();
        Callback::from(move |_: PointerEvent| {
            *tracing.borrow_mut() = false;
        })
    };
    let on_undo = {
        let session = session.clone();
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            if session.borrow_mut().undo() {
                update.force_update();
            }
        })
    };

    let state = session.borrow();
    let engine = state.engine();
    let size = state.puzzle().size;
    let last_cell = engine.last_cell();

    let polyline_points = engine
        .path()
        .iter()
        .map(|cell| {
            format!(
                "{:.2},{:.2}",
                (cell.col as f64 + 0.5) / size as f64 * 100.0,
                (cell.row as f64 + 0.5) / size as f64 * 100.0,
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let cells = (0..size).flat_map(|row| {
        (0..size).map(move |col| Cell::new(row, col))
    });
    let grid_cells = cells.map(|cell| {
        let mut class = classes!("zip-cell");
        if engine.is_visited(cell) {
            class.push("zip-cell--visited");
        }
        if last_cell == Some(cell) {
            class.push("zip-cell--head");
        }
        if *shake == Some(cell) {
            class.push("zip-cell--shake");
        }
        let anchor = engine.anchor_at(cell);
        html! {
            <div key={format!("{}-{}", cell.row, cell.col)} class={class}>
                if let Some(anchor) = anchor {
                    <span class="zip-anchor">{ anchor.value }</span>
                }
            </div>
        }
    });

    let grid_style = format!(
        "grid-template-columns: repeat({size}, 1fr); grid-template-rows: repeat({size}, 1fr);"
    );

    html! {
        <div class="zip-view">
            <p class="stage-heading__prompt">
                { "Draw one line through every cell, touching the numbers in order." }
            </p>
            <div
                ref={grid_ref}
                class="zip-grid"
                style={grid_style}
                onpointerdown={on_pointer_down}
                onpointermove={on_pointer_move}
                onpointerup={on_pointer_up}
            >
                { for grid_cells }
                <svg class="zip-trace" viewBox="0 0 100 100" preserveAspectRatio="none">
                    <polyline points={polyline_points} class="zip-trace__line" />
                </svg>
            </div>
            <div class="zip-controls">
                <button type="button" class="zip-undo" onclick={on_undo}>{ "Undo" }</button>
                if state.won() {
                    <p class="stage-feedback">{ "Zip complete." }</p>
                }
            </div>
        </div>
    }
}
