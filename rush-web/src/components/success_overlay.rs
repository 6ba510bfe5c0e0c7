//! Celebratory check overlay. Dwells briefly, then releases the pending
//! stage advance through `on_complete`.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::game::{OVERLAY_DWELL_FINAL_MS, OVERLAY_DWELL_MS};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub show: bool,
    #[prop_or_default]
    pub final_stage: bool,
    #[prop_or_default]
    pub on_complete: Callback<()>,
}

#[function_component(SuccessOverlay)]
pub fn success_overlay(props: &Props) -> Html {
    {
        let on_complete = props.on_complete.clone();
        let final_stage = props.final_stage;
        use_effect_with(props.show, move |show| {
            let timer = show.then(|| {
                let duration = if final_stage {
                    OVERLAY_DWELL_FINAL_MS
                } else {
                    OVERLAY_DWELL_MS
                };
                Timeout::new(duration, move || on_complete.emit(()))
            });
            move || drop(timer)
        });
    }

    if !props.show {
        return Html::default();
    }
    html! {
        <div class="success-overlay">
            <div class="success-overlay__glow" />
            <svg class="success-overlay__check" viewBox="0 0 72 72" fill="none">
                <path d="M18 36 L30 48 L54 24" class="stroke-check" />
            </svg>
        </div>
    }
}
