//! Fixed header: wordmark, progress dots, and the run timer.

use yew::prelude::*;

use crate::game::{RunPhase, format_run_time};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: RunPhase,
    pub current_index: usize,
    pub total_stages: usize,
    pub time_elapsed: u32,
    #[prop_or_default]
    pub penalty_count: u32,
}

#[function_component(FixedHeader)]
pub fn fixed_header(props: &Props) -> Html {
    let dots = (0..props.total_stages).map(|index| {
        let is_complete = index < props.current_index;
        let is_current = props.phase == RunPhase::Playing && index == props.current_index;
        let fill = if props.phase == RunPhase::Finished {
            "dot--finished"
        } else if is_complete {
            "dot--complete"
        } else if is_current {
            "dot--current"
        } else {
            "dot--idle"
        };
        html! { <span key={index} class={classes!("progress-dot", fill)} /> }
    });

    let timer_class = if props.penalty_count > 0 {
        classes!("run-timer", "run-timer--penalized")
    } else {
        classes!("run-timer")
    };

    html! {
        <header class="fixed-header">
            <div class="fixed-header__title">
                <span class="wordmark">{ "THE RUSH" }</span>
                <div class="progress-dots">{ for dots }</div>
            </div>
            <div class="fixed-header__timer">
                <span class="run-timer__label">{ "Time" }</span>
                // The key forces a fresh node per penalty, restarting the flash.
                <span key={props.penalty_count} class={timer_class}>
                    { format_run_time(props.time_elapsed) }
                </span>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn header_shows_formatted_time_and_dots() {
        let props = Props {
            phase: RunPhase::Playing,
            current_index: 2,
            total_stages: 5,
            time_elapsed: 83,
            penalty_count: 0,
        };
        let html = block_on(LocalServerRenderer::<FixedHeader>::with_props(props).render());
        assert!(html.contains("01:23"));
        assert!(html.contains("THE RUSH"));
        assert!(html.matches("progress-dot").count() >= 5);
    }

    #[test]
    fn penalties_mark_the_timer() {
        let props = Props {
            phase: RunPhase::Playing,
            current_index: 0,
            total_stages: 5,
            time_elapsed: 10,
            penalty_count: 2,
        };
        let html = block_on(LocalServerRenderer::<FixedHeader>::with_props(props).render());
        assert!(html.contains("run-timer--penalized"));
    }
}
