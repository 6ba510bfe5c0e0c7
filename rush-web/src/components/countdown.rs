//! Countdown to the next 23:59 daily reset, refreshed each minute.

use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::dom::local_now;
use crate::game::time_until_reset;

#[function_component(SunriseCountdown)]
pub fn sunrise_countdown() -> Html {
    let remaining = use_state(|| time_until_reset(local_now()));
    let colon_active = use_state(|| false);

    {
        let remaining = remaining.clone();
        let colon_active = colon_active.clone();
        use_effect_with((), move |()| {
            let minute_timer = Interval::new(60_000, move || {
                remaining.set(time_until_reset(local_now()));
            });
            let mut bright = false;
            let colon_timer = Interval::new(4_000, move || {
                bright = !bright;
                colon_active.set(bright);
            });
            move || {
                drop(minute_timer);
                drop(colon_timer);
            }
        });
    }

    let (hours, minutes) = *remaining;
    let colon_class = if *colon_active {
        "countdown__colon countdown__colon--bright"
    } else {
        "countdown__colon"
    };

    html! {
        <div class="countdown">
            <p class="countdown__caption">{ "Resets at 11:59 PM" }</p>
            <p class="countdown__caption countdown__caption--dim">{ "Next run in" }</p>
            <div class="countdown__digits">
                <span>{ format!("{hours:02}") }</span>
                <span class={colon_class}>{ ":" }</span>
                <span>{ format!("{minutes:02}") }</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn countdown_renders_two_digit_fields() {
        let html = block_on(LocalServerRenderer::<SunriseCountdown>::new().render());
        assert!(html.contains("Resets at 11:59 PM"));
        assert!(html.contains("countdown__digits"));
    }
}
