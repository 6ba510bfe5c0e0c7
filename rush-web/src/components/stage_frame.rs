//! Square card container hosting the active stage.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(StageFrame)]
pub fn stage_frame(props: &Props) -> Html {
    html! {
        <div class="stage-frame">
            if let Some(label) = &props.label {
                <p class="stage-frame__label">{ label.clone() }</p>
            }
            <div class={classes!("stage-frame__card", props.class.clone())}>
                <div class="stage-frame__inner">{ props.children.clone() }</div>
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
    fn frame_renders_label_and_children() {
        let props = Props {
            children: Children::new(vec![html! { <p>{ "inside" }</p> }]),
            class: Classes::new(),
            label: Some(AttrValue::from("Stage 1")),
        };
        let html = block_on(LocalServerRenderer::<StageFrame>::with_props(props).render());
        assert!(html.contains("inside"));
        assert!(html.contains("Stage 1"));
    }
}
