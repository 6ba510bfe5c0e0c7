//! Per-stage outcome notes shown on the finished screen.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub notes: Vec<String>,
}

#[function_component(NotesList)]
pub fn notes_list(props: &Props) -> Html {
    if props.notes.is_empty() {
        return Html::default();
    }
    html! {
        <ul class="notes-list">
            { for props.notes.iter().enumerate().map(|(index, entry)| html! {
                <li key={format!("{entry}-{index}")}>{ entry.clone() }</li>
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn notes_render_in_order() {
        let props = Props {
            notes: vec!["Timing: Pulse aligned".into(), "Zip Puzzle: Zip complete".into()],
        };
        let html = block_on(LocalServerRenderer::<NotesList>::with_props(props).render());
        let first = html.find("Timing: Pulse aligned").unwrap();
        let second = html.find("Zip Puzzle: Zip complete").unwrap();
        assert!(first < second);
    }
}
