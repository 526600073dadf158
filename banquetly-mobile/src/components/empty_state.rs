//! Fallback view for a category with no shifts

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: String,
    #[prop_or_default]
    pub hint: Option<String>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <h3>{&props.title}</h3>
            {if let Some(ref hint) = props.hint {
                html! { <p class="empty-hint">{hint}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
