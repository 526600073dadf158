//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Caption under the spinner
    #[prop_or("Loading...".to_string())]
    pub message: String,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="spinner"></div>
            <p>{&props.message}</p>
        </div>
    }
}
