//! Retryable error banner shown after a failed refresh

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub on_retry: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let on_retry = props.on_retry.clone();
    let onclick = Callback::from(move |_| on_retry.emit(()));

    html! {
        <div class="error-banner" role="alert">
            <span class="error-message">{&props.message}</span>
            <button class="retry-button" {onclick}>{"Retry"}</button>
        </div>
    }
}
