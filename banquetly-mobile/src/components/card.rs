//! Card component for mobile UI

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub children: Children,
    /// Row pinned under the content, e.g. action buttons or punch times
    #[prop_or_default]
    pub footer: Html,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let class = classes!("card", props.onclick.is_some().then_some("clickable"));

    let handle_click = {
        let onclick = props.onclick.clone();
        move |_| {
            if let Some(ref callback) = onclick {
                callback.emit(());
            }
        }
    };

    html! {
        <div {class} onclick={handle_click}>
            {if let Some(ref title) = props.title {
                html! { <div class="card-title">{title}</div> }
            } else {
                html! {}
            }}
            <div class="card-content">
                {props.children.clone()}
            </div>
            {props.footer.clone()}
        </div>
    }
}
