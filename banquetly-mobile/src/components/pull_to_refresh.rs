//! Pull-to-refresh container for board screens

use web_sys::TouchEvent;
use yew::prelude::*;

/// Pull distance is clamped here
const MAX_PULL_PX: f64 = 150.0;
/// Releasing beyond this distance triggers a refresh
const TRIGGER_PX: f64 = 80.0;

#[derive(Properties, PartialEq)]
pub struct PullToRefreshProps {
    #[prop_or_default]
    pub children: Children,
    pub on_refresh: Callback<()>,
    /// Set while a refresh is in flight; further pulls are ignored
    #[prop_or(false)]
    pub refreshing: bool,
}

#[function_component(PullToRefresh)]
pub fn pull_to_refresh(props: &PullToRefreshProps) -> Html {
    let pull_distance = use_state(|| 0.0);
    let is_pulling = use_state(|| false);
    let start_y = use_state(|| 0.0);

    let on_touch_start = {
        let start_y = start_y.clone();
        let is_pulling = is_pulling.clone();

        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                start_y.set(touch.client_y() as f64);
                is_pulling.set(true);
            }
        })
    };

    let on_touch_move = {
        let start_y = start_y.clone();
        let pull_distance = pull_distance.clone();
        let is_pulling = is_pulling.clone();

        Callback::from(move |e: TouchEvent| {
            if *is_pulling {
                if let Some(touch) = e.touches().get(0) {
                    let current_y = touch.client_y() as f64;
                    let distance = (current_y - *start_y).max(0.0).min(MAX_PULL_PX);
                    pull_distance.set(distance);
                }
            }
        })
    };

    let on_touch_end = {
        let pull_distance = pull_distance.clone();
        let is_pulling = is_pulling.clone();
        let on_refresh = props.on_refresh.clone();
        let refreshing = props.refreshing;

        Callback::from(move |_: TouchEvent| {
            is_pulling.set(false);

            if *pull_distance > TRIGGER_PX && !refreshing {
                on_refresh.emit(());
            }

            pull_distance.set(0.0);
        })
    };

    let style = format!(
        "transform: translateY({}px); transition: transform 0.2s;",
        *pull_distance
    );

    html! {
        <div
            class="pull-to-refresh-container"
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
        >
            {if props.refreshing {
                html! {
                    <div class="pull-indicator refreshing">
                        <div class="spinner small"></div>
                        {"Refreshing…"}
                    </div>
                }
            } else if *pull_distance > 0.0 {
                html! {
                    <div class="pull-indicator" style={format!("opacity: {}", (*pull_distance / TRIGGER_PX).min(1.0))}>
                        {if *pull_distance > TRIGGER_PX { "Release to refresh" } else { "Pull to refresh" }}
                    </div>
                }
            } else {
                html! {}
            }}

            <div style={style}>
                {props.children.clone()}
            </div>
        </div>
    }
}
