//! Shift summary card shared by the board screens

use banquetly_common::Shift;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{BadgeTone, Card, RateBadge};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct ShiftCardProps {
    pub shift: Shift,
    #[prop_or(BadgeTone::Rate)]
    pub tone: BadgeTone,
    /// Badge text override, defaults to the hourly rate
    #[prop_or_default]
    pub badge_label: Option<String>,
    /// Extra row under the card body, e.g. clock-in button or punch times
    #[prop_or_default]
    pub footer: Html,
}

#[function_component(ShiftCard)]
pub fn shift_card(props: &ShiftCardProps) -> Html {
    let navigator = use_navigator().unwrap();
    let shift = &props.shift;

    let onclick = {
        let navigator = navigator.clone();
        let id = shift.id.clone();
        Callback::from(move |_| {
            navigator.push(&Route::ShiftDetails { id: id.clone() });
        })
    };

    let badge_label = props
        .badge_label
        .clone()
        .unwrap_or_else(|| shift.rate.clone());

    html! {
        <Card onclick={Some(onclick)} footer={props.footer.clone()}>
            <div class="shift-card">
                <img class="shift-image" src={shift.image_uri.clone()} alt={shift.title.clone()} />
                <div class="shift-body">
                    <div class="shift-header">
                        <h3 class="shift-title">{&shift.title}</h3>
                        <RateBadge label={badge_label} tone={props.tone} />
                    </div>
                    <p class="shift-schedule">{&shift.schedule}</p>
                    <p class="shift-location">{format!("📍 {}", shift.location)}</p>
                </div>
            </div>
        </Card>
    }
}
