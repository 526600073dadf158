//! Pill badge for rates and shift status

use yew::prelude::*;

/// Visual tone of the badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Blue, for posted/upcoming rates
    Rate,
    /// Yellow, for on-call shifts
    OnCall,
    /// Green, for completed shifts
    Past,
}

#[derive(Properties, PartialEq)]
pub struct RateBadgeProps {
    pub label: String,
    #[prop_or(BadgeTone::Rate)]
    pub tone: BadgeTone,
}

#[function_component(RateBadge)]
pub fn rate_badge(props: &RateBadgeProps) -> Html {
    let class = match props.tone {
        BadgeTone::Rate => "rate-badge tone-rate",
        BadgeTone::OnCall => "rate-badge tone-on-call",
        BadgeTone::Past => "rate-badge tone-past",
    };

    html! {
        <span class={class}>{&props.label}</span>
    }
}
