//! Category switcher rendered above a board

use banquetly_common::ShiftCategory;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub categories: Vec<ShiftCategory>,
    pub active: ShiftCategory,
    pub on_select: Callback<ShiftCategory>,
    /// Per-screen label overrides; categories not listed keep their own label
    #[prop_or_default]
    pub labels: Vec<(ShiftCategory, &'static str)>,
}

/// Label for a tab trigger, honoring any per-screen override
fn tab_label(overrides: &[(ShiftCategory, &'static str)], category: ShiftCategory) -> &'static str {
    overrides
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, label)| *label)
        .unwrap_or_else(|| category.label())
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tab-bar" role="tablist">
            {props.categories.iter().map(|&category| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(category));
                let class = if category == props.active {
                    "tab-trigger active"
                } else {
                    "tab-trigger"
                };

                html! {
                    <button
                        key={category.to_string()}
                        {class}
                        role="tab"
                        aria-selected={(category == props.active).to_string()}
                        {onclick}
                    >
                        {tab_label(&props.labels, category)}
                    </button>
                }
            }).collect::<Html>()}
        </div>
    }
}
