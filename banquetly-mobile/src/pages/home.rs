//! Home screen: board of posted and on-call shifts

use banquetly_common::ShiftCategory;
use yew::prelude::*;

use crate::api::ShiftApi;
use crate::components::{
    BadgeTone, EmptyState, ErrorBanner, Header, Loading, PullToRefresh, ShiftCard, TabBar,
};
use crate::state::{spawn_refresh, ShiftBoardAction, ShiftBoardState};

#[function_component(Home)]
pub fn home() -> Html {
    let state = use_reducer(|| ShiftBoardState::new(ShiftCategory::NewShifts));

    // Initial load goes through the same path as pull-to-refresh
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_refresh(&state, ShiftApi::fetch_posted_board);
            || ()
        });
    }

    let on_select = {
        let state = state.clone();
        Callback::from(move |category| {
            state.dispatch(ShiftBoardAction::SelectCategory(category));
        })
    };

    let on_refresh = {
        let state = state.clone();
        Callback::from(move |_| spawn_refresh(&state, ShiftApi::fetch_posted_board))
    };

    if state.initial_loading() {
        return html! { <Loading message="Loading shifts..." /> };
    }

    let shifts = state.board.shifts_in(state.active);

    let content = if shifts.is_empty() {
        let title = match state.active {
            ShiftCategory::OnCall => "No on-call shifts available",
            _ => "No shifts posted right now",
        };
        html! {
            <EmptyState
                title={title}
                hint="Pull down to refresh or check back later"
            />
        }
    } else {
        shifts
            .iter()
            .map(|shift| {
                if state.active == ShiftCategory::OnCall {
                    html! {
                        <ShiftCard
                            key={shift.id.clone()}
                            shift={shift.clone()}
                            tone={BadgeTone::OnCall}
                            badge_label="On Call"
                        />
                    }
                } else {
                    html! { <ShiftCard key={shift.id.clone()} shift={shift.clone()} /> }
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="home-page">
            <Header title="Banquetly" subtitle="Find hospitality shifts in Ottawa" />

            <div class="page-content">
                {if let Some(ref message) = state.error {
                    html! { <ErrorBanner message={message.clone()} on_retry={on_refresh.clone()} /> }
                } else {
                    html! {}
                }}

                <TabBar
                    categories={state.board.categories().collect::<Vec<_>>()}
                    active={state.active}
                    on_select={on_select}
                    labels={vec![(ShiftCategory::OnCall, "On-Call Shifts")]}
                />

                <PullToRefresh on_refresh={on_refresh} refreshing={state.refreshing}>
                    <div class="board-content">
                        {content}
                    </div>
                </PullToRefresh>
            </div>
        </div>
    }
}
