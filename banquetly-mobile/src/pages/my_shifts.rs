//! My-shifts screen: upcoming, on-call and past shifts

use banquetly_common::format::clock_time;
use banquetly_common::{Shift, ShiftCategory};
use gloo_console::warn;
use yew::prelude::*;

use crate::api::ShiftApi;
use crate::components::{
    BadgeTone, EmptyState, ErrorBanner, Header, Loading, PullToRefresh, ShiftCard, TabBar,
};
use crate::state::{spawn_refresh, ShiftBoardAction, ShiftBoardState};

#[function_component(MyShifts)]
pub fn my_shifts() -> Html {
    let state = use_reducer(|| ShiftBoardState::new(ShiftCategory::Upcoming));

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_refresh(&state, ShiftApi::fetch_my_shifts_board);
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
        Callback::from(move |_| spawn_refresh(&state, ShiftApi::fetch_my_shifts_board))
    };

    if state.initial_loading() {
        return html! { <Loading message="Loading your shifts..." /> };
    }

    let shifts = state.board.shifts_in(state.active);

    let content = if shifts.is_empty() {
        render_empty(state.active)
    } else {
        shifts
            .iter()
            .map(|shift| render_shift(state.active, shift))
            .collect::<Html>()
    };

    html! {
        <div class="my-shifts-page">
            <Header title="My Shifts" subtitle="Hospitality shifts in Ottawa" />

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

fn render_empty(category: ShiftCategory) -> Html {
    let (title, hint) = match category {
        ShiftCategory::Past => (
            "No past shifts",
            "Your completed shifts will appear here",
        ),
        ShiftCategory::OnCall => (
            "No on-call shifts available",
            "Pull down to refresh or check back later",
        ),
        _ => (
            "No upcoming shifts",
            "Apply to posted shifts to see them here",
        ),
    };
    html! { <EmptyState title={title} hint={hint} /> }
}

fn render_shift(category: ShiftCategory, shift: &Shift) -> Html {
    match category {
        ShiftCategory::OnCall => html! {
            <ShiftCard
                key={shift.id.clone()}
                shift={shift.clone()}
                tone={BadgeTone::OnCall}
                badge_label="On Call"
            />
        },
        ShiftCategory::Past => {
            let footer = html! {
                <div class="punch-times">
                    <span>{format!("Clocked In: {}", clock_time(shift.clocked_in.as_ref()))}</span>
                    <span>{format!("Clocked Out: {}", clock_time(shift.clocked_out.as_ref()))}</span>
                </div>
            };
            html! {
                <ShiftCard
                    key={shift.id.clone()}
                    shift={shift.clone()}
                    tone={BadgeTone::Past}
                    footer={footer}
                />
            }
        }
        _ => {
            let clock_in = {
                let id = shift.id.clone();
                Callback::from(move |e: MouseEvent| {
                    // Keep the tap from also opening the details screen
                    e.stop_propagation();
                    if let Err(err) = ShiftApi::clock_in(&id) {
                        warn!(format!("Clock-in unavailable: {}", err));
                    }
                })
            };
            let footer = html! {
                <div class="card-actions">
                    <button class="mobile-button primary" onclick={clock_in}>
                        {"▣ Clock In Arrival"}
                    </button>
                </div>
            };
            html! {
                <ShiftCard
                    key={shift.id.clone()}
                    shift={shift.clone()}
                    footer={footer}
                />
            }
        }
    }
}
