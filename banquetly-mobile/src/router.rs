//! Router configuration for mobile UI

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::*;

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/my-shifts")]
    MyShifts,
    #[at("/account")]
    Account,
    #[at("/shift-details/:id")]
    ShiftDetails { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function to render pages
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <home::Home /> },
        Route::MyShifts => html! { <my_shifts::MyShifts /> },
        Route::Account => html! { <account::Account /> },
        Route::ShiftDetails { id } => html! { <shift_details::ShiftDetailsPage shift_id={id} /> },
        Route::NotFound => html! { <h1>{"404 - Page Not Found"}</h1> },
    }
}
