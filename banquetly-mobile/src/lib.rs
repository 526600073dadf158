//! Banquetly Mobile UI
//!
//! Touch-optimized mobile interface built with Yew.
//! Lets hospitality workers browse posted shifts, track their own
//! shifts, and manage their account from a phone.

mod api;
mod components;
mod pages;
mod router;
mod state;

use router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

/// Main mobile application component
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="mobile-app">
                <Switch<Route> render={switch} />
                <BottomNav />
            </div>
        </BrowserRouter>
    }
}

/// Bottom navigation bar for mobile
#[function_component(BottomNav)]
fn bottom_nav() -> Html {
    let navigator = use_navigator().unwrap();

    let go_home = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Home))
    };

    let go_my_shifts = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::MyShifts))
    };

    let go_account = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Account))
    };

    html! {
        <nav class="bottom-nav">
            <button class="nav-item" onclick={go_home}>
                <span class="icon">{"🏠"}</span>
                <span class="label">{"Find Shifts"}</span>
            </button>
            <button class="nav-item" onclick={go_my_shifts}>
                <span class="icon">{"📅"}</span>
                <span class="label">{"My Shifts"}</span>
            </button>
            <button class="nav-item" onclick={go_account}>
                <span class="icon">{"👤"}</span>
                <span class="label">{"Account"}</span>
            </button>
        </nav>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    yew::Renderer::<App>::new().render();
}
