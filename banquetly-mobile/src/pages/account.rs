//! Account screen: profile, stats and account menu

use gloo_console::warn;
use yew::prelude::*;

use crate::api::{AccountAction, ShiftApi};
use crate::components::{Card, Header};

#[function_component(Account)]
pub fn account() -> Html {
    let user = ShiftApi::current_user();

    html! {
        <div class="account-page">
            <Header title="Account" />

            <div class="page-content">
                <div class="profile-header">
                    <div class="profile-avatar">{user.initial()}</div>
                    <h2 class="profile-name">{&user.name}</h2>
                    <p class="profile-email">{&user.email}</p>
                </div>

                <div class="profile-stats">
                    <div class="stat-item">
                        <span class="stat-value shifts">{user.shifts_worked}</span>
                        <span class="stat-label">{"Shifts"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-value rating">{format!("{:.1}", user.rating)}</span>
                        <span class="stat-label">{"Rating"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-value role">{&user.role}</span>
                        <span class="stat-label">{"Role"}</span>
                    </div>
                </div>

                <Card title="Account">
                    <MenuItem icon="✏️" action={AccountAction::EditProfile} />
                    <MenuItem icon="👥" action={AccountAction::MyDetails} />
                    <MenuItem icon="💳" action={AccountAction::PaymentMethods} />
                </Card>

                <Card title="App Settings">
                    <MenuItem icon="⚙️" action={AccountAction::Preferences} />
                </Card>

                <MenuItem icon="🚪" action={AccountAction::LogOut} danger={true} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MenuItemProps {
    icon: &'static str,
    action: AccountAction,
    #[prop_or(false)]
    danger: bool,
}

#[function_component(MenuItem)]
fn menu_item(props: &MenuItemProps) -> Html {
    let action = props.action;

    let onclick = Callback::from(move |_| {
        // Every destination is still a stub; surface that instead of
        // silently doing nothing
        if let Err(err) = ShiftApi::perform_account_action(action) {
            warn!(format!("{} unavailable: {}", action.label(), err));
        }
    });

    let class = if props.danger {
        "menu-item danger"
    } else {
        "menu-item"
    };

    html! {
        <button {class} {onclick}>
            <span class="icon">{props.icon}</span>
            <span class="label">{action.label()}</span>
            <span class="chevron">{"›"}</span>
        </button>
    }
}
