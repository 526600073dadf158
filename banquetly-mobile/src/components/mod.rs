//! Reusable mobile UI components

pub mod card;
pub mod empty_state;
pub mod error_banner;
pub mod header;
pub mod loading;
pub mod pull_to_refresh;
pub mod rate_badge;
pub mod shift_card;
pub mod tab_bar;

pub use card::Card;
pub use empty_state::EmptyState;
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use loading::Loading;
pub use pull_to_refresh::PullToRefresh;
pub use rate_badge::{BadgeTone, RateBadge};
pub use shift_card::ShiftCard;
pub use tab_bar::TabBar;
