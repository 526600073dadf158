//! Shift details screen, parameterized by shift id

use banquetly_common::details::ShiftDetails;
use banquetly_common::format::{map_intent_url, MapPlatform};
use banquetly_common::{Error, Result};
use gloo_console::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ShiftApi;
use crate::components::{Card, EmptyState, Header, Loading, RateBadge};

#[derive(Properties, PartialEq)]
pub struct ShiftDetailsProps {
    pub shift_id: String,
}

/// Fetch lifecycle for one posting
#[derive(Debug, Clone, PartialEq)]
enum DetailsState {
    Loading,
    Ready(ShiftDetails),
    Missing(Error),
}

impl DetailsState {
    fn resolved(outcome: Result<ShiftDetails>) -> Self {
        match outcome {
            Ok(details) => Self::Ready(details),
            Err(err) => Self::Missing(err),
        }
    }
}

#[function_component(ShiftDetailsPage)]
pub fn shift_details_page(props: &ShiftDetailsProps) -> Html {
    let state = use_state(|| DetailsState::Loading);

    // Resolve the id on mount and again whenever the route id changes in
    // place; the reset keeps a stale posting or not-found hint off screen
    {
        let state = state.clone();
        use_effect_with(props.shift_id.clone(), move |id: &String| {
            state.set(DetailsState::Loading);

            let id = id.clone();
            spawn_local(async move {
                let outcome = ShiftApi::fetch_shift_details(&id).await;
                state.set(DetailsState::resolved(outcome));
            });

            || ()
        });
    }

    html! {
        <div class="shift-details-page">
            <Header title="Shift Details" show_back={true} />

            <div class="page-content">
                {match &*state {
                    DetailsState::Loading => html! {
                        <Loading message="Loading shift details..." />
                    },
                    DetailsState::Ready(details) => render_details(details),
                    DetailsState::Missing(err) => html! {
                        <EmptyState
                            title="Shift not found"
                            hint={err.to_string()}
                        />
                    },
                }}
            </div>
        </div>
    }
}

fn render_details(details: &ShiftDetails) -> Html {
    let apply = {
        let id = details.id.clone();
        Callback::from(move |_| {
            if let Err(err) = ShiftApi::apply_for_shift(&id) {
                warn!(format!("Application unavailable: {}", err));
            }
        })
    };

    let open_maps = {
        let location = details.location.clone();
        Callback::from(move |_| {
            let url = map_intent_url(
                detect_platform(),
                &location.name,
                location.latitude,
                location.longitude,
            );
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        })
    };

    html! {
        <>
            <div class="details-hero">
                <img class="hero-image" src={details.image_uri.clone()} alt={details.title.clone()} />
                <span class="vacancies-badge">{format!("{} Vacancies", details.vacancies)}</span>
            </div>

            <div class="details-header">
                <h2 class="details-title">{&details.title}</h2>
                <RateBadge label={details.rate.clone()} />
            </div>

            <div class="skill-badges">
                {details.skills.iter().map(|skill| html! {
                    <span key={skill.clone()} class="skill-badge">{skill}</span>
                }).collect::<Html>()}
            </div>

            <Card>
                <div class="detail-row">
                    <span class="icon">{"🕐"}</span>
                    <div>
                        <p class="detail-primary">{&details.schedule.date}</p>
                        <p class="detail-secondary">
                            {format!(
                                "{} - {} ({} hrs)",
                                details.schedule.start_time,
                                details.schedule.end_time,
                                details.schedule.total_hours
                            )}
                        </p>
                    </div>
                </div>
            </Card>

            <Card onclick={Some(open_maps)}>
                <div class="detail-row">
                    <span class="icon">{"📍"}</span>
                    <div>
                        <p class="detail-primary">{&details.location.name}</p>
                        <p class="detail-secondary">{&details.location.address}</p>
                    </div>
                </div>
            </Card>

            <section class="details-section">
                <h3>{"Job Description"}</h3>
                <p>{&details.description}</p>
            </section>

            <section class="details-section">
                <h3>{"Dress Code"}</h3>
                <Card>
                    <p class="detail-primary">{&details.dress_code.style}</p>
                    <p class="detail-secondary">{&details.dress_code.details}</p>
                </Card>
            </section>

            <section class="details-section">
                <h3>{"Requirements"}</h3>
                <ul class="detail-list">
                    {details.requirements.iter().map(|req| html! {
                        <li key={req.clone()}>{req}</li>
                    }).collect::<Html>()}
                </ul>
            </section>

            <section class="details-section">
                <h3>{"Benefits"}</h3>
                <ul class="detail-list">
                    {details.benefits.iter().map(|benefit| html! {
                        <li key={benefit.clone()}>{benefit}</li>
                    }).collect::<Html>()}
                </ul>
            </section>

            <section class="details-section">
                <h3>{"Employer"}</h3>
                <Card>
                    <div class="employer-row">
                        <div>
                            <p class="detail-primary">{&details.employer.name}</p>
                            <p class="detail-secondary">{&details.employer.verification_status}</p>
                        </div>
                        <span class="employer-rating">
                            {format!("★ {:.1}", details.employer.rating)}
                        </span>
                    </div>
                </Card>
            </section>

            <button class="mobile-button primary apply-button" onclick={apply}>
                {"Apply for Shift"}
            </button>

            <div class="details-footer">
                <div class="footer-row">
                    <span class="label">{"Shift ID"}</span>
                    <span class="value">{&details.id}</span>
                </div>
                <div class="footer-row">
                    <span class="label">{"Application Deadline"}</span>
                    <span class="value deadline">{&details.application_deadline}</span>
                </div>
            </div>
        </>
    }
}

/// Pick the map scheme from the user agent, defaulting to Android's
fn detect_platform() -> MapPlatform {
    let is_ios = web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| ua.contains("iPhone") || ua.contains("iPad"))
        .unwrap_or(false);

    if is_ios {
        MapPlatform::Ios
    } else {
        MapPlatform::Android
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::lookup_shift_details;

    #[test]
    fn test_resolved_success_is_ready() {
        let details = lookup_shift_details("1").unwrap();
        assert_eq!(
            DetailsState::resolved(Ok(details.clone())),
            DetailsState::Ready(details)
        );
    }

    #[test]
    fn test_resolved_failure_is_missing() {
        let state = DetailsState::resolved(Err(Error::ShiftNotFound("999".to_string())));
        assert_eq!(
            state,
            DetailsState::Missing(Error::ShiftNotFound("999".to_string()))
        );
    }
}
