//! Data source for the Banquetly app
//!
//! Stands in for the backend: compiled-in sample data behind the async
//! surface a real client would expose. Board fetches resolve after a
//! simulated network delay so pull-to-refresh behaves like production.

use banquetly_common::details::{
    DressCode, Employer, ShiftDetails, ShiftLocation, ShiftSchedule,
};
use banquetly_common::{Error, Result, Shift, ShiftBoard, ShiftCategory, UserProfile};
use chrono::NaiveDateTime;
use gloo_timers::future::TimeoutFuture;

/// Simulated backend latency for board fetches
const FETCH_LATENCY_MS: u32 = 1_500;

/// Account menu capabilities, none of which are wired up yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    EditProfile,
    MyDetails,
    PaymentMethods,
    Preferences,
    LogOut,
}

impl AccountAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EditProfile => "Edit Profile",
            Self::MyDetails => "My Details",
            Self::PaymentMethods => "Payment Methods",
            Self::Preferences => "Preferences",
            Self::LogOut => "Log Out",
        }
    }
}

/// Client for shift data and actions
pub struct ShiftApi;

impl ShiftApi {
    /// Board for the home screen: posted shifts plus the on-call pool
    pub async fn fetch_posted_board() -> Result<ShiftBoard> {
        TimeoutFuture::new(FETCH_LATENCY_MS).await;
        Ok(sample_posted_board())
    }

    /// Board for the my-shifts screen: upcoming, on-call and past shifts
    pub async fn fetch_my_shifts_board() -> Result<ShiftBoard> {
        TimeoutFuture::new(FETCH_LATENCY_MS).await;
        Ok(sample_my_shifts_board())
    }

    /// Full posting for one shift id
    pub async fn fetch_shift_details(id: &str) -> Result<ShiftDetails> {
        TimeoutFuture::new(FETCH_LATENCY_MS / 3).await;
        lookup_shift_details(id)
    }

    pub fn current_user() -> UserProfile {
        UserProfile {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            role: "Server".to_string(),
            shifts_worked: 12,
            rating: 4.8,
        }
    }

    /// Shift application is not built yet
    pub fn apply_for_shift(_id: &str) -> Result<()> {
        Err(Error::NotImplemented("shift application"))
    }

    /// QR clock-in flow is not built yet
    pub fn clock_in(_id: &str) -> Result<()> {
        Err(Error::NotImplemented("QR clock-in scanner"))
    }

    /// Account menu destinations are not built yet
    pub fn perform_account_action(action: AccountAction) -> Result<()> {
        let _ = action;
        Err(Error::NotImplemented("account management"))
    }
}

fn shift(id: &str, title: &str, rate: &str, schedule: &str, location: &str, image: &str) -> Shift {
    Shift {
        id: id.to_string(),
        title: title.to_string(),
        rate: rate.to_string(),
        schedule: schedule.to_string(),
        location: location.to_string(),
        image_uri: image.to_string(),
        clocked_in: None,
        clocked_out: None,
    }
}

fn timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Sample board behind the home screen
pub fn sample_posted_board() -> ShiftBoard {
    let posted = vec![
        shift(
            "1",
            "Wait Staff",
            "$20.0/hr",
            "Thu. Dec 16, 8:00 AM - 4:00 PM",
            "Infinity Convention Centre",
            "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg",
        ),
        shift(
            "2",
            "Bartender",
            "$25.0/hr",
            "Fri. Dec 17, 5:00 PM - 11:00 PM",
            "Ottawa Conference Center",
            "https://images.pexels.com/photos/593321/pexels-photo-593321.jpeg",
        ),
        shift(
            "3",
            "Chef Assistant",
            "$18.5/hr",
            "Sat. Dec 18, 9:00 AM - 3:00 PM",
            "The Westin Ottawa",
            "https://images.pexels.com/photos/531880/pexels-photo-531880.jpeg",
        ),
        shift(
            "4",
            "Event Coordinator",
            "$22.0/hr",
            "Sun. Dec 19, 12:00 PM - 8:00 PM",
            "Hilton Garden Inn",
            "https://images.pexels.com/photos/374147/pexels-photo-374147.jpeg",
        ),
        shift(
            "5",
            "Dishwasher",
            "$17.0/hr",
            "Mon. Dec 20, 6:00 PM - 11:00 PM",
            "Rideau Canal Pavilion",
            "https://images.pexels.com/photos/221357/pexels-photo-221357.jpeg",
        ),
        shift(
            "6",
            "Event Security",
            "$21.0/hr",
            "Tue. Dec 21, 4:00 PM - 10:00 PM",
            "Shaw Centre",
            "https://images.pexels.com/photos/221357/pexels-photo-221357.jpeg",
        ),
        shift(
            "7",
            "Catering Staff",
            "$19.0/hr",
            "Wed. Dec 22, 10:00 AM - 4:00 PM",
            "Ottawa Art Gallery",
            "https://images.pexels.com/photos/221357/pexels-photo-221357.jpeg",
        ),
    ];

    ShiftBoard::new()
        .with_category(ShiftCategory::NewShifts, posted)
        .with_category(ShiftCategory::OnCall, vec![])
}

/// Sample board behind the my-shifts screen
pub fn sample_my_shifts_board() -> ShiftBoard {
    let upcoming = vec![
        shift(
            "1",
            "Wait Staff",
            "$20.0/hr",
            "Thu. Dec 16, 8:00 AM - 4:00 PM",
            "Infinity Convention Centre",
            "https://images.pexels.com/photos/106399/pexels-photo-106399.jpeg",
        ),
        shift(
            "2",
            "Bartender",
            "$25.0/hr",
            "Fri. Dec 17, 5:00 PM - 11:00 PM",
            "Ottawa Conference Center",
            "https://images.pexels.com/photos/593321/pexels-photo-593321.jpeg",
        ),
    ];

    let on_call = vec![shift(
        "6",
        "Event Security",
        "$21.0/hr",
        "Tue. Dec 21, 4:00 PM - 10:00 PM",
        "Shaw Centre",
        "https://images.pexels.com/photos/221357/pexels-photo-221357.jpeg",
    )];

    let mut chef = shift(
        "3",
        "Chef Assistant",
        "$18.5/hr",
        "Sat. Dec 18, 9:00 AM - 3:00 PM",
        "The Westin Ottawa",
        "https://images.pexels.com/photos/531880/pexels-photo-531880.jpeg",
    );
    chef.clocked_in = timestamp("2023-12-18T09:05:23");
    chef.clocked_out = timestamp("2023-12-18T15:02:45");

    ShiftBoard::new()
        .with_category(ShiftCategory::Upcoming, upcoming)
        .with_category(ShiftCategory::OnCall, on_call)
        .with_category(ShiftCategory::Past, vec![chef])
}

/// Resolve a shift id to its full posting.
///
/// Looks the id up across both sample boards; unknown ids are a real
/// error so the details screen can render a not-found state.
pub fn lookup_shift_details(id: &str) -> Result<ShiftDetails> {
    let posted = sample_posted_board();
    let mine = sample_my_shifts_board();
    let shift = posted
        .find_shift(id)
        .or_else(|| mine.find_shift(id))
        .ok_or_else(|| Error::ShiftNotFound(id.to_string()))?;

    Ok(details_for(shift))
}

fn details_for(shift: &Shift) -> ShiftDetails {
    let schedule = ShiftSchedule::parse(&shift.schedule).unwrap_or(ShiftSchedule {
        date: shift.schedule.clone(),
        start_time: String::new(),
        end_time: String::new(),
        total_hours: 0.0,
    });

    ShiftDetails {
        id: shift.id.clone(),
        title: shift.title.clone(),
        rate: shift.rate.clone(),
        schedule,
        location: ShiftLocation {
            name: shift.location.clone(),
            address: "123 Convention Way, Ottawa, ON K1P 5N9".to_string(),
            latitude: 45.4215,
            longitude: -75.6972,
        },
        image_uri: shift.image_uri.clone(),
        description: "We are seeking experienced hospitality staff for a high-profile \
            corporate event. The engagement requires professional, attentive staff \
            providing exceptional service to corporate executives and industry leaders."
            .to_string(),
        requirements: vec![
            "Minimum 2 years of fine dining or high-end catering experience".to_string(),
            "Ability to stand for extended periods (6-8 hours)".to_string(),
            "Excellent communication and interpersonal skills".to_string(),
            "Professional appearance and demeanor".to_string(),
            "Basic understanding of fine dining service protocols".to_string(),
        ],
        benefits: vec![
            "Competitive hourly rate".to_string(),
            "Potential for future recurring work".to_string(),
            "Professional networking opportunity".to_string(),
            "Meal provided during shift".to_string(),
        ],
        dress_code: DressCode {
            style: "Business Professional".to_string(),
            details: "Black dress pants, white button-up shirt, black dress shoes. \
                Company-provided black apron will be supplied."
                .to_string(),
        },
        employer: Employer {
            name: "Banquetly Events".to_string(),
            rating: 4.8,
            total_jobs: 150,
            verification_status: "Verified Employer".to_string(),
            contact_email: "staffing@banquetlyevents.com".to_string(),
            contact_phone: "+1 (613) 555-0123".to_string(),
        },
        application_deadline: "Dec 14, 2023".to_string(),
        vacancies: 12,
        skills: vec![
            "Customer Service".to_string(),
            "Food Service".to_string(),
            "Event Staffing".to_string(),
            "Hospitality".to_string(),
        ],
    }
}
