//! Full shift posting shown on the details screen

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Schedule breakdown for a posting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftSchedule {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub total_hours: f32,
}

impl ShiftSchedule {
    /// Parse a display schedule like "Thu. Dec 16, 8:00 AM - 4:00 PM".
    ///
    /// The last comma separates the date from the time window; total hours
    /// are derived from the window, wrapping past midnight if needed.
    pub fn parse(schedule: &str) -> Option<Self> {
        let (date, window) = schedule.rsplit_once(", ")?;
        let (start, end) = window.split_once(" - ")?;

        let start_time = NaiveTime::parse_from_str(start.trim(), "%I:%M %p").ok()?;
        let end_time = NaiveTime::parse_from_str(end.trim(), "%I:%M %p").ok()?;

        let mut minutes = (end_time - start_time).num_minutes();
        if minutes < 0 {
            minutes += 24 * 60;
        }

        Some(Self {
            date: date.to_string(),
            start_time: start.trim().to_string(),
            end_time: end.trim().to_string(),
            total_hours: minutes as f32 / 60.0,
        })
    }
}

/// Venue with coordinates for the map intent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftLocation {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DressCode {
    pub style: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employer {
    pub name: String,
    pub rating: f32,
    pub total_jobs: u32,
    pub verification_status: String,
    pub contact_email: String,
    pub contact_phone: String,
}

/// Everything the details screen renders for one posting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftDetails {
    pub id: String,
    pub title: String,
    pub rate: String,
    pub schedule: ShiftSchedule,
    pub location: ShiftLocation,
    pub image_uri: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub dress_code: DressCode,
    pub employer: Employer,
    pub application_deadline: String,
    pub vacancies: u32,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_schedule() {
        let schedule = ShiftSchedule::parse("Thu. Dec 16, 8:00 AM - 4:00 PM").unwrap();
        assert_eq!(schedule.date, "Thu. Dec 16");
        assert_eq!(schedule.start_time, "8:00 AM");
        assert_eq!(schedule.end_time, "4:00 PM");
        assert_eq!(schedule.total_hours, 8.0);
    }

    #[test]
    fn test_parse_evening_schedule() {
        let schedule = ShiftSchedule::parse("Fri. Dec 17, 5:00 PM - 11:00 PM").unwrap();
        assert_eq!(schedule.total_hours, 6.0);
    }

    #[test]
    fn test_parse_overnight_schedule_wraps() {
        let schedule = ShiftSchedule::parse("Sat. Dec 18, 10:00 PM - 2:00 AM").unwrap();
        assert_eq!(schedule.total_hours, 4.0);
    }

    #[test]
    fn test_parse_half_hour_schedule() {
        let schedule = ShiftSchedule::parse("Mon. Dec 20, 9:00 AM - 12:30 PM").unwrap();
        assert_eq!(schedule.total_hours, 3.5);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(ShiftSchedule::parse("no comma here").is_none());
        assert!(ShiftSchedule::parse("Thu. Dec 16, 8:00 AM").is_none());
        assert!(ShiftSchedule::parse("Thu. Dec 16, eight - nine").is_none());
    }
}
