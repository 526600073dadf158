//! Common types and utilities shared across the Banquetly mobile crates

pub mod details;
pub mod format;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Named partition of shifts shown under one tab
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ShiftCategory {
    NewShifts,
    Upcoming,
    OnCall,
    Past,
}

impl ShiftCategory {
    /// Label rendered on the tab trigger
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewShifts => "Posted Shifts",
            Self::Upcoming => "Upcoming",
            Self::OnCall => "On-Call",
            Self::Past => "Past",
        }
    }
}

impl std::fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewShifts => write!(f, "newShifts"),
            Self::Upcoming => write!(f, "upcoming"),
            Self::OnCall => write!(f, "onCall"),
            Self::Past => write!(f, "past"),
        }
    }
}

/// A single scheduled work opportunity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub title: String,
    /// Hourly rate display string, e.g. "$20.0/hr"
    pub rate: String,
    /// Human-readable schedule, e.g. "Thu. Dec 16, 8:00 AM - 4:00 PM"
    pub schedule: String,
    pub location: String,
    pub image_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clocked_in: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clocked_out: Option<NaiveDateTime>,
}

/// Ordered mapping from category to its shifts.
///
/// Category order is tab order; shift order within a category is display
/// order. Neither carries further meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShiftBoard {
    categories: Vec<(ShiftCategory, Vec<Shift>)>,
}

impl ShiftBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category; replaces the shifts if the category already exists
    pub fn with_category(mut self, category: ShiftCategory, shifts: Vec<Shift>) -> Self {
        if let Some(entry) = self.categories.iter_mut().find(|(c, _)| *c == category) {
            entry.1 = shifts;
        } else {
            self.categories.push((category, shifts));
        }
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = ShiftCategory> + '_ {
        self.categories.iter().map(|(c, _)| *c)
    }

    pub fn contains(&self, category: ShiftCategory) -> bool {
        self.categories.iter().any(|(c, _)| *c == category)
    }

    /// Shifts under a category, empty for an absent category
    pub fn shifts_in(&self, category: ShiftCategory) -> &[Shift] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, shifts)| shifts.as_slice())
            .unwrap_or(&[])
    }

    pub fn first_category(&self) -> Option<ShiftCategory> {
        self.categories.first().map(|(c, _)| *c)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a shift by id across all categories
    pub fn find_shift(&self, id: &str) -> Option<&Shift> {
        self.categories
            .iter()
            .flat_map(|(_, shifts)| shifts.iter())
            .find(|shift| shift.id == id)
    }
}

/// Worker profile shown on the account page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub shifts_worked: u32,
    pub rating: f32,
}

impl UserProfile {
    /// First letter of the name, for the avatar placeholder
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// App error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Shift not found: {0}")]
    ShiftNotFound(String),

    #[error("Refresh failed: {0}")]
    RefreshFailed(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(id: &str, title: &str) -> Shift {
        Shift {
            id: id.to_string(),
            title: title.to_string(),
            rate: "$20.0/hr".to_string(),
            schedule: "Thu. Dec 16, 8:00 AM - 4:00 PM".to_string(),
            location: "Infinity Convention Centre".to_string(),
            image_uri: "https://example.com/shift.jpeg".to_string(),
            clocked_in: None,
            clocked_out: None,
        }
    }

    #[test]
    fn test_shift_serialization() {
        let original = shift("1", "Wait Staff");
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"imageUri\""));
        assert!(!json.contains("clockedIn"));

        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, original);
    }

    #[test]
    fn test_category_keys() {
        let json = serde_json::to_string(&ShiftCategory::OnCall).unwrap();
        assert_eq!(json, "\"onCall\"");
        let json = serde_json::to_string(&ShiftCategory::NewShifts).unwrap();
        assert_eq!(json, "\"newShifts\"");
    }

    #[test]
    fn test_board_preserves_category_order() {
        let board = ShiftBoard::new()
            .with_category(ShiftCategory::Upcoming, vec![shift("1", "Wait Staff")])
            .with_category(ShiftCategory::OnCall, vec![])
            .with_category(ShiftCategory::Past, vec![shift("4", "Chef Assistant")]);

        let order: Vec<ShiftCategory> = board.categories().collect();
        assert_eq!(
            order,
            vec![
                ShiftCategory::Upcoming,
                ShiftCategory::OnCall,
                ShiftCategory::Past,
            ]
        );
        assert_eq!(board.first_category(), Some(ShiftCategory::Upcoming));
    }

    #[test]
    fn test_board_preserves_shift_order() {
        let board = ShiftBoard::new().with_category(
            ShiftCategory::Upcoming,
            vec![shift("1", "Wait Staff"), shift("2", "Bartender")],
        );

        let shifts = board.shifts_in(ShiftCategory::Upcoming);
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].id, "1");
        assert_eq!(shifts[1].id, "2");
    }

    #[test]
    fn test_board_absent_category_is_empty() {
        let board =
            ShiftBoard::new().with_category(ShiftCategory::Upcoming, vec![shift("1", "Wait Staff")]);

        assert!(!board.contains(ShiftCategory::Past));
        assert!(board.shifts_in(ShiftCategory::Past).is_empty());
    }

    #[test]
    fn test_board_replaces_existing_category() {
        let board = ShiftBoard::new()
            .with_category(ShiftCategory::Upcoming, vec![shift("1", "Wait Staff")])
            .with_category(ShiftCategory::Upcoming, vec![shift("2", "Bartender")]);

        assert_eq!(board.categories().count(), 1);
        assert_eq!(board.shifts_in(ShiftCategory::Upcoming)[0].id, "2");
    }

    #[test]
    fn test_find_shift_across_categories() {
        let board = ShiftBoard::new()
            .with_category(ShiftCategory::Upcoming, vec![shift("1", "Wait Staff")])
            .with_category(ShiftCategory::Past, vec![shift("4", "Chef Assistant")]);

        assert_eq!(board.find_shift("4").unwrap().title, "Chef Assistant");
        assert!(board.find_shift("99").is_none());
    }

    #[test]
    fn test_profile_initial() {
        let user = UserProfile {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            role: "Server".to_string(),
            shifts_worked: 12,
            rating: 4.8,
        };
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::ShiftNotFound("42".to_string()).to_string(),
            "Shift not found: 42"
        );
        assert_eq!(
            Error::NotImplemented("shift application").to_string(),
            "Not implemented: shift application"
        );
    }
}
