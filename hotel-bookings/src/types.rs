//! Core types for the hotel bookings analysis library
//!
//! This module defines the booking records produced by the loader and the
//! cleaner, the categorical values they carry, and the library error type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while loading, cleaning or charting the dataset
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Failed to read dataset: {0}")]
    ReadError(String),

    #[error("Missing expected column: {0}")]
    MissingColumn(String),

    #[error("Invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        /// 1-based data row (header excluded)
        row: usize,
        column: String,
        value: String,
    },

    #[error("Dataset contains no bookings")]
    EmptyDataset,

    #[error("Chart rendering failed: {0}")]
    ChartError(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Hotel type of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hotel {
    #[serde(rename = "City Hotel")]
    City,
    #[serde(rename = "Resort Hotel")]
    Resort,
}

impl Hotel {
    /// Both hotel types, in display order
    pub const ALL: [Hotel; 2] = [Hotel::City, Hotel::Resort];

    /// Label as it appears in the dataset
    pub fn label(&self) -> &'static str {
        match self {
            Hotel::City => "City Hotel",
            Hotel::Resort => "Resort Hotel",
        }
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Hotel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "City Hotel" => Ok(Hotel::City),
            "Resort Hotel" => Ok(Hotel::Resort),
            other => Err(format!("unknown hotel type: {}", other)),
        }
    }
}

/// Arrival month, ordered by calendar position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month for a 1-based calendar number
    pub fn from_number(number: u32) -> Option<Month> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize))
            .copied()
    }

    /// 1-based calendar number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Zero-based position in the calendar sequence
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Full English month name
    pub fn name(&self) -> &'static str {
        self.as_chrono().name()
    }

    fn as_chrono(&self) -> chrono::Month {
        match self {
            Month::January => chrono::Month::January,
            Month::February => chrono::Month::February,
            Month::March => chrono::Month::March,
            Month::April => chrono::Month::April,
            Month::May => chrono::Month::May,
            Month::June => chrono::Month::June,
            Month::July => chrono::Month::July,
            Month::August => chrono::Month::August,
            Month::September => chrono::Month::September,
            Month::October => chrono::Month::October,
            Month::November => chrono::Month::November,
            Month::December => chrono::Month::December,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // chrono accepts full and three-letter names, case-insensitively
        let month = s
            .trim()
            .parse::<chrono::Month>()
            .map_err(|_| format!("unknown month: {}", s.trim()))?;
        Month::from_number(month.number_from_month())
            .ok_or_else(|| format!("unknown month: {}", s.trim()))
    }
}

/// Guest composition of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GuestCategory {
    /// One adult, no children, no babies
    Single,
    /// Two adults, no children, no babies
    Couple,
    /// More than two occupants in total
    FamilyOrFriends,
    /// Anything else (e.g. one adult travelling with a child)
    Other,
}

impl GuestCategory {
    pub const ALL: [GuestCategory; 4] = [
        GuestCategory::Single,
        GuestCategory::Couple,
        GuestCategory::FamilyOrFriends,
        GuestCategory::Other,
    ];

    /// Classify a booking by its occupants
    pub fn classify(adults: u32, children: u32, babies: u32) -> GuestCategory {
        match (adults, children, babies) {
            (1, 0, 0) => GuestCategory::Single,
            (2, 0, 0) => GuestCategory::Couple,
            _ if adults as u64 + children as u64 + babies as u64 > 2 => {
                GuestCategory::FamilyOrFriends
            }
            _ => GuestCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GuestCategory::Single => "Single",
            GuestCategory::Couple => "Couple (No Children)",
            GuestCategory::FamilyOrFriends => "Family / Friends",
            GuestCategory::Other => "Other",
        }
    }
}

impl fmt::Display for GuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display relabeling of the repeated-guest flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RepeatFlag {
    No,
    Yes,
}

impl From<bool> for RepeatFlag {
    fn from(repeated: bool) -> Self {
        if repeated {
            RepeatFlag::Yes
        } else {
            RepeatFlag::No
        }
    }
}

impl fmt::Display for RepeatFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatFlag::No => write!(f, "No"),
            RepeatFlag::Yes => write!(f, "Yes"),
        }
    }
}

/// A booking row as loaded from the CSV file, before cleaning
///
/// `children`, `country`, `agent` and `company` are nullable in the source
/// data; everything else must be present.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBooking {
    pub hotel: Hotel,
    pub is_canceled: bool,
    pub lead_time: u32,
    pub arrival_date_year: i32,
    pub arrival_date_month: Month,
    pub stays_in_weekend_nights: u32,
    pub stays_in_week_nights: u32,
    pub adults: u32,
    pub children: Option<f64>,
    pub babies: u32,
    pub country: Option<String>,
    pub market_segment: String,
    pub is_repeated_guest: bool,
    pub reserved_room_type: String,
    pub agent: Option<f64>,
    pub company: Option<f64>,
    /// Average daily rate in EUR
    pub adr: f64,
}

/// A cleaned booking: no missing values, integer-typed identifiers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRecord {
    pub hotel: Hotel,
    pub is_canceled: bool,
    pub lead_time: u32,
    pub arrival_date_year: i32,
    pub arrival_date_month: Month,
    pub stays_in_weekend_nights: u32,
    pub stays_in_week_nights: u32,
    pub adults: u32,
    pub children: u32,
    pub babies: u32,
    pub country: String,
    pub market_segment: String,
    pub is_repeated_guest: bool,
    pub reserved_room_type: String,
    pub agent: i64,
    pub company: i64,
    /// Average daily rate in EUR
    pub adr: f64,
}

impl BookingRecord {
    /// Adults, children and babies together
    pub fn total_guests(&self) -> u64 {
        self.adults as u64 + self.children as u64 + self.babies as u64
    }

    /// Guests that pay for the room (babies excluded)
    pub fn paying_guests(&self) -> u64 {
        self.adults as u64 + self.children as u64
    }

    pub fn guest_category(&self) -> GuestCategory {
        GuestCategory::classify(self.adults, self.children, self.babies)
    }

    pub fn repeat_flag(&self) -> RepeatFlag {
        RepeatFlag::from(self.is_repeated_guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_parsing() {
        assert_eq!("January".parse::<Month>().unwrap(), Month::January);
        assert_eq!(" december ".parse::<Month>().unwrap(), Month::December);
        assert_eq!("Mar".parse::<Month>().unwrap(), Month::March);
        assert!("Smarch".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_calendar_order() {
        assert!(Month::January < Month::March);
        assert!(Month::August < Month::December);
        assert_eq!(Month::ALL[0], Month::January);
        assert_eq!(Month::December.number(), 12);
        assert_eq!(Month::from_number(4), Some(Month::April));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
        assert_eq!(Month::September.to_string(), "September");
    }

    #[test]
    fn test_hotel_labels() {
        assert_eq!("City Hotel".parse::<Hotel>().unwrap(), Hotel::City);
        assert_eq!("Resort Hotel".parse::<Hotel>().unwrap(), Hotel::Resort);
        assert!("Motel".parse::<Hotel>().is_err());
        assert_eq!(Hotel::Resort.to_string(), "Resort Hotel");
    }

    #[test]
    fn test_guest_categories() {
        assert_eq!(GuestCategory::classify(1, 0, 0), GuestCategory::Single);
        assert_eq!(GuestCategory::classify(2, 0, 0), GuestCategory::Couple);
        assert_eq!(GuestCategory::classify(2, 1, 0), GuestCategory::FamilyOrFriends);
        assert_eq!(GuestCategory::classify(0, 2, 1), GuestCategory::FamilyOrFriends);
        assert_eq!(
            GuestCategory::classify(u32::MAX, u32::MAX, 1),
            GuestCategory::FamilyOrFriends
        );
        // Two occupants that are not a couple fall outside the named buckets
        assert_eq!(GuestCategory::classify(1, 1, 0), GuestCategory::Other);
        assert_eq!(GuestCategory::classify(1, 0, 1), GuestCategory::Other);
        assert_eq!(GuestCategory::FamilyOrFriends.to_string(), "Family / Friends");
    }

    #[test]
    fn test_repeat_flag() {
        assert_eq!(RepeatFlag::from(false).to_string(), "No");
        assert_eq!(RepeatFlag::from(true).to_string(), "Yes");
    }
}
