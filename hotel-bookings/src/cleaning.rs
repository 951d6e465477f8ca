//! Cleaning pass
//!
//! Turns a `RawTable` into a `BookingTable`:
//! 1. missing `agent` / `company` become 0
//! 2. missing `children` become the dataset-wide mean, rounded half-to-even
//! 3. missing `country` becomes the dataset-wide mode
//! 4. `children`, `agent`, `company` are cast to integers (truncating)
//! 5. bookings with no adults, children or babies are dropped
//!
//! Fill values are computed from the raw table before any row is dropped.

use crate::table::{BookingTable, RawTable};
use crate::types::{AnalysisError, BookingRecord, RawBooking, Result};
use serde::Serialize;

/// Country used when every country value is missing
pub const UNKNOWN_COUNTRY: &str = "UNKNOWN";

/// Values substituted for missing fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillValues {
    pub agent: i64,
    pub company: i64,
    pub children: u32,
    pub country: String,
}

impl FillValues {
    /// Derive fill values from the raw (pre-filter) table
    pub fn from_raw(raw: &RawTable) -> Self {
        let children = raw
            .children_mean()
            .map(|mean| mean.round_ties_even() as u32)
            .unwrap_or(0);

        let country = raw.country_mode().unwrap_or_else(|| {
            log::warn!("Every country value is missing, filling with {}", UNKNOWN_COUNTRY);
            UNKNOWN_COUNTRY.to_string()
        });

        Self {
            agent: 0,
            company: 0,
            children,
            country,
        }
    }
}

/// What the cleaning pass changed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningSummary {
    pub rows_loaded: usize,
    pub rows_without_guests: usize,
    pub rows_retained: usize,
    pub fill_values: FillValues,
    pub agents_filled: usize,
    pub companies_filled: usize,
    pub children_filled: usize,
    pub countries_filled: usize,
}

/// Run the full cleaning pass over a raw table
///
/// The raw table is left untouched. Fails with `EmptyDataset` when no
/// booking survives.
pub fn clean(raw: &RawTable) -> Result<(BookingTable, CleaningSummary)> {
    let fill = FillValues::from_raw(raw);
    log::debug!(
        "Fill values: children={}, country={}",
        fill.children,
        fill.country
    );

    let mut summary = CleaningSummary {
        rows_loaded: raw.records.len(),
        rows_without_guests: 0,
        rows_retained: 0,
        fill_values: fill.clone(),
        agents_filled: 0,
        companies_filled: 0,
        children_filled: 0,
        countries_filled: 0,
    };

    let mut records = Vec::with_capacity(raw.records.len());
    for raw_booking in &raw.records {
        summary.agents_filled += raw_booking.agent.is_none() as usize;
        summary.companies_filled += raw_booking.company.is_none() as usize;
        summary.children_filled += raw_booking.children.is_none() as usize;
        summary.countries_filled += raw_booking.country.is_none() as usize;

        let children = raw_booking.children.unwrap_or(fill.children as f64);
        let record = cast_record(raw_booking, children, &fill);
        // Occupancy is judged on the truncated counts
        if record.total_guests() == 0 {
            summary.rows_without_guests += 1;
            continue;
        }

        records.push(record);
    }

    summary.rows_retained = records.len();
    if summary.rows_without_guests > 0 {
        log::info!(
            "Dropped {} bookings with no adults, children or babies",
            summary.rows_without_guests
        );
    }

    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    Ok((BookingTable::from_records(records), summary))
}

/// Fill the remaining nullable fields and cast to the cleaned record type
fn cast_record(raw: &RawBooking, children: f64, fill: &FillValues) -> BookingRecord {
    BookingRecord {
        hotel: raw.hotel,
        is_canceled: raw.is_canceled,
        lead_time: raw.lead_time,
        arrival_date_year: raw.arrival_date_year,
        arrival_date_month: raw.arrival_date_month,
        stays_in_weekend_nights: raw.stays_in_weekend_nights,
        stays_in_week_nights: raw.stays_in_week_nights,
        adults: raw.adults,
        children: children.trunc() as u32,
        babies: raw.babies,
        country: raw.country.clone().unwrap_or_else(|| fill.country.clone()),
        market_segment: raw.market_segment.clone(),
        is_repeated_guest: raw.is_repeated_guest,
        reserved_room_type: raw.reserved_room_type.clone(),
        agent: raw.agent.map(|a| a.trunc() as i64).unwrap_or(fill.agent),
        company: raw.company.map(|c| c.trunc() as i64).unwrap_or(fill.company),
        adr: raw.adr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures::raw_booking;

    fn raw_table(records: Vec<RawBooking>) -> RawTable {
        RawTable {
            columns: vec!["children".to_string(), "country".to_string()],
            null_counts: vec![0, 0],
            records,
        }
    }

    #[test]
    fn test_zero_occupant_bookings_are_dropped() {
        let raw = raw_table(vec![
            raw_booking(2, Some(0.0), 0),
            raw_booking(0, Some(0.0), 0),
            raw_booking(0, Some(0.0), 1),
        ]);

        let (table, summary) = clean(&raw).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(summary.rows_loaded, 3);
        assert_eq!(summary.rows_without_guests, 1);
        assert_eq!(summary.rows_retained, 2);
        assert!(table.iter().all(|r| r.total_guests() >= 1));
        // The raw table is not modified
        assert_eq!(raw.records.len(), 3);
    }

    #[test]
    fn test_nullable_columns_are_filled() {
        let mut no_country = raw_booking(1, None, 0);
        no_country.country = None;
        let mut with_agent = raw_booking(2, Some(1.0), 0);
        with_agent.agent = Some(240.0);
        with_agent.company = Some(40.0);

        let raw = raw_table(vec![no_country, with_agent, raw_booking(2, Some(2.0), 0)]);
        let (table, summary) = clean(&raw).unwrap();

        // mean(1, 2) = 1.5 rounds half-to-even to 2
        assert_eq!(summary.fill_values.children, 2);
        assert_eq!(summary.fill_values.country, "PRT");
        assert_eq!(summary.children_filled, 1);
        assert_eq!(summary.countries_filled, 1);
        assert_eq!(summary.agents_filled, 2);
        assert_eq!(summary.companies_filled, 2);

        let records = table.records();
        assert_eq!(records[0].children, 2);
        assert_eq!(records[0].country, "PRT");
        assert_eq!(records[0].agent, 0);
        assert_eq!(records[0].company, 0);
        assert_eq!(records[1].agent, 240);
        assert_eq!(records[1].company, 40);
    }

    #[test]
    fn test_children_fill_rounds_half_to_even() {
        // mean(0, 1) = 0.5 rounds to 0, not 1
        let raw = raw_table(vec![
            raw_booking(2, Some(0.0), 0),
            raw_booking(2, Some(1.0), 0),
            raw_booking(2, None, 0),
        ]);
        let (_, summary) = clean(&raw).unwrap();
        assert_eq!(summary.fill_values.children, 0);
    }

    #[test]
    fn test_filled_children_count_towards_occupancy() {
        // Mean children is 1, so a booking with no adults and missing
        // children still has one occupant after filling.
        let raw = raw_table(vec![raw_booking(2, Some(1.0), 0), raw_booking(0, None, 0)]);
        let (table, summary) = clean(&raw).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(summary.rows_without_guests, 0);
        assert_eq!(table.records()[1].children, 1);
    }

    #[test]
    fn test_fractional_identifiers_truncate() {
        let mut booking = raw_booking(2, Some(1.0), 0);
        booking.agent = Some(9.7);
        let raw = raw_table(vec![booking]);
        let (table, _) = clean(&raw).unwrap();
        assert_eq!(table.records()[0].agent, 9);
    }

    #[test]
    fn test_fractional_children_without_adults_are_dropped() {
        // 0.5 children truncates to 0, leaving nobody on the booking
        let raw = raw_table(vec![raw_booking(2, Some(0.0), 0), raw_booking(0, Some(0.5), 0)]);
        let (table, summary) = clean(&raw).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(summary.rows_without_guests, 1);
        assert!(table.iter().all(|r| r.total_guests() >= 1));
    }

    #[test]
    fn test_huge_occupant_counts_do_not_overflow() {
        let raw = raw_table(vec![raw_booking(4_000_000_000, Some(0.0), 400_000_000)]);
        let (table, _) = clean(&raw).unwrap();
        let record = &table.records()[0];
        assert_eq!(record.total_guests(), 4_400_000_000);
        assert_eq!(record.guest_category(), crate::types::GuestCategory::FamilyOrFriends);
    }

    #[test]
    fn test_all_rows_dropped_is_empty_dataset() {
        let raw = raw_table(vec![raw_booking(0, Some(0.0), 0)]);
        assert!(matches!(clean(&raw), Err(AnalysisError::EmptyDataset)));
    }

    #[test]
    fn test_missing_every_country() {
        let mut booking = raw_booking(2, Some(0.0), 0);
        booking.country = None;
        let raw = raw_table(vec![booking]);
        let (table, _) = clean(&raw).unwrap();
        assert_eq!(table.records()[0].country, UNKNOWN_COUNTRY);
    }
}
