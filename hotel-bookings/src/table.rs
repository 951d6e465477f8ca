//! In-memory booking tables
//!
//! `RawTable` holds the dataset exactly as loaded (after column name
//! normalization). `BookingTable` holds cleaned records and is never mutated
//! once built; filtering produces a new table.

use crate::types::{BookingRecord, Hotel, RawBooking};
use serde::Serialize;
use std::collections::HashMap;

/// The dataset as loaded from disk
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Normalized column names, in file order
    pub columns: Vec<String>,
    /// One entry per data row
    pub records: Vec<RawBooking>,
    /// Null count per column, aligned with `columns`
    pub null_counts: Vec<usize>,
}

/// Null statistics for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NullSummary {
    pub column: String,
    pub null_values: usize,
    /// Share of rows that are null, in percent
    pub percentage: f64,
}

/// Shape and null overview of a loaded dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    pub rows: usize,
    pub columns: usize,
    /// Columns with the most nulls, descending
    pub null_values: Vec<NullSummary>,
}

impl RawTable {
    /// Number of rows and columns
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.columns.len())
    }

    /// Per-column null counts, sorted by percentage descending
    ///
    /// Ties keep file column order.
    pub fn null_summary(&self) -> Vec<NullSummary> {
        let rows = self.records.len();
        let mut summary: Vec<NullSummary> = self
            .columns
            .iter()
            .zip(self.null_counts.iter())
            .map(|(column, &nulls)| NullSummary {
                column: column.clone(),
                null_values: nulls,
                percentage: if rows == 0 {
                    0.0
                } else {
                    nulls as f64 / rows as f64 * 100.0
                },
            })
            .collect();

        summary.sort_by(|a, b| b.null_values.cmp(&a.null_values));
        summary
    }

    /// Shape plus the `limit` columns with the most nulls
    pub fn overview(&self, limit: usize) -> DatasetOverview {
        let (rows, columns) = self.shape();
        let mut null_values = self.null_summary();
        null_values.truncate(limit);

        DatasetOverview {
            rows,
            columns,
            null_values,
        }
    }

    /// Mean of the non-null `children` values
    pub fn children_mean(&self) -> Option<f64> {
        let values: Vec<f64> = self.records.iter().filter_map(|r| r.children).collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Most frequent non-null country
    ///
    /// Ties resolve to the lexicographically smallest code, so the result is
    /// deterministic.
    pub fn country_mode(&self) -> Option<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for country in self.records.iter().filter_map(|r| r.country.as_deref()) {
            *counts.entry(country).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(country, _)| country.to_string())
    }
}

/// Cleaned, immutable booking table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingTable {
    records: Vec<BookingRecord>,
}

/// Table statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub bookings: usize,
    pub canceled: usize,
    pub city_hotel: usize,
    pub resort_hotel: usize,
}

impl BookingTable {
    /// Build a table from cleaned records
    pub fn from_records(records: Vec<BookingRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookingRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// New table holding the records that match `predicate`
    pub fn filter<F>(&self, predicate: F) -> BookingTable
    where
        F: Fn(&BookingRecord) -> bool,
    {
        BookingTable {
            records: self.records.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }

    pub fn canceled(&self) -> BookingTable {
        self.filter(|r| r.is_canceled)
    }

    pub fn non_canceled(&self) -> BookingTable {
        self.filter(|r| !r.is_canceled)
    }

    pub fn for_hotel(&self, hotel: Hotel) -> BookingTable {
        self.filter(|r| r.hotel == hotel)
    }

    /// Get table statistics
    pub fn stats(&self) -> TableStats {
        TableStats {
            bookings: self.records.len(),
            canceled: self.records.iter().filter(|r| r.is_canceled).count(),
            city_hotel: self.records.iter().filter(|r| r.hotel == Hotel::City).count(),
            resort_hotel: self.records.iter().filter(|r| r.hotel == Hotel::Resort).count(),
        }
    }
}

impl<'a> IntoIterator for &'a BookingTable {
    type Item = &'a BookingRecord;
    type IntoIter = std::slice::Iter<'a, BookingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Record builders shared by unit tests across the crate

    use crate::types::{BookingRecord, Hotel, Month, RawBooking};

    pub fn booking(hotel: Hotel, adults: u32, children: u32, babies: u32) -> BookingRecord {
        BookingRecord {
            hotel,
            is_canceled: false,
            lead_time: 30,
            arrival_date_year: 2016,
            arrival_date_month: Month::July,
            stays_in_weekend_nights: 1,
            stays_in_week_nights: 2,
            adults,
            children,
            babies,
            country: "PRT".to_string(),
            market_segment: "Online TA".to_string(),
            is_repeated_guest: false,
            reserved_room_type: "A".to_string(),
            agent: 9,
            company: 0,
            adr: 100.0,
        }
    }

    pub fn raw_booking(adults: u32, children: Option<f64>, babies: u32) -> RawBooking {
        RawBooking {
            hotel: Hotel::City,
            is_canceled: false,
            lead_time: 30,
            arrival_date_year: 2016,
            arrival_date_month: Month::July,
            stays_in_weekend_nights: 1,
            stays_in_week_nights: 2,
            adults,
            children,
            babies,
            country: Some("PRT".to_string()),
            market_segment: "Online TA".to_string(),
            is_repeated_guest: false,
            reserved_room_type: "A".to_string(),
            agent: None,
            company: None,
            adr: 100.0,
        }
    }
}
