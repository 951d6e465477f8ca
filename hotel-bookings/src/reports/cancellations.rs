//! Cancellation counts and rates

use crate::table::BookingTable;
use crate::types::{Hotel, Month, RepeatFlag};
use serde::Serialize;
use std::collections::BTreeMap;

/// Canceled and kept bookings of one hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HotelCancellations {
    pub hotel: Hotel,
    pub canceled: usize,
    pub not_canceled: usize,
}

impl HotelCancellations {
    pub fn total(&self) -> usize {
        self.canceled + self.not_canceled
    }

    /// Share of canceled bookings in percent, rounded half-to-even to two decimals
    pub fn cancellation_percentage(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        round2(self.canceled as f64 / self.total() as f64 * 100.0)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Canceled vs. non-canceled counts for every hotel present in the table
pub fn cancellations_by_hotel(table: &BookingTable) -> Vec<HotelCancellations> {
    Hotel::ALL
        .into_iter()
        .map(|hotel| {
            let bookings = table.iter().filter(|r| r.hotel == hotel);
            let (canceled, not_canceled) =
                bookings.fold((0, 0), |(c, n), r| if r.is_canceled { (c + 1, n) } else { (c, n + 1) });
            HotelCancellations {
                hotel,
                canceled,
                not_canceled,
            }
        })
        .filter(|h| h.total() > 0)
        .collect()
}

/// Cancellation percentage of one hotel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CancellationRate {
    pub hotel: Hotel,
    pub percentage: f64,
}

pub fn cancellation_percentages(table: &BookingTable) -> Vec<CancellationRate> {
    cancellations_by_hotel(table)
        .into_iter()
        .map(|h| CancellationRate {
            hotel: h.hotel,
            percentage: h.cancellation_percentage(),
        })
        .collect()
}

/// Canceled bookings in one arrival month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCancellations {
    pub month: Month,
    pub canceled: usize,
}

/// Canceled bookings per arrival month, all twelve months in calendar order
pub fn cancellations_by_month(table: &BookingTable) -> Vec<MonthCancellations> {
    let mut counts = [0usize; 12];
    for record in table.iter().filter(|r| r.is_canceled) {
        counts[record.arrival_date_month.index()] += 1;
    }

    Month::ALL
        .into_iter()
        .map(|month| MonthCancellations {
            month,
            canceled: counts[month.index()],
        })
        .collect()
}

/// Canceled and kept bookings of one market segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentCancellations {
    pub market_segment: String,
    pub canceled: usize,
    pub not_canceled: usize,
}

/// Cancellation counts per market segment, segments in name order
pub fn cancellations_by_segment(table: &BookingTable) -> Vec<SegmentCancellations> {
    let mut segments: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in table {
        let entry = segments.entry(record.market_segment.as_str()).or_default();
        if record.is_canceled {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    segments
        .into_iter()
        .map(|(segment, (canceled, not_canceled))| SegmentCancellations {
            market_segment: segment.to_string(),
            canceled,
            not_canceled,
        })
        .collect()
}

/// Bookings and cancellations of first-time or repeated guests at one hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepeatedGuestCancellations {
    pub hotel: Hotel,
    pub repeated_guest: RepeatFlag,
    pub bookings: usize,
    pub canceled: usize,
}

/// Booking and cancellation counts by hotel and repeated-guest flag
pub fn repeated_guest_cancellations(table: &BookingTable) -> Vec<RepeatedGuestCancellations> {
    let mut groups: BTreeMap<(Hotel, RepeatFlag), (usize, usize)> = BTreeMap::new();
    for record in table {
        let entry = groups.entry((record.hotel, record.repeat_flag())).or_default();
        entry.0 += 1;
        entry.1 += record.is_canceled as usize;
    }

    groups
        .into_iter()
        .map(|((hotel, repeated_guest), (bookings, canceled))| RepeatedGuestCancellations {
            hotel,
            repeated_guest,
            bookings,
            canceled,
        })
        .collect()
}
