//! Derived metrics and filtered subsets
//!
//! Everything here reads a `BookingTable` and returns a new value; the
//! source table is never modified.

use crate::table::BookingTable;
use crate::types::{BookingRecord, Hotel, Month};
use serde::Serialize;

/// Average daily rate divided by the paying guests (adults + children)
///
/// Returns `None` when a booking has no paying guests (babies only), so the
/// booking can be left out of averages instead of producing an infinite
/// value.
pub fn adr_per_paying_guest(record: &BookingRecord) -> Option<f64> {
    match record.paying_guests() {
        0 => None,
        guests => Some(record.adr / guests as f64),
    }
}

/// Non-canceled bookings of each hotel
#[derive(Debug, Clone, PartialEq)]
pub struct HotelSplit {
    pub resort: BookingTable,
    pub city: BookingTable,
}

impl HotelSplit {
    pub fn get(&self, hotel: Hotel) -> &BookingTable {
        match hotel {
            Hotel::City => &self.city,
            Hotel::Resort => &self.resort,
        }
    }
}

/// Split a table into resort and city subsets, keeping only non-canceled bookings
pub fn split_non_canceled_by_hotel(table: &BookingTable) -> HotelSplit {
    let non_canceled = table.non_canceled();
    HotelSplit {
        resort: non_canceled.for_hotel(Hotel::Resort),
        city: non_canceled.for_hotel(Hotel::City),
    }
}

/// Canceled vs. non-canceled bookings
#[derive(Debug, Clone, PartialEq)]
pub struct CancellationPartition {
    pub canceled: BookingTable,
    pub not_canceled: BookingTable,
}

pub fn partition_by_cancellation(table: &BookingTable) -> CancellationPartition {
    CancellationPartition {
        canceled: table.canceled(),
        not_canceled: table.non_canceled(),
    }
}

/// One booking's price per paying guest, with the columns the price
/// reports group by
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestPrice {
    pub hotel: Hotel,
    pub reserved_room_type: String,
    pub arrival_date_month: Month,
    pub adr_per_paying_guest: f64,
}

/// Prices per paying guest for a set of bookings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GuestPriceTable {
    pub prices: Vec<GuestPrice>,
    /// Bookings left out because they had no paying guests
    pub unpriced: usize,
}

impl GuestPriceTable {
    /// Compute the price per paying guest for every booking of `table`
    pub fn from_table(table: &BookingTable) -> Self {
        let mut prices = Vec::with_capacity(table.len());
        let mut unpriced = 0;

        for record in table {
            match adr_per_paying_guest(record) {
                Some(price) => prices.push(GuestPrice {
                    hotel: record.hotel,
                    reserved_room_type: record.reserved_room_type.clone(),
                    arrival_date_month: record.arrival_date_month,
                    adr_per_paying_guest: price,
                }),
                None => unpriced += 1,
            }
        }

        if unpriced > 0 {
            log::warn!(
                "{} bookings have no paying guests and are left out of price metrics",
                unpriced
            );
        }

        Self { prices, unpriced }
    }

    /// Prices of a single hotel
    pub fn values_for(&self, hotel: Hotel) -> Vec<f64> {
        self.prices
            .iter()
            .filter(|p| p.hotel == hotel)
            .map(|p| p.adr_per_paying_guest)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures::booking;

    #[test]
    fn test_adr_per_paying_guest() {
        let record = booking(Hotel::City, 2, 0, 0);
        assert_eq!(adr_per_paying_guest(&record), Some(50.0));

        let mut family = booking(Hotel::Resort, 2, 2, 1);
        family.adr = 120.0;
        assert_eq!(adr_per_paying_guest(&family), Some(30.0));
    }

    #[test]
    fn test_babies_only_booking_is_unpriced() {
        let record = booking(Hotel::City, 0, 0, 1);
        assert_eq!(adr_per_paying_guest(&record), None);

        let table = BookingTable::from_records(vec![record, booking(Hotel::City, 1, 0, 0)]);
        let prices = GuestPriceTable::from_table(&table);
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.unpriced, 1);
        assert!(prices.prices.iter().all(|p| p.adr_per_paying_guest.is_finite()));
    }

    #[test]
    fn test_split_keeps_only_non_canceled() {
        let mut canceled = booking(Hotel::City, 2, 0, 0);
        canceled.is_canceled = true;
        let table = BookingTable::from_records(vec![
            booking(Hotel::City, 2, 0, 0),
            canceled,
            booking(Hotel::Resort, 1, 0, 0),
            booking(Hotel::Resort, 2, 0, 0),
        ]);

        let split = split_non_canceled_by_hotel(&table);
        assert_eq!(split.city.len(), 1);
        assert_eq!(split.resort.len(), 2);
        assert!(split.get(Hotel::City).iter().all(|r| !r.is_canceled));

        let partition = partition_by_cancellation(&table);
        assert_eq!(partition.canceled.len(), 1);
        assert_eq!(partition.not_canceled.len(), 3);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_values_for_hotel() {
        let table = BookingTable::from_records(vec![
            booking(Hotel::City, 2, 0, 0),
            booking(Hotel::Resort, 1, 0, 0),
        ]);
        let prices = GuestPriceTable::from_table(&table);
        assert_eq!(prices.values_for(Hotel::City), vec![50.0]);
        assert_eq!(prices.values_for(Hotel::Resort), vec![100.0]);
    }
}
