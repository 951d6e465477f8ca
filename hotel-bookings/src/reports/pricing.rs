//! Room prices per night and paying guest

use crate::metrics::{adr_per_paying_guest, GuestPriceTable, HotelSplit};
use crate::stats::{mean, BoxSummary, MeanEstimate};
use crate::types::{Hotel, Month};
use serde::Serialize;
use std::collections::BTreeMap;

/// Mean price per paying guest of one hotel's non-canceled bookings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelAveragePrice {
    pub hotel: Hotel,
    /// `None` when the hotel has no priced bookings
    pub mean_price: Option<f64>,
    pub bookings: usize,
}

impl HotelAveragePrice {
    /// Sentence form, e.g. `City Hotel: Average nightly rate per person is €60.00.`
    pub fn describe(&self) -> String {
        match self.mean_price {
            Some(price) => format!(
                "{}: Average nightly rate per person is €{:.2}.",
                self.hotel, price
            ),
            None => format!("{}: No non-canceled bookings to price.", self.hotel),
        }
    }
}

/// Mean price per paying guest for each hotel (resort first, then city)
///
/// Bookings without paying guests are skipped; they are counted once by
/// the report's `GuestPriceTable`.
pub fn average_price_by_hotel(split: &HotelSplit) -> Vec<HotelAveragePrice> {
    [Hotel::Resort, Hotel::City]
        .into_iter()
        .map(|hotel| {
            let prices: Vec<f64> = split
                .get(hotel)
                .iter()
                .filter_map(adr_per_paying_guest)
                .collect();
            HotelAveragePrice {
                hotel,
                mean_price: mean(&prices),
                bookings: prices.len(),
            }
        })
        .collect()
}

/// Price distribution for one reserved room type at one hotel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomPriceGroup {
    pub reserved_room_type: String,
    pub hotel: Hotel,
    pub summary: BoxSummary,
}

/// Price distribution by reserved room type and hotel
///
/// Ordered by room type, then hotel. Groups without data are omitted.
pub fn room_price_distribution(prices: &GuestPriceTable) -> Vec<RoomPriceGroup> {
    let mut groups: BTreeMap<(&str, Hotel), Vec<f64>> = BTreeMap::new();
    for price in &prices.prices {
        groups
            .entry((price.reserved_room_type.as_str(), price.hotel))
            .or_default()
            .push(price.adr_per_paying_guest);
    }

    groups
        .into_iter()
        .filter_map(|((room_type, hotel), values)| {
            BoxSummary::from_values(&values).map(|summary| RoomPriceGroup {
                reserved_room_type: room_type.to_string(),
                hotel,
                summary,
            })
        })
        .collect()
}

/// Mean price per paying guest for one hotel in one arrival month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPrice {
    pub hotel: Hotel,
    pub month: Month,
    pub estimate: MeanEstimate,
}

/// Monthly price trend per hotel, in calendar order
pub fn monthly_room_price(prices: &GuestPriceTable) -> Vec<MonthlyPrice> {
    let mut groups: BTreeMap<(Hotel, Month), Vec<f64>> = BTreeMap::new();
    for price in &prices.prices {
        groups
            .entry((price.hotel, price.arrival_date_month))
            .or_default()
            .push(price.adr_per_paying_guest);
    }

    groups
        .into_iter()
        .filter_map(|((hotel, month), values)| {
            MeanEstimate::from_values(&values).map(|estimate| MonthlyPrice {
                hotel,
                month,
                estimate,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::split_non_canceled_by_hotel;
    use crate::table::fixtures::booking;
    use crate::table::BookingTable;

    #[test]
    fn test_average_price_by_hotel() {
        let mut canceled = booking(Hotel::City, 1, 0, 0);
        canceled.is_canceled = true;
        canceled.adr = 1000.0;
        let mut resort = booking(Hotel::Resort, 2, 1, 0);
        resort.adr = 90.0;

        let table = BookingTable::from_records(vec![
            booking(Hotel::City, 2, 0, 0),
            canceled,
            resort,
        ]);
        let averages = average_price_by_hotel(&split_non_canceled_by_hotel(&table));

        assert_eq!(averages[0].hotel, Hotel::Resort);
        assert_eq!(averages[0].mean_price, Some(30.0));
        assert_eq!(averages[1].hotel, Hotel::City);
        assert_eq!(averages[1].mean_price, Some(50.0));
        assert_eq!(
            averages[1].describe(),
            "City Hotel: Average nightly rate per person is €50.00."
        );
    }

    #[test]
    fn test_average_price_skips_unpriced_bookings() {
        let table = BookingTable::from_records(vec![
            booking(Hotel::City, 2, 0, 0),
            booking(Hotel::City, 0, 0, 1),
        ]);
        let averages = average_price_by_hotel(&split_non_canceled_by_hotel(&table));
        assert_eq!(averages[1].hotel, Hotel::City);
        assert_eq!(averages[1].mean_price, Some(50.0));
        assert_eq!(averages[1].bookings, 1);
    }

    #[test]
    fn test_hotel_without_bookings() {
        let table = BookingTable::from_records(vec![booking(Hotel::City, 2, 0, 0)]);
        let averages = average_price_by_hotel(&split_non_canceled_by_hotel(&table));
        assert_eq!(averages[0].mean_price, None);
        assert_eq!(averages[0].bookings, 0);
        assert_eq!(
            averages[0].describe(),
            "Resort Hotel: No non-canceled bookings to price."
        );
    }

    #[test]
    fn test_room_price_groups_sorted_by_room_type() {
        let mut d = booking(Hotel::Resort, 1, 0, 0);
        d.reserved_room_type = "D".to_string();
        let mut a_resort = booking(Hotel::Resort, 2, 0, 0);
        a_resort.adr = 60.0;
        let table = BookingTable::from_records(vec![d, a_resort, booking(Hotel::City, 2, 0, 0)]);

        let groups = room_price_distribution(&GuestPriceTable::from_table(&table));
        let keys: Vec<(&str, Hotel)> = groups
            .iter()
            .map(|g| (g.reserved_room_type.as_str(), g.hotel))
            .collect();
        assert_eq!(
            keys,
            vec![("A", Hotel::City), ("A", Hotel::Resort), ("D", Hotel::Resort)]
        );
        assert_eq!(groups[1].summary.median, 30.0);
    }

    #[test]
    fn test_monthly_prices_follow_calendar_order() {
        let mut march = booking(Hotel::City, 2, 0, 0);
        march.arrival_date_month = Month::March;
        let mut january = booking(Hotel::City, 1, 0, 0);
        january.arrival_date_month = Month::January;

        let table = BookingTable::from_records(vec![march, january]);
        let monthly = monthly_room_price(&GuestPriceTable::from_table(&table));

        let months: Vec<Month> = monthly.iter().map(|m| m.month).collect();
        assert_eq!(months, vec![Month::January, Month::March]);
        assert_eq!(monthly[0].estimate.mean, 100.0);
        assert_eq!(monthly[1].estimate.mean, 50.0);
    }
}
