//! Aggregation and reporting routines
//!
//! Each routine takes the cleaned table (or a value derived from it) and
//! returns a new value. None of them depend on each other's output, so they
//! can run in any order.

pub mod cancellations;
pub mod countries;
pub mod guests;
pub mod lead_time;
pub mod pricing;
pub mod stays;

pub use cancellations::{
    cancellation_percentages, cancellations_by_hotel, cancellations_by_month,
    cancellations_by_segment, repeated_guest_cancellations, CancellationRate,
    HotelCancellations, MonthCancellations, RepeatedGuestCancellations, SegmentCancellations,
};
pub use countries::{top_countries, CountryCount};
pub use guests::{
    average_guests_by_month, busiest_months, guest_composition, guests_per_month,
    CategoryShare, GuestComposition, MonthlyGuestAverage, MonthlyGuests,
};
pub use lead_time::{lead_time_density, DensityCurve, LeadTimeDensity};
pub use pricing::{
    average_price_by_hotel, monthly_room_price, room_price_distribution, HotelAveragePrice,
    MonthlyPrice, RoomPriceGroup,
};
pub use stays::{stay_length_distribution, StayGroup, StayLengthDistribution};

use crate::config::AnalysisConfig;
use crate::metrics::{split_non_canceled_by_hotel, GuestPriceTable};
use crate::table::{BookingTable, TableStats};
use serde::Serialize;

/// Every summary the analysis produces, built from one cleaned table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub config: AnalysisConfig,
    pub table: TableStats,
    pub top_countries: Vec<CountryCount>,
    pub average_prices: Vec<HotelAveragePrice>,
    /// Non-canceled bookings left out of price metrics (no paying guests)
    pub unpriced_bookings: usize,
    pub room_prices: Vec<RoomPriceGroup>,
    pub monthly_prices: Vec<MonthlyPrice>,
    pub cancellations: Vec<HotelCancellations>,
    pub cancellation_rates: Vec<CancellationRate>,
    pub cancellations_by_month: Vec<MonthCancellations>,
    pub cancellations_by_segment: Vec<SegmentCancellations>,
    pub stay_lengths: StayLengthDistribution,
    pub guest_composition: GuestComposition,
    pub guests_per_month: Vec<MonthlyGuests>,
    pub busiest_months: Vec<MonthlyGuests>,
    pub repeated_guests: Vec<RepeatedGuestCancellations>,
    pub lead_time_density: LeadTimeDensity,
}

impl AnalysisReport {
    /// Run every reporting routine over `table`
    pub fn build(table: &BookingTable, config: &AnalysisConfig) -> AnalysisReport {
        log::info!("Building report over {} bookings", table.len());

        let split = split_non_canceled_by_hotel(table);
        let non_canceled_prices = GuestPriceTable::from_table(&table.non_canceled());
        let monthly_guests = guests_per_month(table);

        log::debug!("Computing price metrics");
        let average_prices = average_price_by_hotel(&split);
        let room_prices = room_price_distribution(&non_canceled_prices);
        let monthly_prices = monthly_room_price(&non_canceled_prices);

        log::debug!("Computing cancellation metrics");
        let cancellations = cancellations_by_hotel(table);
        let cancellation_rates = cancellation_percentages(table);

        AnalysisReport {
            config: config.clone(),
            table: table.stats(),
            top_countries: top_countries(table, config.top_countries),
            average_prices,
            unpriced_bookings: non_canceled_prices.unpriced,
            room_prices,
            monthly_prices,
            cancellations,
            cancellation_rates,
            cancellations_by_month: cancellations_by_month(table),
            cancellations_by_segment: cancellations_by_segment(table),
            stay_lengths: stay_length_distribution(table),
            guest_composition: guest_composition(table),
            busiest_months: busiest_months(&monthly_guests, config.busiest_months),
            guests_per_month: monthly_guests,
            repeated_guests: repeated_guest_cancellations(table),
            lead_time_density: lead_time_density(
                table,
                config.lead_time_limit,
                config.density_points,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures::booking;
    use crate::types::{Hotel, Month};

    #[test]
    fn test_build_report() {
        let mut canceled = booking(Hotel::Resort, 2, 0, 0);
        canceled.is_canceled = true;
        canceled.arrival_date_month = Month::March;
        let babies_only = booking(Hotel::City, 0, 0, 1);

        let table = BookingTable::from_records(vec![
            booking(Hotel::City, 2, 0, 0),
            booking(Hotel::City, 1, 0, 0),
            canceled,
            babies_only,
        ]);
        let config = AnalysisConfig::new().with_top_countries(3).with_density_points(20);
        let report = AnalysisReport::build(&table, &config);

        assert_eq!(report.table.bookings, 4);
        assert_eq!(report.top_countries[0].country, "PRT");
        assert_eq!(report.top_countries[0].bookings, 4);
        assert_eq!(report.unpriced_bookings, 1);
        assert_eq!(report.cancellations_by_month[2].canceled, 1);
        assert_eq!(report.cancellation_rates.len(), 2);
        assert_eq!(report.guest_composition.total, 4);
        assert_eq!(report.busiest_months.len(), 2);
        assert_eq!(report.config, config);
    }
}
