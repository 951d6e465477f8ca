//! Guest composition and guest volume per month

use crate::table::BookingTable;
use crate::types::{GuestCategory, Hotel, Month};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: GuestCategory,
    pub bookings: usize,
    /// Share of all cleaned bookings, in percent
    pub percentage: f64,
}

/// Bookings per guest category
///
/// Percentages use every booking as the base, so the four categories add
/// up to 100 %.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestComposition {
    pub total: usize,
    pub categories: Vec<CategoryShare>,
}

impl GuestComposition {
    pub fn share(&self, category: GuestCategory) -> Option<&CategoryShare> {
        self.categories.iter().find(|c| c.category == category)
    }
}

pub fn guest_composition(table: &BookingTable) -> GuestComposition {
    let mut counts = [0usize; 4];
    for record in table {
        counts[record.guest_category() as usize] += 1;
    }

    let total = table.len();
    let categories = GuestCategory::ALL
        .into_iter()
        .map(|category| {
            let bookings = counts[category as usize];
            CategoryShare {
                category,
                bookings,
                percentage: if total == 0 {
                    0.0
                } else {
                    bookings as f64 / total as f64 * 100.0
                },
            }
        })
        .collect();

    GuestComposition { total, categories }
}

/// Guests (adults + children + babies) arriving at one hotel in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyGuests {
    pub hotel: Hotel,
    pub year: i32,
    pub month: Month,
    pub guests: u64,
}

/// Total guests per hotel, arrival year and month
///
/// Sorted by year, then calendar month, then hotel.
pub fn guests_per_month(table: &BookingTable) -> Vec<MonthlyGuests> {
    let mut totals: BTreeMap<(i32, Month, Hotel), u64> = BTreeMap::new();
    for record in table {
        *totals
            .entry((record.arrival_date_year, record.arrival_date_month, record.hotel))
            .or_insert(0) += record.total_guests();
    }

    totals
        .into_iter()
        .map(|((year, month, hotel), guests)| MonthlyGuests {
            hotel,
            year,
            month,
            guests,
        })
        .collect()
}

/// The `limit` hotel-months with the most guests
pub fn busiest_months(monthly: &[MonthlyGuests], limit: usize) -> Vec<MonthlyGuests> {
    let mut ranked = monthly.to_vec();
    ranked.sort_by(|a, b| {
        b.guests
            .cmp(&a.guests)
            .then_with(|| (a.year, a.month, a.hotel).cmp(&(b.year, b.month, b.hotel)))
    });
    ranked.truncate(limit);
    ranked
}

/// Mean of the per-year guest totals for one hotel and calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyGuestAverage {
    pub hotel: Hotel,
    pub month: Month,
    pub mean_guests: f64,
    /// Arrival years contributing to the mean
    pub years: usize,
}

/// Average the per-year totals over arrival years, in calendar order
pub fn average_guests_by_month(monthly: &[MonthlyGuests]) -> Vec<MonthlyGuestAverage> {
    let mut groups: BTreeMap<(Month, Hotel), (u64, usize)> = BTreeMap::new();
    for entry in monthly {
        let group = groups.entry((entry.month, entry.hotel)).or_default();
        group.0 += entry.guests;
        group.1 += 1;
    }

    groups
        .into_iter()
        .map(|((month, hotel), (guests, years))| MonthlyGuestAverage {
            hotel,
            month,
            mean_guests: guests as f64 / years as f64,
            years,
        })
        .collect()
}
