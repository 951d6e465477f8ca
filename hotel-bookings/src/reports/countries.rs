//! Booking counts per country of origin

use crate::table::BookingTable;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub bookings: usize,
}

/// The `limit` countries with the most bookings
///
/// Sorted by booking count descending, ties by country code ascending.
pub fn top_countries(table: &BookingTable, limit: usize) -> Vec<CountryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in table {
        *counts.entry(record.country.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, bookings)| CountryCount {
            country: country.to_string(),
            bookings,
        })
        .collect();
    ranked.sort_by(|a, b| b.bookings.cmp(&a.bookings).then_with(|| a.country.cmp(&b.country)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::fixtures::booking;
    use crate::types::Hotel;

    fn table_with_countries(countries: &[&str]) -> BookingTable {
        BookingTable::from_records(
            countries
                .iter()
                .map(|c| {
                    let mut record = booking(Hotel::City, 2, 0, 0);
                    record.country = c.to_string();
                    record
                })
                .collect(),
        )
    }

    #[test]
    fn test_top_country() {
        let table = table_with_countries(&["PRT", "PRT", "GBR"]);
        let top = top_countries(&table, 1);
        assert_eq!(
            top,
            vec![CountryCount {
                country: "PRT".to_string(),
                bookings: 2
            }]
        );
    }

    #[test]
    fn test_ranking_and_ties() {
        let table = table_with_countries(&["FRA", "ESP", "PRT", "ESP", "FRA", "DEU"]);
        let top = top_countries(&table, 5);
        let order: Vec<&str> = top.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(order, vec!["ESP", "FRA", "DEU", "PRT"]);
    }
}
