//! Length of stay by market segment and hotel

use crate::stats::BoxSummary;
use crate::table::BookingTable;
use crate::types::{BookingRecord, Hotel};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StayGroup {
    pub market_segment: String,
    pub hotel: Hotel,
    pub summary: BoxSummary,
}

/// Week-night and weekend-night distributions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StayLengthDistribution {
    pub week_nights: Vec<StayGroup>,
    pub weekend_nights: Vec<StayGroup>,
}

pub fn stay_length_distribution(table: &BookingTable) -> StayLengthDistribution {
    StayLengthDistribution {
        week_nights: group_nights(table, |r| r.stays_in_week_nights),
        weekend_nights: group_nights(table, |r| r.stays_in_weekend_nights),
    }
}

fn group_nights<F>(table: &BookingTable, nights: F) -> Vec<StayGroup>
where
    F: Fn(&BookingRecord) -> u32,
{
    let mut groups: BTreeMap<(&str, Hotel), Vec<f64>> = BTreeMap::new();
    for record in table {
        groups
            .entry((record.market_segment.as_str(), record.hotel))
            .or_default()
            .push(nights(record) as f64);
    }

    groups
        .into_iter()
        .filter_map(|((segment, hotel), values)| {
            BoxSummary::from_values(&values).map(|summary| StayGroup {
                market_segment: segment.to_string(),
                hotel,
                summary,
            })
        })
        .collect()
}
