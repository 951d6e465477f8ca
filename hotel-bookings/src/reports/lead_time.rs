//! Lead-time density by cancellation status

use crate::metrics::partition_by_cancellation;
use crate::stats::{gaussian_kde, linspace};
use crate::table::BookingTable;
use serde::Serialize;

/// Density curve of lead times for one group of bookings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    pub bookings: usize,
    /// `(lead time in days, density)` pairs; empty when the group has too
    /// little data to estimate a density
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadTimeDensity {
    pub not_canceled: DensityCurve,
    pub canceled: DensityCurve,
}

/// Gaussian KDE of lead times for canceled and kept bookings
///
/// Curves are evaluated on `points` evenly spaced days in `[0, limit]`.
pub fn lead_time_density(table: &BookingTable, limit: f64, points: usize) -> LeadTimeDensity {
    let grid = linspace(0.0, limit, points);
    let partition = partition_by_cancellation(table);
    let curve = |group: &BookingTable| {
        let lead_times: Vec<f64> = group.iter().map(|r| r.lead_time as f64).collect();
        DensityCurve {
            bookings: lead_times.len(),
            points: gaussian_kde(&lead_times, &grid).unwrap_or_default(),
        }
    };

    LeadTimeDensity {
        not_canceled: curve(&partition.not_canceled),
        canceled: curve(&partition.canceled),
    }
}
