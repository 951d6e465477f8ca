//! Analysis configuration types
//!
//! This module defines the small set of knobs the aggregation routines use.
//! Loading configuration from disk is handled by the application layer.

use serde::{Deserialize, Serialize};

/// Configuration for the analysis routines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of countries in the top-countries ranking (default: 5)
    #[serde(default = "default_top_countries")]
    pub top_countries: usize,

    /// Number of entries in the busiest-months ranking (default: 5)
    #[serde(default = "default_busiest_months")]
    pub busiest_months: usize,

    /// Upper bound of the price axis in the room-type chart, in EUR (default: 160)
    #[serde(default = "default_room_price_ceiling")]
    pub room_price_ceiling: f64,

    /// Upper bound of the lead-time density range, in days (default: 500)
    #[serde(default = "default_lead_time_limit")]
    pub lead_time_limit: f64,

    /// Number of grid points the density curves are evaluated on (default: 200)
    #[serde(default = "default_density_points")]
    pub density_points: usize,
}

fn default_top_countries() -> usize {
    5
}

fn default_busiest_months() -> usize {
    5
}

fn default_room_price_ceiling() -> f64 {
    160.0
}

fn default_lead_time_limit() -> f64 {
    500.0
}

fn default_density_points() -> usize {
    200
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_countries: default_top_countries(),
            busiest_months: default_busiest_months(),
            room_price_ceiling: default_room_price_ceiling(),
            lead_time_limit: default_lead_time_limit(),
            density_points: default_density_points(),
        }
    }
}

impl AnalysisConfig {
    /// Create a new analysis configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: size of the top-countries ranking
    pub fn with_top_countries(mut self, count: usize) -> Self {
        self.top_countries = count;
        self
    }

    /// Builder method: size of the busiest-months ranking
    pub fn with_busiest_months(mut self, count: usize) -> Self {
        self.busiest_months = count;
        self
    }

    /// Builder method: price axis ceiling for the room-type chart
    pub fn with_room_price_ceiling(mut self, ceiling: f64) -> Self {
        self.room_price_ceiling = ceiling;
        self
    }

    /// Builder method: lead-time range of the density curves
    pub fn with_lead_time_limit(mut self, days: f64) -> Self {
        self.lead_time_limit = days;
        self
    }

    /// Builder method: density grid resolution
    pub fn with_density_points(mut self, points: usize) -> Self {
        self.density_points = points;
        self
    }
}
