//! Hotel Bookings Analysis Library
//!
//! A reusable library for loading the hotel-bookings CSV export, cleaning
//! it and computing the summaries behind the booking report (pricing,
//! cancellations, stay lengths, guest mix, lead times).
//!
//! # Architecture
//!
//! Data flows one way:
//! - `formats` reads the CSV into a `RawTable`
//! - `cleaning` fills missing values and drops guest-less bookings
//! - `reports` derives every summary from the cleaned `BookingTable`
//! - `charts` renders an `AnalysisReport` to SVG files
//!
//! The library does NOT:
//! - Print or format text reports
//! - Read configuration files
//! - Set up logging
//!
//! Those live in the application layer (hotel-bookings-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use hotel_bookings::{AnalysisConfig, Analyzer, ChartRenderer};
//! use std::path::Path;
//!
//! let config = AnalysisConfig::new()
//!     .with_top_countries(10)
//!     .with_busiest_months(3);
//!
//! let outcome = Analyzer::new()
//!     .with_config(config)
//!     .run(Path::new("dataset/hotel_bookings.csv"))
//!     .unwrap();
//!
//! for country in &outcome.report.top_countries {
//!     println!("{}: {}", country.country, country.bookings);
//! }
//!
//! ChartRenderer::new("charts").render_all(&outcome.report).unwrap();
//! ```

// Public modules
pub mod analyzer;
pub mod charts;
pub mod cleaning;
pub mod config;
pub mod formats;
pub mod metrics;
pub mod reports;
pub mod stats;
pub mod table;
pub mod types;

// Re-export main types for convenience
pub use analyzer::{AnalysisOutcome, Analyzer};
pub use charts::{ChartConfig, ChartRenderer};
pub use cleaning::{clean, CleaningSummary, FillValues};
pub use config::AnalysisConfig;
pub use reports::AnalysisReport;
pub use table::{BookingTable, DatasetOverview, NullSummary, RawTable};
pub use types::{
    AnalysisError, BookingRecord, GuestCategory, Hotel, Month, RawBooking, RepeatFlag, Result,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.config().top_countries, 5);
        assert!(!VERSION.is_empty());
    }
}
