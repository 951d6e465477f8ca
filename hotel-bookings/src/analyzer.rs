//! Main analysis API
//!
//! The `Analyzer` is the entry point of the library: it loads the dataset,
//! runs the cleaning pass and builds the report. Each stage is exposed on
//! its own so callers can inspect intermediate values.

use crate::cleaning::{self, CleaningSummary};
use crate::config::AnalysisConfig;
use crate::formats::CsvLoader;
use crate::reports::AnalysisReport;
use crate::table::{BookingTable, DatasetOverview, RawTable};
use crate::types::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Number of columns listed in the overview's null table
pub const OVERVIEW_NULL_COLUMNS: usize = 10;

/// Everything a full run produces
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub generated_at: DateTime<Utc>,
    pub overview: DatasetOverview,
    pub cleaning: CleaningSummary,
    pub report: AnalysisReport,
}

/// Runs the load, clean and analyze stages with one configuration
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    /// Builder method: replace the configuration
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Load the dataset at `path` without cleaning it
    ///
    /// # Example
    /// ```no_run
    /// use hotel_bookings::Analyzer;
    /// use std::path::Path;
    ///
    /// let raw = Analyzer::new().load(Path::new("dataset/hotel_bookings.csv")).unwrap();
    /// println!("{} rows", raw.records.len());
    /// ```
    pub fn load(&self, path: &Path) -> Result<RawTable> {
        CsvLoader::load(path)
    }

    /// Run the cleaning pass
    pub fn clean(&self, raw: &RawTable) -> Result<(BookingTable, CleaningSummary)> {
        cleaning::clean(raw)
    }

    /// Build every summary over a cleaned table
    pub fn analyze(&self, table: &BookingTable) -> AnalysisReport {
        AnalysisReport::build(table, &self.config)
    }

    /// Load, clean and analyze in sequence
    pub fn run(&self, path: &Path) -> Result<AnalysisOutcome> {
        let raw = self.load(path)?;
        let overview = raw.overview(OVERVIEW_NULL_COLUMNS);
        let (table, cleaning) = self.clean(&raw)?;
        let report = self.analyze(&table);

        log::info!(
            "Analysis complete: {} of {} bookings retained",
            cleaning.rows_retained,
            cleaning.rows_loaded
        );

        Ok(AnalysisOutcome {
            generated_at: Utc::now(),
            overview,
            cleaning,
            report,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnalysisError;

    #[test]
    fn test_builder_keeps_config() {
        let config = AnalysisConfig::new().with_top_countries(10);
        let analyzer = Analyzer::new().with_config(config.clone());
        assert_eq!(analyzer.config(), &config);
        assert_eq!(Analyzer::default().config(), &AnalysisConfig::default());
    }

    #[test]
    fn test_run_missing_file() {
        let result = Analyzer::new().run(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(AnalysisError::ReadError(_))));
    }
}
