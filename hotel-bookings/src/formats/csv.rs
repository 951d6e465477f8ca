//! CSV dataset loader
//!
//! Reads the hotel-bookings CSV export with the `csv` crate. Headers are
//! normalized first, then each required column is resolved to an index so
//! rows can be parsed positionally.
//!
//! ## Null handling
//! Empty fields and the tokens `NA`, `NULL`, `NaN`, `nan`, `null` are
//! treated as missing. Only `children`, `country`, `agent` and `company`
//! may be missing; a missing value anywhere else is an `InvalidValue`.

use crate::formats::columns::normalize_headers;
use crate::table::RawTable;
use crate::types::{AnalysisError, Month, RawBooking, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Columns the analysis reads; any other column is accepted and ignored
pub const REQUIRED_COLUMNS: [&str; 17] = [
    "hotel",
    "is_canceled",
    "lead_time",
    "arrival_date_year",
    "arrival_date_month",
    "stays_in_weekend_nights",
    "stays_in_week_nights",
    "adults",
    "children",
    "babies",
    "country",
    "market_segment",
    "is_repeated_guest",
    "reserved_room_type",
    "agent",
    "company",
    "adr",
];

const NULL_TOKENS: [&str; 6] = ["", "NA", "NULL", "NaN", "nan", "null"];

/// Check whether a raw field counts as missing
pub fn is_null(field: &str) -> bool {
    NULL_TOKENS.contains(&field.trim())
}

/// CSV loader for the hotel-bookings dataset
pub struct CsvLoader;

impl CsvLoader {
    /// Load a dataset from a file path
    pub fn load(path: &Path) -> Result<RawTable> {
        log::info!("Loading dataset: {:?}", path);

        if !path.exists() {
            return Err(AnalysisError::ReadError(format!(
                "Dataset file not found: {:?}",
                path
            )));
        }

        let file = File::open(path).map_err(|e| {
            AnalysisError::ReadError(format!("Failed to open dataset {:?}: {}", path, e))
        })?;

        let table = Self::from_reader(file)?;
        log::info!(
            "Loaded {} rows x {} columns from {:?}",
            table.records.len(),
            table.columns.len(),
            path
        );
        Ok(table)
    }

    /// Load a dataset from any reader (used by tests and in-memory sources)
    pub fn from_reader<R: Read>(reader: R) -> Result<RawTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let columns = normalize_headers(csv_reader.headers()?.iter());
        log::debug!("Normalized columns: {:?}", columns);

        let index = ColumnIndex::resolve(&columns)?;
        let mut null_counts = vec![0usize; columns.len()];
        let mut records = Vec::new();

        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            let row = row_idx + 1;

            for (col, field) in record.iter().enumerate() {
                if is_null(field) {
                    if let Some(count) = null_counts.get_mut(col) {
                        *count += 1;
                    }
                }
            }

            records.push(index.parse_row(&record, row)?);
        }

        Ok(RawTable {
            columns,
            records,
            null_counts,
        })
    }
}

/// Positions of the required columns within a record
struct ColumnIndex {
    positions: [usize; REQUIRED_COLUMNS.len()],
}

impl ColumnIndex {
    fn resolve(columns: &[String]) -> Result<Self> {
        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
            *slot = columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| AnalysisError::MissingColumn(name.to_string()))?;
        }
        Ok(Self { positions })
    }

    fn field<'r>(&self, record: &'r csv::StringRecord, column: &str) -> &'r str {
        let slot = REQUIRED_COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| self.positions[i]);
        slot.and_then(|i| record.get(i)).unwrap_or("").trim()
    }

    fn parse_row(&self, record: &csv::StringRecord, row: usize) -> Result<RawBooking> {
        let cell = |column: &'static str| Cell {
            column,
            value: self.field(record, column),
            row,
        };

        Ok(RawBooking {
            hotel: cell("hotel").parse()?,
            is_canceled: cell("is_canceled").flag()?,
            lead_time: cell("lead_time").count()?,
            arrival_date_year: cell("arrival_date_year").parse()?,
            arrival_date_month: cell("arrival_date_month").parse::<Month>()?,
            stays_in_weekend_nights: cell("stays_in_weekend_nights").count()?,
            stays_in_week_nights: cell("stays_in_week_nights").count()?,
            adults: cell("adults").count()?,
            children: cell("children").optional_amount()?,
            babies: cell("babies").count()?,
            country: cell("country").optional_text(),
            market_segment: cell("market_segment").text()?,
            is_repeated_guest: cell("is_repeated_guest").flag()?,
            reserved_room_type: cell("reserved_room_type").text()?,
            agent: cell("agent").optional_amount()?,
            company: cell("company").optional_amount()?,
            adr: cell("adr").parse()?,
        })
    }
}

/// One field of one row, with enough context to report a parse failure
struct Cell<'r> {
    column: &'static str,
    value: &'r str,
    row: usize,
}

impl<'r> Cell<'r> {
    fn invalid(&self) -> AnalysisError {
        AnalysisError::InvalidValue {
            row: self.row,
            column: self.column.to_string(),
            value: self.value.to_string(),
        }
    }

    fn parse<T: FromStr>(&self) -> Result<T> {
        if is_null(self.value) {
            return Err(self.invalid());
        }
        self.value.parse::<T>().map_err(|_| self.invalid())
    }

    /// Non-negative integer; integral floats such as `2.0` are accepted
    fn count(&self) -> Result<u32> {
        if let Ok(value) = self.value.parse::<u32>() {
            return Ok(value);
        }
        match self.value.parse::<f64>() {
            Ok(v) if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => Ok(v as u32),
            _ => Err(self.invalid()),
        }
    }

    /// `0`/`1` flag
    fn flag(&self) -> Result<bool> {
        match self.count()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(self.invalid()),
        }
    }

    fn text(&self) -> Result<String> {
        if is_null(self.value) {
            return Err(self.invalid());
        }
        Ok(self.value.to_string())
    }

    fn optional_text(&self) -> Option<String> {
        if is_null(self.value) {
            None
        } else {
            Some(self.value.to_string())
        }
    }

    /// Nullable non-negative number
    fn optional_amount(&self) -> Result<Option<f64>> {
        if is_null(self.value) {
            return Ok(None);
        }
        match self.value.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
            _ => Err(self.invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hotel;

    const HEADER: &str = "Hotel,IsCanceled,LeadTime,ArrivalDateYear,ArrivalDateMonth,\
StaysInWeekendNights,StaysInWeekNights,Adults,Children,Babies,Meal,Country,\
MarketSegment,IsRepeatedGuest,ReservedRoomType,Agent,Company,ADR";

    fn load(rows: &[&str]) -> Result<RawTable> {
        let mut data = String::from(HEADER);
        for row in rows {
            data.push('\n');
            data.push_str(row);
        }
        CsvLoader::from_reader(data.as_bytes())
    }

    #[test]
    fn test_load_with_nulls() {
        let table = load(&[
            "Resort Hotel,0,342,2015,July,0,0,2,0,0,BB,PRT,Direct,0,C,NULL,NULL,0",
            "City Hotel,1,88,2016,August,1,2,2,NA,0,BB,,Online TA,1,A,9,NULL,107.5",
        ])
        .unwrap();

        assert_eq!(table.shape(), (2, 18));
        assert_eq!(table.columns[1], "is_canceled");
        assert_eq!(table.columns[17], "adr");

        let first = &table.records[0];
        assert_eq!(first.hotel, Hotel::Resort);
        assert!(!first.is_canceled);
        assert_eq!(first.lead_time, 342);
        assert_eq!(first.arrival_date_month, Month::July);
        assert_eq!(first.children, Some(0.0));
        assert_eq!(first.agent, None);
        assert_eq!(first.country.as_deref(), Some("PRT"));

        let second = &table.records[1];
        assert!(second.is_canceled);
        assert!(second.is_repeated_guest);
        assert_eq!(second.children, None);
        assert_eq!(second.country, None);
        assert_eq!(second.agent, Some(9.0));
        assert_eq!(second.adr, 107.5);

        let nulls: Vec<(String, usize)> = table
            .null_summary()
            .into_iter()
            .filter(|s| s.null_values > 0)
            .map(|s| (s.column, s.null_values))
            .collect();
        assert_eq!(nulls[0], ("company".to_string(), 2));
        assert!(nulls.contains(&("agent".to_string(), 1)));
        assert!(nulls.contains(&("children".to_string(), 1)));
        assert!(nulls.contains(&("country".to_string(), 1)));
    }

    #[test]
    fn test_missing_column() {
        let data = "hotel,is_canceled\nCity Hotel,0\n";
        let err = CsvLoader::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingColumn(ref c) if c == "lead_time"));
    }

    #[test]
    fn test_invalid_value_reports_row() {
        let err = load(&[
            "Resort Hotel,0,342,2015,July,0,0,2,0,0,BB,PRT,Direct,0,C,NULL,NULL,0",
            "Resort Hotel,0,12,2015,Julember,0,0,2,0,0,BB,PRT,Direct,0,C,NULL,NULL,0",
        ])
        .unwrap_err();

        match err {
            AnalysisError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "arrival_date_month");
                assert_eq!(value, "Julember");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unknown_hotel_is_invalid() {
        let err = load(&["Motel,0,1,2015,July,0,0,2,0,0,BB,PRT,Direct,0,C,NULL,NULL,0"])
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidValue { ref column, .. } if column == "hotel"));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let err = load(&["Resort Hotel,0,342"]).unwrap_err();
        assert!(matches!(err, AnalysisError::CsvError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CsvLoader::load(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, AnalysisError::ReadError(_)));
    }

    #[test]
    fn test_null_tokens() {
        assert!(is_null(""));
        assert!(is_null(" NA "));
        assert!(is_null("NULL"));
        assert!(!is_null("0"));
        assert!(!is_null("PRT"));
    }
}
