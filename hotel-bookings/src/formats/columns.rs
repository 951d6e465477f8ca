//! Column name normalization
//!
//! Turns mixed/camel case headers (`ArrivalDateMonth`, `ADR`) into the
//! lower-case, underscore-separated names the loader looks up.

use regex::Regex;

/// Header normalizer with precompiled boundary patterns
pub struct ColumnNormalizer {
    /// `aB` / `1B`: lower or digit followed by upper
    word_boundary: Regex,
    /// `ABc`: end of an acronym followed by a capitalized word
    acronym_boundary: Regex,
    /// Runs of separators
    separators: Regex,
}

impl ColumnNormalizer {
    pub fn new() -> Self {
        Self {
            word_boundary: Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"),
            acronym_boundary: Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"),
            separators: Regex::new(r"[\s\-_]+").expect("valid regex"),
        }
    }

    /// Normalize a single column name
    pub fn normalize(&self, name: &str) -> String {
        let name = name.trim().trim_start_matches('\u{feff}');
        let name = self.acronym_boundary.replace_all(name, "${1}_${2}");
        let name = self.word_boundary.replace_all(&name, "${1}_${2}");
        let name = self.separators.replace_all(&name, "_");
        name.trim_matches('_').to_lowercase()
    }
}

impl Default for ColumnNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a single column name
pub fn normalize_column_name(name: &str) -> String {
    ColumnNormalizer::new().normalize(name)
}

/// Normalize every header of a file
pub fn normalize_headers<'a, I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let normalizer = ColumnNormalizer::new();
    headers.into_iter().map(|h| normalizer.normalize(h)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(normalize_column_name("ArrivalDateMonth"), "arrival_date_month");
        assert_eq!(normalize_column_name("isCanceled"), "is_canceled");
        assert_eq!(normalize_column_name("LeadTime"), "lead_time");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(normalize_column_name("ADR"), "adr");
        assert_eq!(normalize_column_name("ADRPerGuest"), "adr_per_guest");
    }

    #[test]
    fn test_already_normalized() {
        assert_eq!(normalize_column_name("is_canceled"), "is_canceled");
        assert_eq!(
            normalize_column_name("stays_in_weekend_nights"),
            "stays_in_weekend_nights"
        );
    }

    #[test]
    fn test_separators_and_whitespace() {
        assert_eq!(normalize_column_name(" Market Segment "), "market_segment");
        assert_eq!(normalize_column_name("reserved-room-type"), "reserved_room_type");
        assert_eq!(normalize_column_name("\u{feff}hotel"), "hotel");
    }

    #[test]
    fn test_normalize_headers() {
        let headers = normalize_headers(["Hotel", "IsCanceled", "adr"]);
        assert_eq!(headers, vec!["hotel", "is_canceled", "adr"]);
    }
}
