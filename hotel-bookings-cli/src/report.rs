//! Plain-text report
//!
//! Renders an `AnalysisOutcome` as the sections printed to stdout: dataset
//! overview, cleaning, countries, prices, cancellations and guests.

use hotel_bookings::{AnalysisOutcome, GuestCategory};
use std::fmt::{self, Write};

const RULE: &str = "═══════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────";

/// Render the full text report
pub fn render_text(outcome: &AnalysisOutcome) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  Hotel Bookings Report")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Generated: {}", outcome.generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;

    write_overview(&mut out, outcome)?;
    write_cleaning(&mut out, outcome)?;
    write_countries(&mut out, outcome)?;
    write_prices(&mut out, outcome)?;
    write_cancellations(&mut out, outcome)?;
    write_guests(&mut out, outcome)?;

    Ok(out)
}

fn section(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", THIN_RULE)
}

fn write_overview(out: &mut String, outcome: &AnalysisOutcome) -> fmt::Result {
    let overview = &outcome.overview;
    section(out, "Dataset")?;
    writeln!(out, "Shape: {} rows × {} columns", overview.rows, overview.columns)?;
    writeln!(out)?;
    writeln!(out, "{:<32} {:>12} {:>12}", "Column", "Null Values", "Percentage")?;
    for nulls in &overview.null_values {
        writeln!(
            out,
            "{:<32} {:>12} {:>11.2}%",
            nulls.column, nulls.null_values, nulls.percentage
        )?;
    }
    Ok(())
}

fn write_cleaning(out: &mut String, outcome: &AnalysisOutcome) -> fmt::Result {
    let cleaning = &outcome.cleaning;
    section(out, "Cleaning")?;
    writeln!(out, "Rows loaded:            {}", cleaning.rows_loaded)?;
    writeln!(out, "Dropped (no guests):    {}", cleaning.rows_without_guests)?;
    writeln!(out, "Rows retained:          {}", cleaning.rows_retained)?;
    writeln!(
        out,
        "Filled values:          agent {}, company {}, children {} (with {}), country {} (with {})",
        cleaning.agents_filled,
        cleaning.companies_filled,
        cleaning.children_filled,
        cleaning.fill_values.children,
        cleaning.countries_filled,
        cleaning.fill_values.country
    )
}

fn write_countries(out: &mut String, outcome: &AnalysisOutcome) -> fmt::Result {
    let report = &outcome.report;
    section(
        out,
        &format!("Top {} countries by bookings", report.config.top_countries),
    )?;
    for (rank, country) in report.top_countries.iter().enumerate() {
        writeln!(out, "{:>2}. {:<8} {:>8}", rank + 1, country.country, country.bookings)?;
    }
    Ok(())
}

fn write_prices(out: &mut String, outcome: &AnalysisOutcome) -> fmt::Result {
    let report = &outcome.report;
    section(out, "Average price per night and person")?;
    writeln!(
        out,
        "For all non-canceled reservations, encompassing various room types and meal plans:"
    )?;
    for price in &report.average_prices {
        writeln!(out, "{}", price.describe())?;
    }
    if report.unpriced_bookings > 0 {
        writeln!(
            out,
            "({} bookings without paying guests left out)",
            report.unpriced_bookings
        )?;
    }
    Ok(())
}

fn write_cancellations(out: &mut String, outcome: &AnalysisOutcome) -> fmt::Result {
    let report = &outcome.report;
    section(out, "Cancellations")?;
    writeln!(
        out,
        "{:<16} {:>10} {:>14} {:>24}",
        "Hotel", "Canceled", "Not canceled", "Cancellation Percentage"
    )?;
    for hotel in &report.cancellations {
        writeln!(
            out,
            "{:<16} {:>10} {:>14} {:>23.2}%",
            hotel.hotel.to_string(),
            hotel.canceled,
            hotel.not_canceled,
            hotel.cancellation_percentage()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Canceled bookings per month:")?;
    for month in &report.cancellations_by_month {
        writeln!(out, "  {:<10} {:>8}", month.month.to_string(), month.canceled)?;
    }

    writeln!(out)?;
    writeln!(out, "By market segment:")?;
    for segment in &report.cancellations_by_segment {
        writeln!(
            out,
            "  {:<16} canceled {:>8}  not canceled {:>8}",
            segment.market_segment, segment.canceled, segment.not_canceled
        )?;
    }

    writeln!(out)?;
    writeln!(out, "By repeated guest:")?;
    for repeated in &report.repeated_guests {
        writeln!(
            out,
            "  {:<16} repeated {:<3}  canceled {:>8} of {:>8}",
            repeated.hotel.to_string(),
            repeated.repeated_guest.to_string(),
            repeated.canceled,
            repeated.bookings
        )?;
    }
    Ok(())
}

fn write_guests(out: &mut String, outcome: &AnalysisOutcome) -> fmt::Result {
    let report = &outcome.report;
    section(out, "Guest composition")?;
    for category in GuestCategory::ALL {
        if let Some(share) = report.guest_composition.share(category) {
            writeln!(
                out,
                "{:<24} {:>8} {:>7.2}%",
                share.category.to_string(),
                share.bookings,
                share.percentage
            )?;
        }
    }

    section(
        out,
        &format!("Top {} busiest months", report.config.busiest_months),
    )?;
    for entry in &report.busiest_months {
        writeln!(
            out,
            "{:<16} {:<10} {:>5} {:>8} guests",
            entry.hotel.to_string(),
            entry.month.to_string(),
            entry.year,
            entry.guests
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_bookings::analyzer::OVERVIEW_NULL_COLUMNS;
    use hotel_bookings::formats::CsvLoader;
    use hotel_bookings::Analyzer;

    const SAMPLE: &str = "\
hotel,is_canceled,lead_time,arrival_date_year,arrival_date_month,stays_in_weekend_nights,stays_in_week_nights,adults,children,babies,country,market_segment,is_repeated_guest,reserved_room_type,agent,company,adr
Resort Hotel,0,10,2016,March,1,2,2,0,0,PRT,Online TA,0,A,9,NA,100
City Hotel,1,40,2016,July,0,2,1,0,0,GBR,Groups,0,A,NA,NA,80
City Hotel,0,12,2016,July,1,1,1,0,0,PRT,Direct,1,A,9,NA,60
";

    fn sample_outcome() -> AnalysisOutcome {
        let analyzer = Analyzer::new();
        let raw = CsvLoader::from_reader(SAMPLE.as_bytes()).unwrap();
        let (table, cleaning) = analyzer.clean(&raw).unwrap();
        AnalysisOutcome {
            generated_at: chrono::Utc::now(),
            overview: raw.overview(OVERVIEW_NULL_COLUMNS),
            cleaning,
            report: analyzer.analyze(&table),
        }
    }

    #[test]
    fn test_text_report_sections() {
        let text = render_text(&sample_outcome()).unwrap();

        assert!(text.contains("Shape: 3 rows × 17 columns"));
        assert!(text.contains(
            "For all non-canceled reservations, encompassing various room types and meal plans:\n\
             Resort Hotel:"
        ));
        assert!(text.contains("Resort Hotel: Average nightly rate per person is €50.00."));
        assert!(text.contains("City Hotel: Average nightly rate per person is €60.00."));
        assert!(text.contains("Cancellation Percentage"));
        assert!(text.contains("50.00%"));
        assert!(text.contains("Top 5 countries by bookings"));
        assert!(text.contains("Couple (No Children)"));
    }
}
