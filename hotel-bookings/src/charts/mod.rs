//! Chart rendering (plotters, SVG backend)
//!
//! `ChartRenderer` turns an `AnalysisReport` into one SVG file per chart.
//! The drawing primitives live in submodules and know nothing about
//! bookings; this module maps report values onto them.

pub mod bar;
pub mod boxplot;
pub mod density;
pub mod line;

use crate::reports::{AnalysisReport, StayGroup};
use crate::stats::BoxSummary;
use crate::types::{AnalysisError, GuestCategory, Hotel, Month, RepeatFlag, Result};
use bar::{draw_bar_chart, BarChart, BarSeries};
use boxplot::{draw_box_chart, BoxChart, BoxSeries};
use density::{draw_density_chart, DensityChart, DensitySeries};
use line::{draw_line_chart, BandPoint, LineChart, LineSeriesSpec};
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sequential orange palette, darkest first
pub const ORANGES: [RGBColor; 6] = [
    RGBColor(127, 39, 4),
    RGBColor(166, 54, 3),
    RGBColor(217, 72, 1),
    RGBColor(241, 105, 19),
    RGBColor(253, 141, 60),
    RGBColor(253, 174, 107),
];

const BLUE: RGBColor = RGBColor(31, 119, 180);
const ORANGE: RGBColor = RGBColor(255, 127, 14);
const SET1_RED: RGBColor = RGBColor(228, 26, 28);
const SET1_BLUE: RGBColor = RGBColor(55, 126, 184);

fn hotel_color(hotel: Hotel) -> RGBColor {
    match hotel {
        Hotel::City => BLUE,
        Hotel::Resort => ORANGE,
    }
}

fn hotel_box_color(hotel: Hotel) -> RGBColor {
    match hotel {
        Hotel::City => SET1_RED,
        Hotel::Resort => SET1_BLUE,
    }
}

/// Image size settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    800
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Map any plotters error into the library error type
pub(crate) fn chart_err<E: std::fmt::Display>(e: E) -> AnalysisError {
    AnalysisError::ChartError(e.to_string())
}

/// Label of the category at integer position `x`; empty between categories
pub(crate) fn category_label(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

/// Writes the report's charts into a directory
pub struct ChartRenderer {
    output_dir: PathBuf,
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            config: ChartConfig::default(),
        }
    }

    /// Builder method: image size
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render every chart, returning the written file paths in order
    pub fn render_all(&self, report: &AnalysisReport) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)?;
        log::info!("Rendering charts into {:?}", self.output_dir);

        let mut written = Vec::new();
        let mut emit = |name: &str, draw: &dyn Fn(&Path) -> Result<()>| -> Result<()> {
            let path = self.output_dir.join(name);
            draw(&path)?;
            log::debug!("Chart written: {:?}", path);
            written.push(path);
            Ok(())
        };

        emit("top_countries.svg", &|p: &Path| self.top_countries(p, report))?;
        emit("room_price_by_type.svg", &|p: &Path| self.room_prices(p, report))?;
        emit("room_price_by_month.svg", &|p: &Path| self.monthly_prices(p, report))?;
        emit("cancellations_by_hotel.svg", &|p: &Path| self.cancellations_by_hotel(p, report))?;
        emit("cancellations_by_month.svg", &|p: &Path| self.cancellations_by_month(p, report))?;
        emit("stays_week_nights.svg", &|p: &Path| {
            self.stay_lengths(p, "Week nights by market segment", &report.stay_lengths.week_nights)
        })?;
        emit("stays_weekend_nights.svg", &|p: &Path| {
            self.stay_lengths(
                p,
                "Weekend nights by market segment",
                &report.stay_lengths.weekend_nights,
            )
        })?;
        emit("guest_composition.svg", &|p: &Path| self.guest_composition(p, report))?;
        emit("guests_per_month.svg", &|p: &Path| self.guests_per_month(p, report))?;
        emit("repeated_guest_cancellations.svg", &|p: &Path| self.repeated_guests(p, report))?;
        emit("cancellations_by_segment.svg", &|p: &Path| self.cancellations_by_segment(p, report))?;
        emit("lead_time_density.svg", &|p: &Path| self.lead_time_density(p, report))?;

        log::info!("Rendered {} charts", written.len());
        Ok(written)
    }

    fn top_countries(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let chart = BarChart {
            title: format!(
                "Top {} Countries with the highest number of customers",
                report.config.top_countries
            ),
            x_desc: "Countries".to_string(),
            y_desc: "Number of Customers".to_string(),
            categories: report.top_countries.iter().map(|c| c.country.clone()).collect(),
            series: vec![BarSeries {
                name: "Customers".to_string(),
                values: report.top_countries.iter().map(|c| c.bookings as f64).collect(),
                colors: ORANGES.to_vec(),
            }],
        };
        draw_bar_chart(path, &chart, &self.config)
    }

    fn room_prices(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let mut room_types: Vec<String> = report
            .room_prices
            .iter()
            .map(|g| g.reserved_room_type.clone())
            .collect();
        room_types.dedup();

        let series = Hotel::ALL
            .into_iter()
            .map(|hotel| BoxSeries {
                name: hotel.to_string(),
                color: hotel_color(hotel),
                boxes: room_types
                    .iter()
                    .map(|room| {
                        report
                            .room_prices
                            .iter()
                            .find(|g| g.hotel == hotel && &g.reserved_room_type == room)
                            .map(|g| g.summary)
                    })
                    .collect(),
            })
            .collect();

        let chart = BoxChart {
            title: "Price Distribution of Room Types per Night and Person".to_string(),
            x_desc: "Reserved Room Type".to_string(),
            y_desc: "Price (EUR)".to_string(),
            categories: room_types,
            series,
            y_range: Some((0.0, report.config.room_price_ceiling)),
        };
        draw_box_chart(path, &chart, &self.config)
    }

    fn monthly_prices(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let series = Hotel::ALL
            .into_iter()
            .map(|hotel| LineSeriesSpec {
                name: hotel.to_string(),
                color: hotel_color(hotel),
                points: report
                    .monthly_prices
                    .iter()
                    .filter(|m| m.hotel == hotel)
                    .map(|m| BandPoint {
                        x: m.month.index(),
                        value: m.estimate.mean,
                        lower: m.estimate.lower,
                        upper: m.estimate.upper,
                    })
                    .collect(),
            })
            .collect();

        let chart = LineChart {
            title: "Room price per night and person over the year".to_string(),
            x_desc: "Month".to_string(),
            y_desc: "Price (EUR)".to_string(),
            categories: month_names(),
            series,
        };
        draw_line_chart(path, &chart, &self.config)
    }

    fn cancellations_by_hotel(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let chart = BarChart {
            title: "Canceled and non-canceled bookings for each hotel".to_string(),
            x_desc: "Hotel".to_string(),
            y_desc: "Number of Bookings".to_string(),
            categories: report.cancellations.iter().map(|c| c.hotel.to_string()).collect(),
            series: vec![
                BarSeries {
                    name: "Not canceled".to_string(),
                    values: report.cancellations.iter().map(|c| c.not_canceled as f64).collect(),
                    colors: vec![BLUE],
                },
                BarSeries {
                    name: "Canceled".to_string(),
                    values: report.cancellations.iter().map(|c| c.canceled as f64).collect(),
                    colors: vec![ORANGE],
                },
            ],
        };
        draw_bar_chart(path, &chart, &self.config)
    }

    fn cancellations_by_month(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let chart = BarChart {
            title: "Canceled bookings per month".to_string(),
            x_desc: "Month".to_string(),
            y_desc: "Number of Bookings".to_string(),
            categories: report
                .cancellations_by_month
                .iter()
                .map(|m| m.month.to_string())
                .collect(),
            series: vec![BarSeries {
                name: "Canceled".to_string(),
                values: report
                    .cancellations_by_month
                    .iter()
                    .map(|m| m.canceled as f64)
                    .collect(),
                colors: ORANGES.to_vec(),
            }],
        };
        draw_bar_chart(path, &chart, &self.config)
    }

    fn stay_lengths(&self, path: &Path, title: &str, groups: &[StayGroup]) -> Result<()> {
        let mut segments: Vec<String> = groups.iter().map(|g| g.market_segment.clone()).collect();
        segments.dedup();

        let series = Hotel::ALL
            .into_iter()
            .map(|hotel| BoxSeries {
                name: hotel.to_string(),
                color: hotel_box_color(hotel),
                boxes: segments
                    .iter()
                    .map(|segment| find_stay(groups, segment, hotel))
                    .collect(),
            })
            .collect();

        let chart = BoxChart {
            title: title.to_string(),
            x_desc: "Market Segment".to_string(),
            y_desc: "Nights".to_string(),
            categories: segments,
            series,
            y_range: None,
        };
        draw_box_chart(path, &chart, &self.config)
    }

    fn guest_composition(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let shares: Vec<_> = GuestCategory::ALL
            .into_iter()
            .filter_map(|c| report.guest_composition.share(c))
            .collect();

        let chart = BarChart {
            title: "Accommodation Type Distribution".to_string(),
            x_desc: "Accommodation Type".to_string(),
            y_desc: "Percentage".to_string(),
            categories: shares.iter().map(|s| s.category.to_string()).collect(),
            series: vec![BarSeries {
                name: "Share".to_string(),
                values: shares.iter().map(|s| s.percentage).collect(),
                colors: ORANGES.to_vec(),
            }],
        };
        draw_bar_chart(path, &chart, &self.config)
    }

    fn guests_per_month(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let averages = crate::reports::average_guests_by_month(&report.guests_per_month);
        let series = Hotel::ALL
            .into_iter()
            .map(|hotel| BarSeries {
                name: hotel.to_string(),
                values: Month::ALL
                    .into_iter()
                    .map(|month| {
                        averages
                            .iter()
                            .find(|a| a.hotel == hotel && a.month == month)
                            .map(|a| a.mean_guests)
                            .unwrap_or(0.0)
                    })
                    .collect(),
                colors: vec![hotel_color(hotel)],
            })
            .collect();

        let chart = BarChart {
            title: "Number of guests per month".to_string(),
            x_desc: "Month".to_string(),
            y_desc: "Number of guests".to_string(),
            categories: month_names(),
            series,
        };
        draw_bar_chart(path, &chart, &self.config)
    }

    fn repeated_guests(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let hotels: Vec<Hotel> = Hotel::ALL
            .into_iter()
            .filter(|h| report.repeated_guests.iter().any(|r| r.hotel == *h))
            .collect();

        let series = [RepeatFlag::No, RepeatFlag::Yes]
            .into_iter()
            .zip([BLUE, ORANGE])
            .map(|(flag, color)| BarSeries {
                name: format!("Repeated guest: {}", flag),
                values: hotels
                    .iter()
                    .map(|hotel| {
                        report
                            .repeated_guests
                            .iter()
                            .find(|r| r.hotel == *hotel && r.repeated_guest == flag)
                            .map(|r| r.canceled as f64)
                            .unwrap_or(0.0)
                    })
                    .collect(),
                colors: vec![color],
            })
            .collect();

        let chart = BarChart {
            title: "Booking Cancellation by Repeated Guests".to_string(),
            x_desc: "Hotel".to_string(),
            y_desc: "Canceled bookings".to_string(),
            categories: hotels.iter().map(|h| h.to_string()).collect(),
            series,
        };
        draw_bar_chart(path, &chart, &self.config)
    }

    fn cancellations_by_segment(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let segments = &report.cancellations_by_segment;
        let chart = BarChart {
            title: "Cancellation Count by Market Segment".to_string(),
            x_desc: "Market Segment".to_string(),
            y_desc: "Number of Bookings".to_string(),
            categories: segments.iter().map(|s| s.market_segment.clone()).collect(),
            series: vec![
                BarSeries {
                    name: "Not canceled".to_string(),
                    values: segments.iter().map(|s| s.not_canceled as f64).collect(),
                    colors: vec![BLUE],
                },
                BarSeries {
                    name: "Canceled".to_string(),
                    values: segments.iter().map(|s| s.canceled as f64).collect(),
                    colors: vec![ORANGE],
                },
            ],
        };
        draw_bar_chart(path, &chart, &self.config)
    }

    fn lead_time_density(&self, path: &Path, report: &AnalysisReport) -> Result<()> {
        let density = &report.lead_time_density;
        let chart = DensityChart {
            title: "Lead time distribution by cancellation status".to_string(),
            x_desc: "Lead time (days)".to_string(),
            y_desc: "Density".to_string(),
            x_max: report.config.lead_time_limit,
            series: vec![
                DensitySeries {
                    name: "Not canceled".to_string(),
                    color: BLUE,
                    points: density.not_canceled.points.clone(),
                },
                DensitySeries {
                    name: "Canceled".to_string(),
                    color: ORANGE,
                    points: density.canceled.points.clone(),
                },
            ],
        };
        draw_density_chart(path, &chart, &self.config)
    }
}

fn month_names() -> Vec<String> {
    Month::ALL.iter().map(|m| m.to_string()).collect()
}

fn find_stay(groups: &[StayGroup], segment: &str, hotel: Hotel) -> Option<BoxSummary> {
    groups
        .iter()
        .find(|g| g.hotel == hotel && g.market_segment == segment)
        .map(|g| g.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let categories = vec!["A".to_string(), "B".to_string()];
        assert_eq!(category_label(&categories, 0.0), "A");
        assert_eq!(category_label(&categories, 1.0000000001), "B");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, -1.0), "");
        assert_eq!(category_label(&categories, 2.0), "");
    }

    #[test]
    fn test_chart_config_defaults() {
        let config = ChartConfig::default();
        assert_eq!((config.width, config.height), (1200, 800));
        let renderer = ChartRenderer::new("charts").with_config(ChartConfig {
            width: 640,
            height: 480,
        });
        assert_eq!(renderer.output_dir(), Path::new("charts"));
    }
}
