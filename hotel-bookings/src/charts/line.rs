//! Line charts with a shaded confidence band

use super::{category_label, chart_err, ChartConfig};
use crate::types::Result;
use plotters::prelude::*;
use std::path::Path;

/// A value at category position `x` with its interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPoint {
    pub x: usize,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

pub struct LineSeriesSpec {
    pub name: String,
    pub color: RGBColor,
    pub points: Vec<BandPoint>,
}

impl LineSeriesSpec {
    /// Upper edge left to right, then lower edge back
    fn band_outline(&self) -> Vec<(f64, f64)> {
        let upper = self.points.iter().map(|p| (p.x as f64, p.upper));
        let lower = self.points.iter().rev().map(|p| (p.x as f64, p.lower));
        upper.chain(lower).collect()
    }
}

pub struct LineChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub series: Vec<LineSeriesSpec>,
}

impl LineChart {
    fn value_range(&self) -> (f64, f64) {
        let points = || self.series.iter().flat_map(|s| s.points.iter());
        let low = points().map(|p| p.lower).filter(|v| v.is_finite()).fold(0.0, f64::min);
        let high = points().map(|p| p.upper).filter(|v| v.is_finite()).fold(0.0, f64::max);
        if high > low {
            (low, high * 1.1)
        } else {
            (low, low + 1.0)
        }
    }
}

pub fn draw_line_chart(path: &Path, chart: &LineChart, config: &ChartConfig) -> Result<()> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let slots = chart.categories.len().max(1);
    let (y_low, y_high) = chart.value_range();

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), y_low..y_high)
        .map_err(chart_err)?;

    ctx.configure_mesh()
        .x_labels(slots + 1)
        .x_label_formatter(&|x| category_label(&chart.categories, *x))
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .draw()
        .map_err(chart_err)?;

    for series in chart.series.iter().filter(|s| !s.points.is_empty()) {
        let color = series.color;

        if series.points.len() > 1 {
            ctx.draw_series(std::iter::once(Polygon::new(
                series.band_outline(),
                color.mix(0.2).filled(),
            )))
            .map_err(chart_err)?;
        }

        ctx.draw_series(LineSeries::new(
            series.points.iter().map(|p| (p.x as f64, p.value)),
            color.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label(series.name.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        ctx.draw_series(
            series
                .points
                .iter()
                .map(|p| Circle::new((p.x as f64, p.value), 3, color.filled())),
        )
        .map_err(chart_err)?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> LineSeriesSpec {
        LineSeriesSpec {
            name: "Resort Hotel".to_string(),
            color: RED,
            points: vec![
                BandPoint { x: 0, value: 50.0, lower: 45.0, upper: 55.0 },
                BandPoint { x: 1, value: 60.0, lower: 52.0, upper: 68.0 },
            ],
        }
    }

    #[test]
    fn test_band_outline_is_closed_loop() {
        assert_eq!(
            series().band_outline(),
            vec![(0.0, 55.0), (1.0, 68.0), (1.0, 52.0), (0.0, 45.0)]
        );
    }

    #[test]
    fn test_value_range_pads_upper_bound() {
        let chart = LineChart {
            title: String::new(),
            x_desc: String::new(),
            y_desc: String::new(),
            categories: vec!["January".to_string(), "February".to_string()],
            series: vec![series()],
        };
        let (low, high) = chart.value_range();
        assert_eq!(low, 0.0);
        assert!((high - 74.8).abs() < 1e-9);
    }
}
