//! Grouped box plots
//!
//! Boxes span Q1..Q3 with a median line; whiskers end at the last
//! observation within 1.5 × IQR. Outliers are not drawn.

use super::{category_label, chart_err, ChartConfig};
use crate::stats::BoxSummary;
use crate::types::Result;
use plotters::prelude::*;
use std::path::Path;

const GROUP_WIDTH: f64 = 0.8;

/// One box per category (or `None` where the group has no data)
pub struct BoxSeries {
    pub name: String,
    pub color: RGBColor,
    pub boxes: Vec<Option<BoxSummary>>,
}

pub struct BoxChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub series: Vec<BoxSeries>,
    /// Fixed value axis; derived from the whiskers when `None`
    pub y_range: Option<(f64, f64)>,
}

impl BoxChart {
    fn value_range(&self) -> (f64, f64) {
        if let Some(range) = self.y_range {
            return range;
        }
        let boxes = || self.series.iter().flat_map(|s| s.boxes.iter().flatten());
        let low = boxes().map(|b| b.lower_whisker).fold(0.0, f64::min);
        let high = boxes().map(|b| b.upper_whisker).fold(0.0, f64::max);
        let high = if high > low { high * 1.1 } else { low + 1.0 };
        (low, high)
    }
}

pub fn draw_box_chart(path: &Path, chart: &BoxChart, config: &ChartConfig) -> Result<()> {
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
        .disable_x_mesh()
        .x_labels(slots + 1)
        .x_label_formatter(&|x| category_label(&chart.categories, *x))
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .draw()
        .map_err(chart_err)?;

    let box_width = GROUP_WIDTH / chart.series.len().max(1) as f64;
    let clamp = |v: f64| v.clamp(y_low, y_high);

    for (k, series) in chart.series.iter().enumerate() {
        let color = series.color;
        let offset = -GROUP_WIDTH / 2.0 + box_width * k as f64;
        let placed: Vec<(f64, BoxSummary)> = series
            .boxes
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.map(|summary| (i as f64 + offset, summary)))
            .collect();

        let annotation = ctx
            .draw_series(placed.iter().map(|(x0, b)| {
                Rectangle::new(
                    [(*x0 + 0.05 * box_width, clamp(b.q1)), (*x0 + 0.95 * box_width, clamp(b.q3))],
                    color.mix(0.6).filled(),
                )
            }))
            .map_err(chart_err)?;
        annotation
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));

        ctx.draw_series(placed.iter().flat_map(|(x0, b)| {
            let mid = *x0 + box_width / 2.0;
            let left = *x0 + 0.05 * box_width;
            let right = *x0 + 0.95 * box_width;
            let cap = box_width / 4.0;
            vec![
                PathElement::new(vec![(left, clamp(b.median)), (right, clamp(b.median))], BLACK.stroke_width(2)),
                PathElement::new(vec![(mid, clamp(b.q3)), (mid, clamp(b.upper_whisker))], BLACK.stroke_width(1)),
                PathElement::new(vec![(mid, clamp(b.q1)), (mid, clamp(b.lower_whisker))], BLACK.stroke_width(1)),
                PathElement::new(
                    vec![(mid - cap, clamp(b.upper_whisker)), (mid + cap, clamp(b.upper_whisker))],
                    BLACK.stroke_width(1),
                ),
                PathElement::new(
                    vec![(mid - cap, clamp(b.lower_whisker)), (mid + cap, clamp(b.lower_whisker))],
                    BLACK.stroke_width(1),
                ),
            ]
        }))
        .map_err(chart_err)?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
