//! Single and grouped bar charts

use super::{category_label, chart_err, ChartConfig};
use crate::types::Result;
use plotters::prelude::*;
use std::path::Path;

/// Fraction of a category slot covered by its bars
const GROUP_WIDTH: f64 = 0.8;

/// One bar per category; bar `i` uses `colors[i % colors.len()]`
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub colors: Vec<RGBColor>,
}

impl BarSeries {
    fn color(&self, idx: usize) -> RGBColor {
        if self.colors.is_empty() {
            return BLUE;
        }
        self.colors[idx % self.colors.len()]
    }
}

pub struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub categories: Vec<String>,
    /// Several series are drawn side by side within each category
    pub series: Vec<BarSeries>,
}

impl BarChart {
    fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

pub fn draw_bar_chart(path: &Path, chart: &BarChart, config: &ChartConfig) -> Result<()> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let slots = chart.categories.len().max(1);
    let y_max = chart.max_value();
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), 0f64..y_top)
        .map_err(chart_err)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(slots + 1)
        .x_label_formatter(&|x| category_label(&chart.categories, *x))
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .draw()
        .map_err(chart_err)?;

    let grouped = chart.series.len() > 1;
    let bar_width = GROUP_WIDTH / chart.series.len().max(1) as f64;

    for (k, series) in chart.series.iter().enumerate() {
        let offset = -GROUP_WIDTH / 2.0 + bar_width * k as f64;
        let annotation = ctx
            .draw_series(series.values.iter().enumerate().map(|(i, value)| {
                let x0 = i as f64 + offset;
                Rectangle::new([(x0, 0.0), (x0 + bar_width, *value)], series.color(i).filled())
            }))
            .map_err(chart_err)?;

        if grouped {
            let color = series.color(0);
            annotation
                .label(series.name.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
        }
    }

    if grouped {
        ctx.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_colors_cycle() {
        let series = BarSeries {
            name: "s".to_string(),
            values: vec![1.0, 2.0, 3.0],
            colors: vec![RED, GREEN],
        };
        assert_eq!(series.color(0), RED);
        assert_eq!(series.color(1), GREEN);
        assert_eq!(series.color(2), RED);

        let uncolored = BarSeries {
            name: "s".to_string(),
            values: vec![],
            colors: vec![],
        };
        assert_eq!(uncolored.color(3), BLUE);
    }

    #[test]
    fn test_max_value_ignores_non_finite() {
        let chart = BarChart {
            title: String::new(),
            x_desc: String::new(),
            y_desc: String::new(),
            categories: vec!["a".to_string(), "b".to_string()],
            series: vec![BarSeries {
                name: "s".to_string(),
                values: vec![4.0, f64::INFINITY],
                colors: vec![],
            }],
        };
        assert_eq!(chart.max_value(), 4.0);
    }
}
