//! Overlaid density curves

use super::{chart_err, ChartConfig};
use crate::types::Result;
use plotters::prelude::*;
use std::path::Path;

pub struct DensitySeries {
    pub name: String,
    pub color: RGBColor,
    /// `(x, density)` pairs in ascending `x`
    pub points: Vec<(f64, f64)>,
}

pub struct DensityChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub x_max: f64,
    pub series: Vec<DensitySeries>,
}

impl DensityChart {
    fn max_density(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, y)| *y))
            .filter(|y| y.is_finite())
            .fold(0.0, f64::max)
    }
}

pub fn draw_density_chart(path: &Path, chart: &DensityChart, config: &ChartConfig) -> Result<()> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let y_max = chart.max_density();
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    let x_max = if chart.x_max > 0.0 { chart.x_max } else { 1.0 };

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(0f64..x_max, 0f64..y_top)
        .map_err(chart_err)?;

    ctx.configure_mesh()
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .y_label_formatter(&|y| format!("{:.4}", y))
        .draw()
        .map_err(chart_err)?;

    for series in chart.series.iter() {
        if series.points.is_empty() {
            log::warn!("No density curve for '{}', skipping", series.name);
            continue;
        }
        let color = series.color;
        ctx.draw_series(
            AreaSeries::new(series.points.iter().copied(), 0.0, color.mix(0.3))
                .border_style(color.stroke_width(2)),
        )
        .map_err(chart_err)?
        .label(series.name.as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    ctx.configure_series_labels()
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

    #[test]
    fn test_max_density_across_series() {
        let chart = DensityChart {
            title: String::new(),
            x_desc: String::new(),
            y_desc: String::new(),
            x_max: 500.0,
            series: vec![
                DensitySeries {
                    name: "a".to_string(),
                    color: RED,
                    points: vec![(0.0, 0.002), (10.0, 0.004)],
                },
                DensitySeries {
                    name: "b".to_string(),
                    color: BLUE,
                    points: vec![],
                },
            ],
        };
        assert_eq!(chart.max_density(), 0.004);
    }
}
