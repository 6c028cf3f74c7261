use std::path::Path;

use plotters::prelude::*;

use crate::{
    error::{Error, Result},
    timing::SeriesMap,
};

const CHART_SIZE: (u32, u32) = (1024, 640);

/// Renders one curve per worker count into a PNG at `path`: x is the matrix
/// size, y the elapsed seconds, with a marker on every measurement.
pub fn render(series: &SeriesMap, path: &Path) -> Result<()> {
    draw(series, path).map_err(|e| Error::Draw {
        path: path.into(),
        msg: e.to_string(),
    })
}

fn draw(series: &SeriesMap, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_max, y_max) = bounds(series);

    let mut chart = ChartBuilder::on(&root)
        .caption("Multiplication time by matrix size", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(0f64..x_max * 1.05, 0f64..y_max * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Matrix size (n x n)")
        .y_desc("Time (seconds)")
        .draw()?;

    for (i, (workers, timings)) in series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let points: Vec<(f64, f64)> = timings
            .points
            .iter()
            .map(|&(size, seconds)| (size as f64, seconds))
            .collect();

        let line = chart.draw_series(LineSeries::new(points.iter().copied(), &color))?;
        if let Some(n) = *workers {
            line.label(format!("Processes: {n}"))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
        }

        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 3, color.filled())),
        )?;
    }

    if series.keys().any(Option::is_some) {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Largest size and elapsed time across all series. Floors of 1 keep the
/// axis ranges non-degenerate when there is nothing to plot.
fn bounds(series: &SeriesMap) -> (f64, f64) {
    let mut x_max = 1f64;
    let mut y_max = 1f64;
    for (size, seconds) in series.values().flat_map(|s| s.points.iter().copied()) {
        x_max = x_max.max(size as f64);
        y_max = y_max.max(seconds);
    }
    (x_max, y_max)
}
