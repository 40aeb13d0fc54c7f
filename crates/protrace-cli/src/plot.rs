use anyhow::Result;
use nalgebra::Point3;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::Path;

/// Renders the diagnostic time series: distance of the indicator from the
/// coordinate origin, per frame, as an SVG scatter + line plot.
pub fn render_indicator_distance(path: &Path, series: &[(usize, Point3<f64>)]) -> Result<()> {
    let root = SVGBackend::new(path, (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    if series.is_empty() {
        root.draw(&Text::new(
            "No indicator data",
            (400, 250),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let distances: Vec<(f64, f64)> = series
        .iter()
        .map(|(frame, coord)| (*frame as f64, coord.coords.norm()))
        .collect();

    let max_frame = distances.last().map(|(f, _)| *f).unwrap_or(0.0);
    let (min_dist, max_dist) = distances
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, d)| {
            (min.min(*d), max.max(*d))
        });

    let mut chart = ChartBuilder::on(&root)
        .caption("Proton Indicator - Distance from Origin", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_frame.max(1.0), min_dist * 0.9..max_dist * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Frame")
        .y_desc("Distance (A)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(distances.iter().copied(), &BLUE))?
        .label("Proton Indicator")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart.draw_series(
        distances
            .iter()
            .map(|(f, d)| Circle::new((*f, *d), 2, YELLOW.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
