//! PNG figures for the three exercises.
//!
//! Only enabled with the `plot` feature. Every function draws data that was
//! already computed by [`crate::exercises`]; nothing here evaluates a model.

use crate::exercises::distributions::DistributionPanel;
use crate::exercises::intersections::IntersectionReport;
use crate::exercises::linear_systems::SolvedSystem;
use crate::stats::{ContinuousDistribution, Distribution};
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// One row per distribution: PDF with the shaded tail on the left, CDF with
/// reference lines through the marker on the right.
pub fn render_distributions(
    panels: &[DistributionPanel],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let height = 500 * panels.len().max(1) as u32;
    let root = BitMapBackend::new(path, (1400, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let rows = root.split_evenly((panels.len().max(1), 2));

    for (i, panel) in panels.iter().enumerate() {
        let (lo, hi) = panel.window;
        let dist = &panel.distribution;

        let mut pdf_chart = ChartBuilder::on(&rows[2 * i])
            .caption(format!("PDF of {}", dist), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(lo..hi, 0.0..panel.pdf_ylim)?;
        pdf_chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("f(x)")
            .draw()?;

        pdf_chart.draw_series(AreaSeries::new(
            panel.region.shade(&panel.curve.x, &panel.curve.pdf),
            0.0,
            BLUE.mix(0.3),
        ))?;
        pdf_chart.draw_series(LineSeries::new(panel.curve.pdf_points(), &BLUE))?;

        // Label halfway between the threshold and the mean, pointing into the tail.
        let t = panel.region.threshold();
        let label_x = t + (dist.mean() - t) * 0.5;
        let label_y = (dist.pdf(t) + panel.pdf_ylim) * 0.5;
        pdf_chart.draw_series(std::iter::once(PathElement::new(
            vec![(label_x, label_y), (t, dist.pdf(t) * 0.5)],
            BLACK,
        )))?;
        pdf_chart.draw_series(std::iter::once(Text::new(
            panel.label(),
            (label_x, label_y),
            ("sans-serif", 16),
        )))?;

        let mut cdf_chart = ChartBuilder::on(&rows[2 * i + 1])
            .caption(format!("CDF of {}", dist), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(lo..hi, 0.0..1.05)?;
        cdf_chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("F(x)")
            .draw()?;
        cdf_chart.draw_series(LineSeries::new(panel.curve.cdf_points(), &RED))?;

        let m = panel.marker;
        cdf_chart.draw_series(std::iter::once(PathElement::new(
            vec![(m.x, 0.0), (m.x, m.p), (lo, m.p)],
            BLACK.mix(0.5),
        )))?;
        cdf_chart.draw_series(std::iter::once(Circle::new((m.x, m.p), 4, RED.filled())))?;
        cdf_chart.draw_series(std::iter::once(Text::new(
            format!("F({:.1}) = {:.4}", m.x, m.p),
            (m.x, m.p - 0.1),
            ("sans-serif", 16),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Both curves on one axis with every intersection marked.
pub fn render_intersections(
    report: &IntersectionReport,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let samples = &report.samples;
    let (lo, hi) = match (samples.x.first(), samples.x.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => return Err("no curve samples to draw".into()),
    };

    let values = || samples.f1.iter().chain(&samples.f2).copied();
    let y_min = values().fold(f64::INFINITY, f64::min);
    let y_max = values().fold(f64::NEG_INFINITY, f64::max);
    let pad = 0.05 * (y_max - y_min).max(1e-6);

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("x - 3cos(x) and cos(2x)x^3", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, (y_min - pad)..(y_max + pad))?;
    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    chart
        .draw_series(LineSeries::new(
            samples.x.iter().copied().zip(samples.f1.iter().copied()),
            &BLUE,
        ))?
        .label("x - 3cos(x)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(
            samples.x.iter().copied().zip(samples.f2.iter().copied()),
            &GREEN,
        ))?
        .label("cos(2x)x^3")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    for &x in &report.intersections.points {
        let y = crate::exercises::intersections::f1(x);
        chart.draw_series(std::iter::once(Circle::new((x, y), 5, RED.filled())))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("({:.3}, {:.3})", x, y),
            (x, y + pad),
            ("sans-serif", 14),
        )))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Each solution vector as a two-row grid of header and value cells.
pub fn render_solution_tables(
    systems: &[SolvedSystem],
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    const CELL_W: i32 = 200;
    const CELL_H: i32 = 40;

    let width = systems
        .iter()
        .map(|s| s.table.headers.len() as i32 * CELL_W + 40)
        .max()
        .unwrap_or(400);
    let height = 200 * systems.len().max(1) as u32;
    let root = BitMapBackend::new(path, (width as u32, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((systems.len().max(1), 1));

    for (area, solved) in areas.iter().zip(systems) {
        let table = &solved.table;
        let title = Text::new(table.title.clone(), (20, 20), ("sans-serif", 20));
        area.draw(&title)?;

        let rows = [table.headers.clone(), table.value_cells()];
        for (row, cells) in rows.iter().enumerate() {
            let top = 60 + row as i32 * CELL_H;
            for (col, cell) in cells.iter().enumerate() {
                let left = 20 + col as i32 * CELL_W;
                let corners = [(left, top), (left + CELL_W, top + CELL_H)];
                area.draw(&Rectangle::new(corners, BLACK))?;
                area.draw(&Text::new(cell.clone(), (left + 10, top + 12), ("sans-serif", 16)))?;
            }
        }
    }

    root.present()?;
    Ok(())
}
