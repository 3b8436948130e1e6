//! Yearly trend line chart.

use homicide_dash_analytics_models::{Aggregate, Selection, YearCount};
use plotters::prelude::*;

use crate::ChartError;
use crate::frame::{
    HIGHLIGHT_COLOR, LINE_COLOR, axis_desc_font, chart_builder, draw_placeholder, label_font,
};
use crate::surface::{Hotspot, Layout, Surface};
use crate::tooltip::trend_tooltip;

const POINT_RADIUS: u32 = 4;
const SELECTED_RADIUS: u32 = 6;

/// Draws homicide counts per year for the selected city.
///
/// Every point gets a hotspot with a `data-year` attribute and the
/// `clickable` class so the host can bind year selection to it; the point
/// for the selected year is drawn larger and its hotspot gets the `selected`
/// class.
///
/// # Errors
///
/// Returns [`ChartError::Draw`] if the SVG backend fails.
pub fn render_trend(
    surface: &mut Surface,
    data: &Aggregate<YearCount>,
    selection: &Selection,
) -> Result<(), ChartError> {
    surface.clear();
    let layout = *surface.layout();
    let mut svg = String::new();

    let Aggregate::Data(series) = data else {
        let message = format!("No data available for {}", selection.city);
        draw_placeholder(&mut svg, &layout, &message)?;
        surface.set_placeholder(svg, message);
        return Ok(());
    };

    let hotspots = draw(&mut svg, &layout, series, selection)?;
    log::debug!("trend: {} points", hotspots.len());
    surface.set_chart(svg, hotspots);
    Ok(())
}

fn draw(
    svg: &mut String,
    layout: &Layout,
    series: &[YearCount],
    selection: &Selection,
) -> Result<Vec<Hotspot>, ChartError> {
    let first = series.first().map_or(0, |p| p.year);
    let last = series.last().map_or(0, |p| p.year);
    // a lone year sits in the middle of a three-year axis
    let years = if first == last {
        (first - 1)..(last + 1)
    } else {
        first..last
    };
    let max_count = series.iter().map(|p| p.count).max().unwrap_or(0);
    let counts = 0..(max_count + max_count / 10 + 1);

    let root = SVGBackend::with_string(svg, layout.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = chart_builder(
        &root,
        layout,
        &format!("Homicides per year in {}", selection.city),
    )
    .build_cartesian_2d(years, counts)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&TRANSPARENT)
        .x_labels(series.len().clamp(2, 8))
        .y_labels(5)
        .x_label_formatter(&|year| year.to_string())
        .y_label_formatter(&|count| count.to_string())
        .x_desc("Year")
        .y_desc("Homicides")
        .label_style(label_font())
        .axis_desc_style(axis_desc_font())
        .draw()?;

    chart.draw_series(LineSeries::new(
        series.iter().map(|p| (p.year, p.count)),
        LINE_COLOR.stroke_width(2),
    ))?;

    let radius = |point: &YearCount| {
        if selection.year == Some(point.year) {
            (SELECTED_RADIUS, HIGHLIGHT_COLOR)
        } else {
            (POINT_RADIUS, LINE_COLOR)
        }
    };

    chart.draw_series(series.iter().map(|p| {
        let (r, color) = radius(p);
        Circle::new((p.year, p.count), r, color.filled())
    }))?;

    let hotspots = series
        .iter()
        .map(|p| {
            let (r, _) = radius(p);
            let hotspot = Hotspot::circle(
                chart.backend_coord(&(p.year, p.count)),
                r,
                trend_tooltip(selection, p),
            )
            .class("point")
            .class("clickable")
            .data("year", p.year);
            if selection.year == Some(p.year) {
                hotspot.class("selected")
            } else {
                hotspot
            }
        })
        .collect();

    root.present()?;
    Ok(hotspots)
}
