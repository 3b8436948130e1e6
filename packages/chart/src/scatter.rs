//! Geographic scatterplot of incident locations.

use std::ops::Range;

use homicide_dash_analytics_models::{Aggregate, CoordinatePoint, Selection};
use plotters::prelude::*;

use crate::ChartError;
use crate::frame::{DOT_COLOR, axis_desc_font, chart_builder, draw_placeholder, label_font};
use crate::surface::{Hotspot, Layout, Surface};
use crate::tooltip::geo_tooltip;

const DOT_RADIUS: u32 = 3;
/// Padding applied when every point shares one coordinate.
const DEGENERATE_PAD: f64 = 0.01;

fn extent(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if (hi - lo).abs() < f64::EPSILON {
        (lo - DEGENERATE_PAD)..(hi + DEGENERATE_PAD)
    } else {
        lo..hi
    }
}

/// Draws one dot per located homicide: longitude on x, latitude on y.
///
/// # Errors
///
/// Returns [`ChartError::Draw`] if the SVG backend fails.
pub fn render_geo(
    surface: &mut Surface,
    data: &Aggregate<CoordinatePoint>,
    selection: &Selection,
) -> Result<(), ChartError> {
    surface.clear();
    let layout = *surface.layout();
    let mut svg = String::new();

    let year = selection
        .year
        .map_or_else(|| "no year".to_owned(), |y| y.to_string());

    let Aggregate::Data(points) = data else {
        let message = format!("No coordinate data for {}, {year}", selection.city);
        draw_placeholder(&mut svg, &layout, &message)?;
        surface.set_placeholder(svg, message);
        return Ok(());
    };

    let caption = format!("Homicide locations, {} {year}", selection.city);
    let hotspots = draw(&mut svg, &layout, points, &caption)?;
    log::debug!("geo: {} dots", hotspots.len());
    surface.set_chart(svg, hotspots);
    Ok(())
}

fn draw(
    svg: &mut String,
    layout: &Layout,
    points: &[CoordinatePoint],
    caption: &str,
) -> Result<Vec<Hotspot>, ChartError> {
    let lon = extent(points.iter().map(|p| p.lon));
    let lat = extent(points.iter().map(|p| p.lat));

    let root = SVGBackend::with_string(svg, layout.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = chart_builder(&root, layout, caption).build_cartesian_2d(lon, lat)?;

    chart
        .configure_mesh()
        .light_line_style(&TRANSPARENT)
        .x_labels(5)
        .y_labels(5)
        .x_label_formatter(&|v| format!("{v:.2}"))
        .y_label_formatter(&|v| format!("{v:.2}"))
        .x_desc("Longitude")
        .y_desc("Latitude")
        .label_style(label_font())
        .axis_desc_style(axis_desc_font())
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.lon, p.lat), DOT_RADIUS, DOT_COLOR.mix(0.6).filled())),
    )?;

    let hotspots = points
        .iter()
        .map(|p| {
            Hotspot::circle(
                chart.backend_coord(&(p.lon, p.lat)),
                DOT_RADIUS,
                geo_tooltip(p),
            )
            .class("dot")
        })
        .collect();

    root.present()?;
    Ok(hotspots)
}

#[cfg(test)]
mod tests {
    use crate::frame::{hotspot_center, inside_plot, plot_center_x};

    use super::*;

    fn selection() -> Selection {
        Selection {
            city: "Baltimore".to_owned(),
            race: "Black".to_owned(),
            year: Some(2015),
        }
    }

    fn point(lon: f64, lat: f64) -> CoordinatePoint {
        CoordinatePoint {
            city: "Baltimore".to_owned(),
            lon,
            lat,
        }
    }

    #[test]
    fn dots_stay_inside_plot_area() {
        let mut surface = Surface::new("geo-chart", Layout::default());
        let data = Aggregate::Data(vec![
            point(-76.7, 39.2),
            point(-76.5, 39.4),
            point(-76.6, 39.3),
        ]);
        render_geo(&mut surface, &data, &selection()).unwrap();

        let layout = Layout::default();
        let dots: Vec<(i32, i32)> = surface
            .hotspots_with_class("dot")
            .map(hotspot_center)
            .collect();

        assert_eq!(dots.len(), 3);
        assert!(dots.iter().all(|d| inside_plot(&layout, *d)));
        // northernmost point is drawn at the top
        assert!(dots[1].1 < dots[0].1);
        // easternmost point is drawn furthest right
        assert!(dots[1].0 > dots[2].0);
    }

    #[test]
    fn single_point_is_centered() {
        let mut surface = Surface::new("geo-chart", Layout::default());
        render_geo(
            &mut surface,
            &Aggregate::Data(vec![point(-76.6, 39.3)]),
            &selection(),
        )
        .unwrap();

        let layout = Layout::default();
        let (x, y) = hotspot_center(&surface.hotspots()[0]);
        assert!((x - plot_center_x(&layout)).abs() <= 1);
        assert!(inside_plot(&layout, (x, y)));
    }

    #[test]
    fn dots_carry_tooltips() {
        let mut surface = Surface::new("geo-chart", Layout::default());
        render_geo(
            &mut surface,
            &Aggregate::Data(vec![point(-76.6, 39.3)]),
            &selection(),
        )
        .unwrap();

        assert_eq!(surface.hotspots()[0].tooltip, "Baltimore (39.3000, -76.6000)");
    }

    #[test]
    fn no_data_placeholder() {
        let mut surface = Surface::new("geo-chart", Layout::default());
        render_geo(&mut surface, &Aggregate::NoData, &selection()).unwrap();

        assert_eq!(
            surface.placeholder(),
            Some("No coordinate data for Baltimore, 2015")
        );
        assert!(surface.hotspots().is_empty());
    }

    #[test]
    fn redraw_is_idempotent() {
        let mut surface = Surface::new("geo-chart", Layout::default());
        let data = Aggregate::Data(vec![point(-76.7, 39.2), point(-76.5, 39.4)]);
        render_geo(&mut surface, &data, &selection()).unwrap();
        let svg = surface.to_svg();
        render_geo(&mut surface, &data, &selection()).unwrap();
        assert_eq!(surface.to_svg(), svg);
    }
}
