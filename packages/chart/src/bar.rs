//! Victim sex breakdown bar chart.

use homicide_dash_analytics_models::{Aggregate, Selection, SexCount};
use plotters::prelude::*;

use crate::ChartError;
use crate::frame::{BAR_COLOR, axis_desc_font, chart_builder, draw_placeholder, label_font};
use crate::surface::{Hotspot, Layout, Surface};
use crate::tooltip::sex_tooltip;

/// Half the width of a bar, in category units (one category is 1.0 wide).
const HALF_BAR: f64 = 0.35;

fn year_label(selection: &Selection) -> String {
    selection
        .year
        .map_or_else(|| "no year".to_owned(), |y| y.to_string())
}

/// Draws one bar per victim sex, in the aggregate's order.
///
/// # Errors
///
/// Returns [`ChartError::Draw`] if the SVG backend fails.
pub fn render_sex_breakdown(
    surface: &mut Surface,
    data: &Aggregate<SexCount>,
    selection: &Selection,
) -> Result<(), ChartError> {
    surface.clear();
    let layout = *surface.layout();
    let mut svg = String::new();

    let Aggregate::Data(bars) = data else {
        let message = format!(
            "No data for {} victims in {}, {}",
            selection.race,
            selection.city,
            year_label(selection)
        );
        draw_placeholder(&mut svg, &layout, &message)?;
        surface.set_placeholder(svg, message);
        return Ok(());
    };

    let hotspots = draw(&mut svg, &layout, bars, selection)?;
    log::debug!("sex breakdown: {} bars", hotspots.len());
    surface.set_chart(svg, hotspots);
    Ok(())
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn draw(
    svg: &mut String,
    layout: &Layout,
    bars: &[SexCount],
    selection: &Selection,
) -> Result<Vec<Hotspot>, ChartError> {
    // category i is centered on x = i
    let centers: Vec<f64> = (0..bars.len()).map(|i| i as f64).collect();
    let categories = (-0.5..bars.len() as f64 - 0.5).with_key_points(centers.clone());
    let max_count = bars.iter().map(|b| b.count).max().unwrap_or(0);
    let counts = 0..(max_count + max_count / 10 + 1);

    let category_label = |x: &f64| {
        let index = x.round();
        if (x - index).abs() > f64::EPSILON || index < 0.0 {
            return String::new();
        }
        bars.get(index as usize)
            .map_or_else(String::new, |b| b.sex.clone())
    };

    let root = SVGBackend::with_string(svg, layout.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = chart_builder(
        &root,
        layout,
        &format!(
            "{} victims by sex, {} {}",
            selection.race,
            selection.city,
            year_label(selection)
        ),
    )
    .build_cartesian_2d(categories, counts)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&TRANSPARENT)
        .x_labels(bars.len())
        .y_labels(5)
        .x_label_formatter(&category_label)
        .y_label_formatter(&|count| count.to_string())
        .x_desc("Victim sex")
        .y_desc("Homicides")
        .label_style(label_font())
        .axis_desc_style(axis_desc_font())
        .draw()?;

    chart.draw_series(bars.iter().zip(&centers).map(|(bar, x)| {
        Rectangle::new(
            [(x - HALF_BAR, 0), (x + HALF_BAR, bar.count)],
            BAR_COLOR.filled(),
        )
    }))?;

    let hotspots = bars
        .iter()
        .zip(&centers)
        .map(|(bar, x)| {
            Hotspot::rect(
                chart.backend_coord(&(x - HALF_BAR, bar.count)),
                chart.backend_coord(&(x + HALF_BAR, 0)),
                sex_tooltip(selection, bar),
            )
            .class("bar")
            .data("sex", &bar.sex)
        })
        .collect();

    root.present()?;
    Ok(hotspots)
}

#[cfg(test)]
mod tests {
    use crate::Shape;

    use super::*;

    fn selection() -> Selection {
        Selection {
            city: "A".to_owned(),
            race: "White".to_owned(),
            year: Some(2019),
        }
    }

    fn bars() -> Aggregate<SexCount> {
        Aggregate::Data(vec![
            SexCount {
                sex: "Male".to_owned(),
                count: 4,
            },
            SexCount {
                sex: "Female".to_owned(),
                count: 2,
            },
        ])
    }

    fn height(hotspot: &Hotspot) -> i32 {
        match hotspot.shape {
            Shape::Rect {
                upper_left,
                bottom_right,
            } => bottom_right.1 - upper_left.1,
            Shape::Circle { .. } => 0,
        }
    }

    #[test]
    fn draws_bar_per_category_in_order() {
        let mut surface = Surface::new("sex-chart", Layout::default());
        render_sex_breakdown(&mut surface, &bars(), &selection()).unwrap();

        let sexes: Vec<&str> = surface
            .hotspots_with_class("bar")
            .filter_map(|h| h.data_value("sex"))
            .collect();
        assert_eq!(sexes, vec!["Male", "Female"]);

        let svg = surface.to_svg();
        assert!(svg.contains("Male"));
        assert!(svg.contains("Female"));
    }

    #[test]
    fn taller_bar_for_larger_count() {
        let mut surface = Surface::new("sex-chart", Layout::default());
        render_sex_breakdown(&mut surface, &bars(), &selection()).unwrap();

        let heights: Vec<i32> = surface.hotspots().iter().map(height).collect();
        assert_eq!(heights.len(), 2);
        assert!(heights[0] > heights[1]);
        assert!(heights[1] > 0);
    }

    #[test]
    fn bars_carry_tooltips() {
        let mut surface = Surface::new("sex-chart", Layout::default());
        render_sex_breakdown(&mut surface, &bars(), &selection()).unwrap();

        assert_eq!(
            surface.hotspots()[1].tooltip,
            "Female: 2 White victims in A, 2019"
        );
    }

    #[test]
    fn no_data_placeholder_names_selection() {
        let mut surface = Surface::new("sex-chart", Layout::default());
        render_sex_breakdown(&mut surface, &Aggregate::NoData, &selection()).unwrap();

        assert_eq!(
            surface.placeholder(),
            Some("No data for White victims in A, 2019")
        );
        assert_eq!(surface.hotspots_with_class("bar").count(), 0);
        assert!(surface.to_svg().contains("No data for White victims in A, 2019"));
    }

    #[test]
    fn redraw_is_idempotent() {
        let mut surface = Surface::new("sex-chart", Layout::default());
        render_sex_breakdown(&mut surface, &bars(), &selection()).unwrap();
        let svg = surface.to_svg();
        for _ in 0..3 {
            render_sex_breakdown(&mut surface, &bars(), &selection()).unwrap();
        }
        assert_eq!(surface.hotspots().len(), 2);
        assert_eq!(surface.to_svg(), svg);
    }
}
