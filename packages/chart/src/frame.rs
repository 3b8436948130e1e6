//! Pieces shared by all three charts: the chart frame built from the
//! [`Layout`], fonts, colors, and the "no data" placeholder.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::ChartError;
use crate::surface::Layout;

const TITLE_SIZE: u32 = 14;

pub(crate) const LINE_COLOR: RGBColor = RGBColor(70, 130, 180);
pub(crate) const HIGHLIGHT_COLOR: RGBColor = RGBColor(220, 20, 60);
pub(crate) const BAR_COLOR: RGBColor = RGBColor(105, 179, 162);
pub(crate) const DOT_COLOR: RGBColor = RGBColor(139, 0, 0);
const MUTED_COLOR: RGBColor = RGBColor(120, 120, 120);

pub(crate) fn title_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, f64::from(TITLE_SIZE), FontStyle::Normal)
}

pub(crate) fn label_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, 10.0, FontStyle::Normal)
}

pub(crate) fn axis_desc_font() -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal)
}

/// Chart builder with the layout's margins and a title.
///
/// The top margin includes the title row; the bottom and left margins hold
/// the axis labels.
pub(crate) fn chart_builder<'a, 'b, DB: DrawingBackend>(
    root: &'a DrawingArea<DB, Shift>,
    layout: &Layout,
    caption: &str,
) -> ChartBuilder<'a, 'b, DB> {
    let mut builder = ChartBuilder::on(root);
    builder
        .margin_top(layout.margins.top.saturating_sub(TITLE_SIZE))
        .margin_right(layout.margins.right)
        .x_label_area_size(layout.margins.bottom)
        .y_label_area_size(layout.margins.left)
        .caption(caption, title_font());
    builder
}

/// Draws a single centered message and nothing else.
pub(crate) fn draw_placeholder(
    svg: &mut String,
    layout: &Layout,
    message: &str,
) -> Result<(), ChartError> {
    let root = SVGBackend::with_string(svg, layout.size()).into_drawing_area();
    root.fill(&WHITE)?;

    let style = FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal)
        .color(&MUTED_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    #[allow(clippy::cast_possible_wrap)]
    let center = ((layout.width / 2) as i32, (layout.height / 2) as i32);
    root.draw(&Text::new(message, center, style))?;

    root.present()?;
    Ok(())
}

/// Loose plotting-area check: label areas and margins are exact, the title
/// row height is not.
#[cfg(test)]
#[allow(clippy::cast_possible_wrap)]
pub(crate) const fn inside_plot(layout: &Layout, (x, y): (i32, i32)) -> bool {
    let left = layout.margins.left as i32;
    let right = (layout.width - layout.margins.right) as i32;
    let top = layout.margins.top.saturating_sub(TITLE_SIZE) as i32;
    let bottom = (layout.height - layout.margins.bottom) as i32;
    x >= left && x <= right && y >= top && y <= bottom
}

/// Horizontal midpoint of the plotting area.
#[cfg(test)]
#[allow(clippy::cast_possible_wrap)]
pub(crate) const fn plot_center_x(layout: &Layout) -> i32 {
    let left = layout.margins.left as i32;
    let right = (layout.width - layout.margins.right) as i32;
    left + (right - left) / 2
}

/// Center of a circular hotspot (upper-left corner of a rectangle).
#[cfg(test)]
pub(crate) const fn hotspot_center(hotspot: &crate::Hotspot) -> (i32, i32) {
    match hotspot.shape {
        crate::Shape::Circle { center, .. } => center,
        crate::Shape::Rect { upper_left, .. } => upper_left,
    }
}
