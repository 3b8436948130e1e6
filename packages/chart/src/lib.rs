#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart renderers for the homicide dashboard.
//!
//! Each renderer takes a [`Surface`], one aggregate series, and the current
//! selection. It clears the surface, then uses `plotters` to draw either a
//! "no data" placeholder or the axes and shapes of the chart into an SVG
//! string. Hover tooltips (and the trend chart's year click hooks) are kept
//! as [`Hotspot`]s over the drawn shapes. Renderers keep no state of their
//! own.

pub mod bar;
mod frame;
pub mod scatter;
pub mod surface;
pub mod tooltip;
pub mod trend;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub use bar::render_sex_breakdown;
pub use scatter::render_geo;
pub use surface::{Hotspot, Layout, Margins, Shape, Surface};
pub use trend::render_trend;

/// Errors raised while drawing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The SVG backend rejected a drawing operation.
    #[error("Drawing error: {0}")]
    Draw(#[from] DrawingAreaErrorKind<std::io::Error>),
}
