//! Composition of the dashboard page.
//!
//! The page is a single self-contained HTML document: the city and race
//! controls (populated from the dataset's dimensions, current values
//! selected), a line describing the selection, and the three chart surfaces
//! inlined as SVG.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use homicide_dash_analytics_models::ChartId;
use homicide_dash_chart::surface::escape;

use crate::{Dashboard, DashboardConfig, DashboardError};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 24px; }
.controls { display: flex; gap: 16px; margin-bottom: 12px; }
.charts { display: flex; flex-wrap: wrap; gap: 16px; }
.chart { border: 1px solid #ddd; }
.clickable { cursor: pointer; }
";

fn select(out: &mut String, id: &str, label: &str, options: &[String], current: &str) {
    let _ = write!(out, "<label for=\"{id}\">{label} <select id=\"{id}\">");
    for option in options {
        let value = escape(option);
        if option == current {
            let _ = write!(out, "<option value=\"{value}\" selected>{value}</option>");
        } else {
            let _ = write!(out, "<option value=\"{value}\">{value}</option>");
        }
    }
    out.push_str("</select></label>");
}

/// Renders the full HTML page for the dashboard's current state.
#[must_use]
pub fn render_page(dashboard: &Dashboard) -> String {
    let selection = dashboard.selection();
    let dimensions = dashboard.dimensions();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Homicide Dashboard</title>\n<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n<h1>Homicide Dashboard</h1>\n");

    out.push_str("<div class=\"controls\">");
    select(
        &mut out,
        "city-select",
        "City",
        &dimensions.cities,
        &selection.city,
    );
    select(
        &mut out,
        "race-select",
        "Victim race",
        &dimensions.races,
        &selection.race,
    );
    out.push_str("</div>\n");

    let year = selection
        .year
        .map_or_else(|| "none".to_owned(), |y| y.to_string());
    let _ = writeln!(
        out,
        "<p class=\"selection\">City: {} &middot; Race: {} &middot; Year: {year}</p>",
        escape(&selection.city),
        escape(&selection.race),
    );

    out.push_str("<div class=\"charts\">\n");
    for chart in ChartId::all() {
        if let Some(surface) = dashboard.surface(*chart) {
            let _ = writeln!(
                out,
                "<div class=\"chart\" data-chart=\"{chart}\">{}</div>",
                surface.to_svg()
            );
        }
    }
    out.push_str("</div>\n</body>\n</html>\n");

    out
}

/// Writes the page (and the standalone SVGs when enabled) to the configured
/// output directory, returning the page path.
///
/// # Errors
///
/// Returns [`DashboardError::Io`] if the directory or a file can't be
/// written.
pub fn write_outputs(
    dashboard: &Dashboard,
    config: &DashboardConfig,
) -> Result<PathBuf, DashboardError> {
    ensure_dir(&config.output_dir)?;

    let page_path = config.page_path();
    std::fs::write(&page_path, render_page(dashboard))?;
    log::info!("Wrote {}", page_path.display());

    if config.write_svgs {
        for chart in ChartId::all() {
            if let Some(surface) = dashboard.surface(*chart) {
                let path = config.output_dir.join(format!("{}.svg", chart.surface_id()));
                std::fs::write(&path, surface.to_svg())?;
                log::debug!("Wrote {}", path.display());
            }
        }
    }

    Ok(page_path)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
