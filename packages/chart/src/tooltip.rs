//! Hover tooltip text.
//!
//! Each tooltip is fully determined by the hovered item and the current
//! selection.

use homicide_dash_analytics_models::{CoordinatePoint, Selection, SexCount, YearCount};

fn plural(count: u64) -> &'static str {
    if count == 1 { "homicide" } else { "homicides" }
}

/// Tooltip for a point on the yearly trend line.
#[must_use]
pub fn trend_tooltip(selection: &Selection, point: &YearCount) -> String {
    format!(
        "{}, {}: {} {}",
        selection.city,
        point.year,
        point.count,
        plural(point.count)
    )
}

/// Tooltip for a bar of the sex breakdown.
#[must_use]
pub fn sex_tooltip(selection: &Selection, bar: &SexCount) -> String {
    let year = selection
        .year
        .map_or_else(|| "all years".to_owned(), |y| y.to_string());
    format!(
        "{}: {} {} victims in {}, {}",
        bar.sex, bar.count, selection.race, selection.city, year
    )
}

/// Tooltip for a dot on the scatterplot.
#[must_use]
pub fn geo_tooltip(point: &CoordinatePoint) -> String {
    format!("{} ({:.4}, {:.4})", point.city, point.lat, point.lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection {
            city: "Baltimore".to_owned(),
            race: "Black".to_owned(),
            year: Some(2015),
        }
    }

    #[test]
    fn trend_text() {
        let text = trend_tooltip(
            &selection(),
            &YearCount {
                year: 2015,
                count: 344,
            },
        );
        assert_eq!(text, "Baltimore, 2015: 344 homicides");
    }

    #[test]
    fn singular_count() {
        let text = trend_tooltip(
            &selection(),
            &YearCount {
                year: 2016,
                count: 1,
            },
        );
        assert_eq!(text, "Baltimore, 2016: 1 homicide");
    }

    #[test]
    fn sex_text_includes_context() {
        let text = sex_tooltip(
            &selection(),
            &SexCount {
                sex: "Male".to_owned(),
                count: 12,
            },
        );
        assert_eq!(text, "Male: 12 Black victims in Baltimore, 2015");
    }

    #[test]
    fn geo_text() {
        let text = geo_tooltip(&CoordinatePoint {
            city: "Baltimore".to_owned(),
            lon: -76.612_345,
            lat: 39.290_123,
        });
        assert_eq!(text, "Baltimore (39.2901, -76.6123)");
    }
}
