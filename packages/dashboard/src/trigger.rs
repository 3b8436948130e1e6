//! User interactions and the charts each one invalidates.

use homicide_dash_analytics_models::ChartId;

/// A user interaction that mutates the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The city dropdown changed. Re-derives the year.
    CityChanged(String),
    /// The race dropdown changed. Keeps the year.
    RaceChanged(String),
    /// A point on the trend chart was clicked.
    YearClicked(i32),
}

impl Trigger {
    /// Charts that must be re-aggregated and redrawn after this trigger.
    ///
    /// The trend chart depends only on the city; the bar chart on city,
    /// year, and race; the scatterplot on city and year.
    #[must_use]
    pub const fn affected_charts(&self) -> &'static [ChartId] {
        match self {
            Self::CityChanged(_) => &[ChartId::Trend, ChartId::SexBreakdown, ChartId::Geo],
            Self::RaceChanged(_) => &[ChartId::SexBreakdown],
            Self::YearClicked(_) => &[ChartId::SexBreakdown, ChartId::Geo],
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CityChanged(city) => write!(f, "city -> {city}"),
            Self::RaceChanged(race) => write!(f, "race -> {race}"),
            Self::YearClicked(year) => write!(f, "year -> {year}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_change_redraws_everything() {
        let affected = Trigger::CityChanged("A".to_owned()).affected_charts();
        for chart in ChartId::all() {
            assert!(affected.contains(chart), "{chart} not redrawn");
        }
    }

    #[test]
    fn race_change_only_redraws_bar_chart() {
        assert_eq!(
            Trigger::RaceChanged("White".to_owned()).affected_charts(),
            &[ChartId::SexBreakdown]
        );
    }

    #[test]
    fn year_click_skips_trend_chart() {
        let affected = Trigger::YearClicked(2015).affected_charts();
        assert!(!affected.contains(&ChartId::Trend));
        assert!(affected.contains(&ChartId::SexBreakdown));
        assert!(affected.contains(&ChartId::Geo));
    }
}
