#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Selection and aggregate types shared by the aggregators, the chart
//! renderers, and the event wiring.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The current filter triple driving all three charts.
///
/// `year` is `None` only when the dataset has no parseable years at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Selected city.
    pub city: String,
    /// Selected victim race.
    pub race: String,
    /// Selected year.
    pub year: Option<i32>,
}

/// Homicide count for one year of the selected city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCount {
    /// Calendar year.
    pub year: i32,
    /// Number of homicides.
    pub count: u64,
}

/// Homicide count for one victim sex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SexCount {
    /// Victim sex label as recorded in the dataset.
    pub sex: String,
    /// Number of homicides.
    pub count: u64,
}

/// Location of a single homicide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatePoint {
    /// City of the incident.
    pub city: String,
    /// Longitude.
    pub lon: f64,
    /// Latitude.
    pub lat: f64,
}

/// Result of running an aggregator.
///
/// `Data` is never empty: an aggregator with no matching records returns
/// [`Aggregate::NoData`] so renderers can draw a placeholder instead of
/// empty axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "items")]
pub enum Aggregate<T> {
    /// One or more derived items.
    Data(Vec<T>),
    /// Nothing matched the current selection.
    NoData,
}

impl<T> Aggregate<T> {
    /// Wraps `items`, mapping an empty vector to [`Aggregate::NoData`].
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::NoData
        } else {
            Self::Data(items)
        }
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Items as a slice (empty for [`Aggregate::NoData`]).
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Data(items) => items,
            Self::NoData => &[],
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// The three linked charts of the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ChartId {
    /// Yearly homicide counts for the selected city.
    Trend,
    /// Counts by victim sex for the selected city, year, and race.
    SexBreakdown,
    /// Incident locations for the selected city and year.
    Geo,
}

impl ChartId {
    /// Returns all charts in page order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Trend, Self::SexBreakdown, Self::Geo]
    }

    /// DOM id of the surface container this chart draws into.
    #[must_use]
    pub const fn surface_id(self) -> &'static str {
        match self {
            Self::Trend => "trend-chart",
            Self::SexBreakdown => "sex-chart",
            Self::Geo => "geo-chart",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn empty_vec_is_no_data() {
        let agg: Aggregate<YearCount> = Aggregate::from_vec(Vec::new());
        assert!(agg.is_no_data());
        assert!(agg.is_empty());
    }

    #[test]
    fn non_empty_vec_is_data() {
        let agg = Aggregate::from_vec(vec![YearCount {
            year: 2010,
            count: 3,
        }]);
        assert!(!agg.is_no_data());
        assert_eq!(agg.len(), 1);
        assert_eq!(agg.as_slice()[0].count, 3);
    }

    #[test]
    fn chart_id_strings() {
        assert_eq!(ChartId::SexBreakdown.to_string(), "sex-breakdown");
        assert_eq!(ChartId::from_str("geo").unwrap(), ChartId::Geo);
        assert_eq!(ChartId::Trend.surface_id(), "trend-chart");
    }

    #[test]
    fn surface_ids_are_unique() {
        let mut ids: Vec<&str> = ChartId::all().iter().map(|c| c.surface_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ChartId::all().len());
    }
}
