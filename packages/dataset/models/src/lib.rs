#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Homicide record and filter dimension types.
//!
//! A [`HomicideRecord`] is one row of the input dataset after parsing and
//! year derivation. Records are loaded once and never mutated; every chart
//! aggregate is recomputed from the full record slice.

use serde::{Deserialize, Serialize};

/// A single homicide incident as loaded from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomicideRecord {
    /// City the homicide was reported in.
    pub city: String,
    /// Victim race as recorded by the reporting agency.
    pub victim_race: Option<String>,
    /// Victim sex as recorded by the reporting agency.
    pub victim_sex: Option<String>,
    /// Raw report date (e.g. `"20100504"`), first four characters are the year.
    pub reported_date: String,
    /// Year derived from [`Self::reported_date`], `None` if unparseable.
    pub year: Option<i32>,
    /// Latitude of the incident.
    pub lat: Option<f64>,
    /// Longitude of the incident.
    pub lon: Option<f64>,
}

impl HomicideRecord {
    /// Builds a record, deriving [`Self::year`] from `reported_date`.
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        victim_race: Option<String>,
        victim_sex: Option<String>,
        reported_date: impl Into<String>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Self {
        let reported_date = reported_date.into();
        let year = year_from_reported_date(&reported_date);
        Self {
            city: city.into(),
            victim_race,
            victim_sex,
            reported_date,
            year,
            lat,
            lon,
        }
    }

    /// Returns `(lon, lat)` when both coordinates are present and finite.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lon = self.lon.filter(|v| v.is_finite())?;
        let lat = self.lat.filter(|v| v.is_finite())?;
        Some((lon, lat))
    }
}

/// Derives the year from the leading four characters of a report date.
///
/// Returns `None` when the string is shorter than four characters or the
/// prefix is not all ASCII digits.
#[must_use]
pub fn year_from_reported_date(reported_date: &str) -> Option<i32> {
    let prefix = reported_date.trim().get(..4)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Distinct selectable values derived from the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Distinct cities, ascending lexical.
    pub cities: Vec<String>,
    /// Distinct victim races, ascending lexical.
    pub races: Vec<String>,
}

impl Dimensions {
    /// Returns `true` if `city` is a selectable city.
    #[must_use]
    pub fn has_city(&self, city: &str) -> bool {
        self.cities.binary_search_by(|c| c.as_str().cmp(city)).is_ok()
    }

    /// Returns `true` if `race` is a selectable race.
    #[must_use]
    pub fn has_race(&self, race: &str) -> bool {
        self.races.binary_search_by(|r| r.as_str().cmp(race)).is_ok()
    }

    /// Returns `true` if `year` appears in the dataset.
    #[must_use]
    pub fn has_year(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    /// Earliest year in the dataset.
    #[must_use]
    pub fn min_year(&self) -> Option<i32> {
        self.years.first().copied()
    }
}
