//! Selection state and the default-year rule.
//!
//! Changing the city re-derives the year. Changing the race does not: the
//! bar chart is the only consumer of the race and shows "no data" for a
//! year without matches instead of jumping to another year.

use std::collections::BTreeSet;

use homicide_dash_analytics_models::Selection;
use homicide_dash_dataset_models::{Dimensions, HomicideRecord};

use crate::SelectionError;

/// Years (ascending) with at least one record matching both `city` and
/// `race`.
#[must_use]
pub fn valid_years_for(records: &[HomicideRecord], city: &str, race: &str) -> Vec<i32> {
    records
        .iter()
        .filter(|r| r.city == city && r.victim_race.as_deref() == Some(race))
        .filter_map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Earliest valid year for `(city, race)`, falling back to the earliest year
/// in the whole dataset.
///
/// Returns `None` only when no record has a parseable year.
#[must_use]
pub fn default_year(
    records: &[HomicideRecord],
    dimensions: &Dimensions,
    city: &str,
    race: &str,
) -> Option<i32> {
    valid_years_for(records, city, race)
        .first()
        .copied()
        .or_else(|| dimensions.min_year())
}

/// The current `{city, race, year}` selection plus the dimensions used to
/// validate changes to it.
#[derive(Debug, Clone)]
pub struct SelectionState {
    selection: Selection,
    dimensions: Dimensions,
}

impl SelectionState {
    /// Builds the initial selection.
    ///
    /// Uses `preferred_city`/`preferred_race` when given, otherwise the first
    /// city and race in sort order. The year comes from [`default_year`].
    ///
    /// # Errors
    ///
    /// * [`SelectionError::EmptyDataset`] if there is no city or race
    /// * [`SelectionError::UnknownCity`] / [`SelectionError::UnknownRace`] if
    ///   a preferred value isn't in the dataset
    pub fn initial(
        records: &[HomicideRecord],
        dimensions: Dimensions,
        preferred_city: Option<&str>,
        preferred_race: Option<&str>,
    ) -> Result<Self, SelectionError> {
        let city = match preferred_city {
            Some(city) if dimensions.has_city(city) => city.to_owned(),
            Some(city) => return Err(SelectionError::UnknownCity(city.to_owned())),
            None => dimensions
                .cities
                .first()
                .cloned()
                .ok_or(SelectionError::EmptyDataset)?,
        };

        let race = match preferred_race {
            Some(race) if dimensions.has_race(race) => race.to_owned(),
            Some(race) => return Err(SelectionError::UnknownRace(race.to_owned())),
            None => dimensions
                .races
                .first()
                .cloned()
                .ok_or(SelectionError::EmptyDataset)?,
        };

        let year = default_year(records, &dimensions, &city, &race);

        log::debug!("Initial selection: city={city} race={race} year={year:?}");

        Ok(Self {
            selection: Selection { city, race, year },
            dimensions,
        })
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Dimensions the selection is validated against.
    #[must_use]
    pub const fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Selects a city and re-derives the year for the current race.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownCity`] and leaves the selection
    /// unchanged if `city` isn't in the dataset.
    pub fn set_city(&mut self, records: &[HomicideRecord], city: &str) -> Result<(), SelectionError> {
        if !self.dimensions.has_city(city) {
            return Err(SelectionError::UnknownCity(city.to_owned()));
        }
        self.selection.year = default_year(records, &self.dimensions, city, &self.selection.race);
        city.clone_into(&mut self.selection.city);
        Ok(())
    }

    /// Selects a race. The year is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownRace`] and leaves the selection
    /// unchanged if `race` isn't in the dataset.
    pub fn set_race(&mut self, race: &str) -> Result<(), SelectionError> {
        if !self.dimensions.has_race(race) {
            return Err(SelectionError::UnknownRace(race.to_owned()));
        }
        race.clone_into(&mut self.selection.race);
        Ok(())
    }

    /// Selects a year directly, as when a trend point is clicked. City and
    /// race are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownYear`] and leaves the selection
    /// unchanged if `year` isn't in the dataset.
    pub fn set_year(&mut self, year: i32) -> Result<(), SelectionError> {
        if !self.dimensions.has_year(year) {
            return Err(SelectionError::UnknownYear(year));
        }
        self.selection.year = Some(year);
        Ok(())
    }
}
