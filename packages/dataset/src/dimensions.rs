//! Distinct filter values derived from the loaded records.

use std::collections::BTreeSet;

use homicide_dash_dataset_models::{Dimensions, HomicideRecord};

/// Computes the distinct sorted years, cities, and races in `records`.
///
/// Absent years and races are skipped. Empty input yields empty
/// collections.
#[must_use]
pub fn extract_dimensions(records: &[HomicideRecord]) -> Dimensions {
    let mut years = BTreeSet::new();
    let mut cities = BTreeSet::new();
    let mut races = BTreeSet::new();

    for record in records {
        if let Some(year) = record.year {
            years.insert(year);
        }
        cities.insert(record.city.as_str());
        if let Some(race) = record.victim_race.as_deref() {
            races.insert(race);
        }
    }

    let dimensions = Dimensions {
        years: years.into_iter().collect(),
        cities: cities.into_iter().map(str::to_owned).collect(),
        races: races.into_iter().map(str::to_owned).collect(),
    };

    log::debug!(
        "Extracted {} years, {} cities, {} races",
        dimensions.years.len(),
        dimensions.cities.len(),
        dimensions.races.len()
    );

    dimensions
}
