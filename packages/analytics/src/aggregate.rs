//! Per-chart aggregators.
//!
//! Each function filters the full record slice by the parts of the
//! selection its chart depends on and returns a small derived series.
//! Nothing is cached between calls.

use std::collections::BTreeMap;

use homicide_dash_analytics_models::{Aggregate, CoordinatePoint, Selection, SexCount, YearCount};
use homicide_dash_dataset_models::HomicideRecord;

/// Homicide counts per year for the selected city, ascending by year.
///
/// Race and year are ignored. Records without a year are skipped.
#[must_use]
pub fn trend(records: &[HomicideRecord], selection: &Selection) -> Aggregate<YearCount> {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();

    for year in records
        .iter()
        .filter(|r| r.city == selection.city)
        .filter_map(|r| r.year)
    {
        *by_year.entry(year).or_default() += 1;
    }

    let series: Vec<YearCount> = by_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect();

    log::debug!("trend[{}]: {} years", selection.city, series.len());

    Aggregate::from_vec(series)
}

/// Homicide counts per victim sex for the selected city, year, and race.
///
/// Sorted by count descending; equal counts are ordered by sex label so the
/// output is deterministic.
#[must_use]
pub fn sex_breakdown(records: &[HomicideRecord], selection: &Selection) -> Aggregate<SexCount> {
    let Some(year) = selection.year else {
        return Aggregate::NoData;
    };

    let mut by_sex: BTreeMap<&str, u64> = BTreeMap::new();

    for sex in records
        .iter()
        .filter(|r| {
            r.city == selection.city
                && r.year == Some(year)
                && r.victim_race.as_deref() == Some(selection.race.as_str())
        })
        .filter_map(|r| r.victim_sex.as_deref())
    {
        *by_sex.entry(sex).or_default() += 1;
    }

    let mut series: Vec<SexCount> = by_sex
        .into_iter()
        .map(|(sex, count)| SexCount {
            sex: sex.to_owned(),
            count,
        })
        .collect();
    series.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.sex.cmp(&b.sex)));

    log::debug!(
        "sex_breakdown[{}/{}/{year}]: {} categories",
        selection.city,
        selection.race,
        series.len()
    );

    Aggregate::from_vec(series)
}

/// Locations of homicides in the selected city and year.
///
/// Race is ignored. Records missing either coordinate are skipped.
#[must_use]
pub fn geo(records: &[HomicideRecord], selection: &Selection) -> Aggregate<CoordinatePoint> {
    let Some(year) = selection.year else {
        return Aggregate::NoData;
    };

    let points: Vec<CoordinatePoint> = records
        .iter()
        .filter(|r| r.city == selection.city && r.year == Some(year))
        .filter_map(|r| {
            let (lon, lat) = r.coordinates()?;
            Some(CoordinatePoint {
                city: r.city.clone(),
                lon,
                lat,
            })
        })
        .collect();

    log::debug!("geo[{}/{year}]: {} points", selection.city, points.len());

    Aggregate::from_vec(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(city: &str, race: &str, sex: Option<&str>, date: &str) -> HomicideRecord {
        HomicideRecord::new(
            city,
            Some(race.to_owned()),
            sex.map(str::to_owned),
            date,
            None,
            None,
        )
    }

    fn located(city: &str, date: &str, lat: Option<f64>, lon: Option<f64>) -> HomicideRecord {
        HomicideRecord::new(
            city,
            Some("Black".to_owned()),
            Some("Male".to_owned()),
            date,
            lat,
            lon,
        )
    }

    fn selection(city: &str, race: &str, year: Option<i32>) -> Selection {
        Selection {
            city: city.to_owned(),
            race: race.to_owned(),
            year,
        }
    }

    #[test]
    fn small_dataset_scenario() {
        let records = vec![
            rec("A", "White", Some("M"), "2019"),
            rec("A", "White", Some("M"), "2019"),
            rec("A", "White", Some("F"), "2020"),
        ];
        let sel = selection("A", "White", Some(2019));

        assert_eq!(
            sex_breakdown(&records, &sel),
            Aggregate::Data(vec![SexCount {
                sex: "M".to_owned(),
                count: 2,
            }])
        );
        assert_eq!(
            trend(&records, &sel),
            Aggregate::Data(vec![
                YearCount {
                    year: 2019,
                    count: 2,
                },
                YearCount {
                    year: 2020,
                    count: 1,
                },
            ])
        );
    }

    #[test]
    fn trend_counts_match_city_records() {
        let records = vec![
            rec("A", "White", Some("M"), "2012"),
            rec("A", "Black", Some("M"), "2010"),
            rec("A", "Black", None, "2012"),
            rec("A", "Black", None, "????"),
            rec("B", "Black", Some("F"), "2011"),
        ];

        let agg = trend(&records, &selection("A", "Black", Some(2010)));
        let years: Vec<i32> = agg.as_slice().iter().map(|p| p.year).collect();
        let total: u64 = agg.as_slice().iter().map(|p| p.count).sum();

        assert_eq!(years, vec![2010, 2012]);
        assert_eq!(total, 3);
        assert!(agg.as_slice().iter().all(|p| p.count > 0));
    }

    #[test]
    fn trend_for_city_without_records_is_no_data() {
        let records = vec![rec("A", "White", Some("M"), "2019")];
        assert!(trend(&records, &selection("Z", "White", Some(2019))).is_no_data());
    }

    #[test]
    fn sex_breakdown_sorts_descending_with_lexical_ties() {
        let records = vec![
            rec("A", "Black", Some("Male"), "2015"),
            rec("A", "Black", Some("Unknown"), "2015"),
            rec("A", "Black", Some("Male"), "2015"),
            rec("A", "Black", Some("Female"), "2015"),
            rec("A", "Black", None, "2015"),
            rec("A", "White", Some("Female"), "2015"),
            rec("A", "Black", Some("Female"), "2016"),
        ];

        let agg = sex_breakdown(&records, &selection("A", "Black", Some(2015)));
        let labels: Vec<(&str, u64)> = agg
            .as_slice()
            .iter()
            .map(|s| (s.sex.as_str(), s.count))
            .collect();

        assert_eq!(labels, vec![("Male", 2), ("Female", 1), ("Unknown", 1)]);
    }

    #[test]
    fn sex_breakdown_without_matches_is_no_data() {
        let records = vec![rec("A", "Black", Some("Male"), "2015")];
        assert!(sex_breakdown(&records, &selection("A", "White", Some(2015))).is_no_data());
        assert!(sex_breakdown(&records, &selection("A", "Black", None)).is_no_data());
    }

    #[test]
    fn geo_skips_records_missing_coordinates() {
        let records = vec![
            located("A", "2015", Some(39.3), Some(-76.6)),
            located("A", "2015", None, Some(-76.6)),
            located("A", "2015", Some(39.3), None),
            located("A", "2015", Some(39.2), Some(-76.5)),
            located("A", "2016", Some(39.2), Some(-76.5)),
            located("B", "2015", Some(39.2), Some(-76.5)),
        ];

        let agg = geo(&records, &selection("A", "Hispanic", Some(2015)));

        assert_eq!(agg.len(), 2);
        assert!(agg.as_slice().iter().all(|p| p.city == "A"));
        assert!(
            agg.as_slice()
                .iter()
                .all(|p| p.lat.is_finite() && p.lon.is_finite())
        );
    }

    #[test]
    fn geo_without_coordinates_is_no_data() {
        let records = vec![located("A", "2015", None, None)];
        assert!(geo(&records, &selection("A", "Black", Some(2015))).is_no_data());
    }
}
