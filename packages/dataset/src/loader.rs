//! Delimited-text loader for the homicide dataset.
//!
//! Reads the file once, maps each row to a [`HomicideRecord`] keyed by the
//! header row, and returns the full record set. Empty cells become `None`;
//! coordinates that don't parse as numbers are treated as absent rather
//! than failing the whole load.
//!
//! Rows are read as raw bytes and only the columns the dashboard uses are
//! decoded (lossily), so Latin-1 text in any cell never aborts the load.

use std::path::Path;

use homicide_dash_dataset_models::HomicideRecord;

use crate::DatasetError;

const COL_CITY: &str = "city";
const COL_VICTIM_RACE: &str = "victim_race";
const COL_VICTIM_SEX: &str = "victim_sex";
const COL_REPORTED_DATE: &str = "reported_date";
const COL_LAT: &str = "lat";
const COL_LON: &str = "lon";

/// Options controlling how the dataset file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte (defaults to `,`).
    pub delimiter: u8,
    /// Optional cap on the number of records to parse.
    pub max_records: Option<u64>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_records: None,
        }
    }
}

impl LoadOptions {
    /// Sets the field delimiter (e.g. `b'\t'` for TSV files).
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Limits the number of records that will be parsed from the file.
    #[must_use]
    pub const fn with_max_records(mut self, max: u64) -> Self {
        self.max_records = Some(max);
        self
    }
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    city: usize,
    victim_race: usize,
    victim_sex: usize,
    reported_date: usize,
    lat: usize,
    lon: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::ByteRecord) -> Result<Self, DatasetError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| String::from_utf8_lossy(h).trim().eq_ignore_ascii_case(column))
                .ok_or(DatasetError::MissingColumn { column })
        };

        Ok(Self {
            city: find(COL_CITY)?,
            victim_race: find(COL_VICTIM_RACE)?,
            victim_sex: find(COL_VICTIM_SEX)?,
            reported_date: find(COL_REPORTED_DATE)?,
            lat: find(COL_LAT)?,
            lon: find(COL_LON)?,
        })
    }
}

fn cell(row: &csv::ByteRecord, idx: usize) -> Option<String> {
    let text = String::from_utf8_lossy(row.get(idx)?);
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn parse_coordinate(value: Option<String>) -> Option<f64> {
    value?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses records from any reader producing delimited text with a header
/// row.
///
/// Rows without a city are skipped with a warning, since a record that can
/// never match a city filter contributes nothing to any chart.
///
/// # Errors
///
/// Returns [`DatasetError::MissingColumn`] if a required column is absent,
/// or [`DatasetError::Csv`] if the text is malformed.
pub fn parse_records<R: std::io::Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<Vec<HomicideRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::resolve(reader.byte_headers()?)?;

    let mut records = Vec::new();
    let mut skipped: u64 = 0;

    for result in reader.byte_records() {
        if let Some(max) = options.max_records
            && records.len() as u64 >= max
        {
            log::info!("Reached max_records limit ({max}), stopping parse");
            break;
        }

        let row = result?;

        let Some(city) = cell(&row, columns.city) else {
            skipped += 1;
            continue;
        };

        records.push(HomicideRecord::new(
            city,
            cell(&row, columns.victim_race),
            cell(&row, columns.victim_sex),
            cell(&row, columns.reported_date).unwrap_or_default(),
            parse_coordinate(cell(&row, columns.lat)),
            parse_coordinate(cell(&row, columns.lon)),
        ));
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} rows with no city");
    }

    Ok(records)
}

/// Loads the dataset file at `path`.
///
/// This is the only suspending step of the dashboard: the file is read
/// asynchronously, then parsed in one pass.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read or parsed.
pub async fn load_dataset(
    path: &Path,
    options: &LoadOptions,
) -> Result<Vec<HomicideRecord>, DatasetError> {
    log::info!("Loading dataset from {}", path.display());

    let bytes = tokio::fs::read(path).await?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let records = parse_records(bytes.as_slice(), options)?;

    let without_year = records.iter().filter(|r| r.year.is_none()).count();
    if without_year > 0 {
        log::warn!("{without_year} records have an unparseable reported_date");
    }

    log::info!("Loaded {} records from {}", records.len(), path.display());

    Ok(records)
}
