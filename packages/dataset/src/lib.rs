#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dataset loading and dimension extraction for the homicide dashboard.
//!
//! The loader reads a delimited text file into [`HomicideRecord`]s, deriving
//! each record's year from its `reported_date` column. The dimension
//! extractor computes the distinct, sorted filter values that populate the
//! city and race controls.

pub mod dimensions;
pub mod loader;

pub use dimensions::extract_dimensions;
pub use homicide_dash_dataset_models::{Dimensions, HomicideRecord};
pub use loader::{LoadOptions, load_dataset, parse_records};

use thiserror::Error;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// I/O error reading the dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed as delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },
}
