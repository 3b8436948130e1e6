#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Selection state and per-chart aggregators.
//!
//! Every aggregator is a pure function of the immutable record slice and
//! the current [`Selection`]. [`SelectionState`] is the only mutable piece
//! of the pipeline and validates each mutation against the dataset's
//! dimensions.

pub mod aggregate;
pub mod selection;

pub use aggregate::{geo, sex_breakdown, trend};
pub use homicide_dash_analytics_models::Selection;
pub use selection::{SelectionState, default_year, valid_years_for};

use thiserror::Error;

/// Errors raised when a selection mutation would break the invariant that
/// city, race, and year come from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The dataset has no cities or no races to select.
    #[error("Dataset has no selectable cities or races")]
    EmptyDataset,

    /// City is not present in the dataset.
    #[error("Unknown city '{0}'")]
    UnknownCity(String),

    /// Race is not present in the dataset.
    #[error("Unknown race '{0}'")]
    UnknownRace(String),

    /// Year is not present in the dataset.
    #[error("Unknown year {0}")]
    UnknownYear(i32),
}
