#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Event wiring for the homicide dashboard.
//!
//! [`Dashboard`] owns the loaded records, the [`SelectionState`], and one
//! [`Surface`] per chart. It is the only component that mutates the
//! selection: each [`Trigger`] is applied, then exactly the charts listed by
//! [`Trigger::affected_charts`] are re-aggregated and redrawn. The composed
//! page is written by [`page::write_outputs`].

pub mod config;
pub mod interactive;
pub mod page;
pub mod trigger;

use std::collections::BTreeMap;

use homicide_dash_analytics::{SelectionError, SelectionState, aggregate};
use homicide_dash_analytics_models::{ChartId, Selection};
use homicide_dash_chart::{
    ChartError, Layout, Surface, render_geo, render_sex_breakdown, render_trend,
};
use homicide_dash_dataset::{DatasetError, extract_dimensions, load_dataset};
use homicide_dash_dataset_models::{Dimensions, HomicideRecord};
use thiserror::Error;

pub use config::DashboardConfig;
pub use trigger::Trigger;

/// Errors that can occur while building or driving the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dataset could not be loaded.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// A selection change was rejected.
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// A chart could not be drawn.
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// The configuration file is not valid TOML.
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configuration value is unusable.
    #[error("Config error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },

    /// Serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (config read or page write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loaded records, current selection, and the latest drawing of each chart.
#[derive(Debug)]
pub struct Dashboard {
    records: Vec<HomicideRecord>,
    state: SelectionState,
    layout: Layout,
    surfaces: BTreeMap<ChartId, Surface>,
}

impl Dashboard {
    /// Builds the dashboard from already loaded records and draws every
    /// chart once.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Selection`] if the records have no city or
    /// race, or if a preferred city/race isn't present, and
    /// [`DashboardError::Chart`] if a chart can't be drawn.
    pub fn new(
        records: Vec<HomicideRecord>,
        layout: Layout,
        preferred_city: Option<&str>,
        preferred_race: Option<&str>,
    ) -> Result<Self, DashboardError> {
        let dimensions = extract_dimensions(&records);
        let state = SelectionState::initial(&records, dimensions, preferred_city, preferred_race)?;

        let mut dashboard = Self {
            records,
            state,
            layout,
            surfaces: BTreeMap::new(),
        };

        for chart in ChartId::all() {
            dashboard.render_chart(*chart)?;
        }

        Ok(dashboard)
    }

    /// Loads the dataset named by `config` and builds the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if loading fails or no valid initial
    /// selection exists.
    pub async fn bootstrap(config: &DashboardConfig) -> Result<Self, DashboardError> {
        config.validate()?;
        let records = load_dataset(&config.data_path, &config.load_options()).await?;
        Self::new(
            records,
            config.layout,
            config.initial_city.as_deref(),
            config.initial_race.as_deref(),
        )
    }

    /// Applies `trigger` and redraws the charts it affects.
    ///
    /// Returns the charts that were redrawn. A rejected trigger leaves the
    /// selection and every surface unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Selection`] if the trigger names a value
    /// that isn't in the dataset, or [`DashboardError::Chart`] if redrawing
    /// fails.
    pub fn dispatch(&mut self, trigger: &Trigger) -> Result<&'static [ChartId], DashboardError> {
        match trigger {
            Trigger::CityChanged(city) => self.state.set_city(&self.records, city)?,
            Trigger::RaceChanged(race) => self.state.set_race(race)?,
            Trigger::YearClicked(year) => self.state.set_year(*year)?,
        }

        log::info!("Selection changed ({trigger})");

        let affected = trigger.affected_charts();
        for chart in affected {
            self.render_chart(*chart)?;
        }

        Ok(affected)
    }

    /// Re-runs one chart's aggregator and renderer.
    fn render_chart(&mut self, chart: ChartId) -> Result<(), ChartError> {
        let selection = self.state.selection();
        let surface = self
            .surfaces
            .entry(chart)
            .or_insert_with(|| Surface::new(chart.surface_id(), self.layout));

        let (items, total) = match chart {
            ChartId::Trend => {
                let data = aggregate::trend(&self.records, selection);
                render_trend(surface, &data, selection)?;
                (data.len(), data.as_slice().iter().map(|p| p.count).sum::<u64>())
            }
            ChartId::SexBreakdown => {
                let data = aggregate::sex_breakdown(&self.records, selection);
                render_sex_breakdown(surface, &data, selection)?;
                (data.len(), data.as_slice().iter().map(|p| p.count).sum::<u64>())
            }
            ChartId::Geo => {
                let data = aggregate::geo(&self.records, selection);
                render_geo(surface, &data, selection)?;
                (data.len(), data.len() as u64)
            }
        };

        if items == 0 {
            log::info!("{chart}: no data");
        } else {
            log::info!("{chart}: {items} items, {total} homicides");
        }

        Ok(())
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        self.state.selection()
    }

    /// Distinct years, cities, and races of the dataset.
    #[must_use]
    pub const fn dimensions(&self) -> &Dimensions {
        self.state.dimensions()
    }

    /// Latest drawing of `chart`.
    #[must_use]
    pub fn surface(&self, chart: ChartId) -> Option<&Surface> {
        self.surfaces.get(&chart)
    }

    /// Years that can be clicked on the trend chart as currently drawn.
    #[must_use]
    pub fn clickable_years(&self) -> Vec<i32> {
        self.surface(ChartId::Trend)
            .map(|surface| {
                surface
                    .hotspots_with_class("clickable")
                    .filter_map(|h| h.data_value("year")?.parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Dimensions as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Json`] if serialization fails.
    pub fn dimensions_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string_pretty(self.dimensions())?)
    }
}
