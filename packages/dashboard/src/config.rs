//! Dashboard configuration.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! the `HOMICIDE_DASH_DATA` / `HOMICIDE_DASH_OUTPUT` environment variables.
//! Command-line flags are applied last by the binary.

use std::path::{Path, PathBuf};

use homicide_dash_chart::Layout;
use homicide_dash_dataset::LoadOptions;
use serde::{Deserialize, Serialize};

use crate::DashboardError;

/// Environment variable overriding [`DashboardConfig::data_path`].
pub const ENV_DATA_PATH: &str = "HOMICIDE_DASH_DATA";
/// Environment variable overriding [`DashboardConfig::output_dir`].
pub const ENV_OUTPUT_DIR: &str = "HOMICIDE_DASH_OUTPUT";

/// File name of the composed dashboard page.
pub const PAGE_FILE_NAME: &str = "dashboard.html";

/// Settings for loading the dataset and writing the rendered dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DashboardConfig {
    /// Path of the delimited dataset file.
    pub data_path: PathBuf,
    /// Directory the page (and optional SVGs) are written to.
    pub output_dir: PathBuf,
    /// Field delimiter; only the first byte is used.
    pub delimiter: String,
    /// Optional cap on the number of records loaded.
    pub max_records: Option<u64>,
    /// City selected at startup (first city when unset).
    pub initial_city: Option<String>,
    /// Race selected at startup (first race when unset).
    pub initial_race: Option<String>,
    /// Also write each chart as a standalone `.svg` file.
    pub write_svgs: bool,
    /// Size and margins shared by every chart surface.
    pub layout: Layout,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/homicide.csv"),
            output_dir: PathBuf::from("data/generated"),
            delimiter: ",".to_owned(),
            max_records: None,
            initial_city: None,
            initial_race: None,
            write_svgs: false,
            layout: Layout::default(),
        }
    }
}

impl DashboardConfig {
    /// Parses a configuration from TOML text. Missing keys keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Toml`] if the text is not valid TOML for
    /// this structure, or [`DashboardError::Config`] if a value is invalid.
    pub fn from_toml(text: &str) -> Result<Self, DashboardError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path` if given, then applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, DashboardError> {
        let config = match path {
            Some(path) => {
                log::info!("Reading config from {}", path.display());
                Self::from_toml(&std::fs::read_to_string(path)?)?
            }
            None => Self::default(),
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_DATA_PATH).filter(|v| !v.is_empty()) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        self
    }

    /// Checks values that deserialize fine but can't be used.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] describing the first bad value.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.delimiter.len() != 1 {
            return Err(DashboardError::Config {
                message: format!(
                    "delimiter must be a single byte, got '{}'",
                    self.delimiter
                ),
            });
        }
        if self.layout.inner_width() == 0 || self.layout.inner_height() == 0 {
            return Err(DashboardError::Config {
                message: "layout margins leave no room for the plot area".to_owned(),
            });
        }
        Ok(())
    }

    /// Loader options derived from this configuration.
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        let mut options = LoadOptions::default();
        if let Some(byte) = self.delimiter.as_bytes().first() {
            options = options.with_delimiter(*byte);
        }
        if let Some(max) = self.max_records {
            options = options.with_max_records(max);
        }
        options
    }

    /// Path of the composed dashboard page.
    #[must_use]
    pub fn page_path(&self) -> PathBuf {
        self.output_dir.join(PAGE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let config = DashboardConfig::default();
        assert_eq!(config.layout.width, 400);
        assert_eq!(config.layout.margins.left, 70);
        assert_eq!(config.load_options(), LoadOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let config = DashboardConfig::from_toml(
            r#"
data_path = "fixtures/homicide.tsv"
delimiter = "\t"
initial_city = "Baltimore"
write_svgs = true

[layout]
width = 500
"#,
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("fixtures/homicide.tsv"));
        assert_eq!(config.initial_city.as_deref(), Some("Baltimore"));
        assert!(config.write_svgs);
        assert_eq!(config.layout.width, 500);
        assert_eq!(config.layout.height, 400);
        assert_eq!(config.load_options().delimiter, b'\t');
        assert_eq!(config.output_dir, PathBuf::from("data/generated"));
    }

    #[test]
    fn rejects_multi_byte_delimiter() {
        let err = DashboardConfig::from_toml("delimiter = \";;\"").unwrap_err();
        assert!(matches!(err, DashboardError::Config { .. }));
    }

    #[test]
    fn rejects_oversized_margins() {
        let err =
            DashboardConfig::from_toml("[layout]\nwidth = 50\n").unwrap_err();
        assert!(matches!(err, DashboardError::Config { .. }));
    }

    #[test]
    fn rejects_unknown_types() {
        let err = DashboardConfig::from_toml("write_svgs = \"yes\"").unwrap_err();
        assert!(matches!(err, DashboardError::Toml(_)));
    }

    #[test]
    fn environment_overrides_paths() {
        let config = DashboardConfig::default().with_overrides(|key| match key {
            ENV_DATA_PATH => Some("/srv/homicide.csv".to_owned()),
            ENV_OUTPUT_DIR => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.data_path, PathBuf::from("/srv/homicide.csv"));
        assert_eq!(config.output_dir, PathBuf::from("data/generated"));
    }

    #[test]
    fn page_lives_in_output_dir() {
        let config = DashboardConfig {
            output_dir: PathBuf::from("out"),
            ..DashboardConfig::default()
        };
        assert_eq!(config.page_path(), PathBuf::from("out/dashboard.html"));
    }
}
