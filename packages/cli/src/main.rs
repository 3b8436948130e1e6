#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the homicide dashboard.
//!
//! Loads the dataset once, builds the initial selection, and then either
//! renders the page for a single selection, runs the interactive session,
//! or prints the dataset's dimensions.
//!
//! Uses `indicatif-log-bridge` (via [`homicide_dash_cli_utils::init_logger`])
//! so the load spinner and log lines share the terminal cleanly.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use homicide_dash_cli_utils::load_spinner;
use homicide_dash_dashboard::page::write_outputs;
use homicide_dash_dashboard::{Dashboard, DashboardConfig, Trigger, interactive};

#[derive(Parser)]
#[command(name = "homicide_dash", about = "Homicide data-exploration dashboard")]
struct Cli {
    /// TOML configuration file
    #[arg(long, env = "HOMICIDE_DASH_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset file (overrides config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output directory for the page (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write each chart as a standalone SVG
    #[arg(long)]
    svg: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page once for the given selection
    Render {
        /// City to select
        #[arg(long)]
        city: Option<String>,
        /// Victim race to select
        #[arg(long)]
        race: Option<String>,
        /// Year to select, as if clicked on the trend chart
        #[arg(long)]
        year: Option<i32>,
    },
    /// Explore the dataset interactively (default)
    Interactive,
    /// Print the distinct years, cities, and races as JSON
    Dimensions,
}

impl Cli {
    fn apply_overrides(&self, config: &mut DashboardConfig) {
        if let Some(data) = &self.data {
            config.data_path.clone_from(data);
        }
        if let Some(output) = &self.output {
            config.output_dir.clone_from(output);
        }
        if self.svg {
            config.write_svgs = true;
        }
        if let Some(Commands::Render { city, race, .. }) = &self.command {
            if city.is_some() {
                config.initial_city.clone_from(city);
            }
            if race.is_some() {
                config.initial_race.clone_from(race);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = homicide_dash_cli_utils::init_logger();
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let spinner = load_spinner(
        &multi,
        &format!("Loading {}", config.data_path.display()),
    );
    let loaded = Dashboard::bootstrap(&config).await;
    spinner.finish_and_clear();

    let mut dashboard = loaded.inspect_err(|e| log::error!("Failed to start dashboard: {e}"))?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Render { year, .. } => {
            if let Some(year) = year {
                dashboard.dispatch(&Trigger::YearClicked(year))?;
            }
            let page = write_outputs(&dashboard, &config)?;
            println!("Dashboard written to {}", page.display());
        }
        Commands::Interactive => interactive::run(&mut dashboard, &config)?,
        Commands::Dimensions => println!("{}", dashboard.dimensions_json()?),
    }

    Ok(())
}
