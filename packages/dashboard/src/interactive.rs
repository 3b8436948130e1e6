//! Interactive session for the dashboard.
//!
//! Uses `dialoguer` prompts in place of the page's dropdowns and chart
//! clicks. After every action the affected charts are redrawn and the page
//! is rewritten, so a browser pointed at the output file (with reload)
//! follows along.

use dialoguer::Select;
use homicide_dash_analytics_models::ChartId;

use crate::page::write_outputs;
use crate::{Dashboard, DashboardConfig, Trigger};

/// Actions offered by the main menu.
enum Action {
    ChangeCity,
    ChangeRace,
    ClickYear,
    Quit,
}

impl Action {
    const ALL: &[Self] = &[Self::ChangeCity, Self::ChangeRace, Self::ClickYear, Self::Quit];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ChangeCity => "Change city",
            Self::ChangeRace => "Change victim race",
            Self::ClickYear => "Select a year on the trend chart",
            Self::Quit => "Quit",
        }
    }
}

fn pick<T: ToString + PartialEq>(
    prompt: &str,
    options: &[T],
    current: Option<&T>,
) -> std::io::Result<Option<usize>> {
    if options.is_empty() {
        println!("Nothing to choose from.");
        return Ok(None);
    }
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let default = current
        .and_then(|c| options.iter().position(|o| o == c))
        .unwrap_or(0);

    Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact_opt()
        .map_err(|e| std::io::Error::other(e.to_string()))
}

fn describe(charts: &[ChartId]) -> String {
    charts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs the interactive menu loop until the user quits.
///
/// Writes the page once up front, then again after every accepted action.
///
/// # Errors
///
/// Returns an error if terminal interaction or writing the page fails.
pub fn run(
    dashboard: &mut Dashboard,
    config: &DashboardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = write_outputs(dashboard, config)?;
    println!("Dashboard written to {}", page.display());

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    loop {
        let selection = dashboard.selection().clone();
        println!();
        println!(
            "City: {} | Race: {} | Year: {}",
            selection.city,
            selection.race,
            selection
                .year
                .map_or_else(|| "none".to_owned(), |y| y.to_string())
        );

        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        let trigger = match Action::ALL[idx] {
            Action::ChangeCity => {
                let cities = dashboard.dimensions().cities.clone();
                pick("City", &cities, Some(&selection.city))?
                    .map(|i| Trigger::CityChanged(cities[i].clone()))
            }
            Action::ChangeRace => {
                let races = dashboard.dimensions().races.clone();
                pick("Victim race", &races, Some(&selection.race))?
                    .map(|i| Trigger::RaceChanged(races[i].clone()))
            }
            Action::ClickYear => {
                let years = dashboard.clickable_years();
                pick("Year", &years, selection.year.as_ref())?
                    .map(|i| Trigger::YearClicked(years[i]))
            }
            Action::Quit => break,
        };

        let Some(trigger) = trigger else {
            continue;
        };

        match dashboard.dispatch(&trigger) {
            Ok(redrawn) => {
                write_outputs(dashboard, config)?;
                println!("Redrew {}", describe(redrawn));
            }
            Err(e) => {
                log::warn!("Ignoring {trigger}: {e}");
            }
        }
    }

    Ok(())
}
