//! Daily calorie tracker
//!
//! Collects meals, totals them, checks the total against a daily limit,
//! prints a report and optionally saves the session to a log file.

pub mod input;
pub mod report;
pub mod summary;

use crate::core::console::Console;
use crate::core::error::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub use input::collect_meals;
pub use report::{print_summary_report, render_log, save_log};
pub use summary::{check_limit, CalorieTotals, LimitStatus};

/// File name the session log is written to unless configured otherwise
pub const DEFAULT_LOG_FILE: &str = "calorie_log.txt";

/// One logged meal
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    /// Meal name as typed (duplicates allowed)
    pub name: String,
    /// Calories, never negative
    pub calories: f64,
}

impl Meal {
    /// Create a meal
    #[must_use]
    pub fn new(name: impl Into<String>, calories: f64) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }
}

/// Everything recorded in one tracker run
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Meals in entry order
    pub meals: Vec<Meal>,
    /// Sum and mean of the meal calories
    pub totals: CalorieTotals,
    /// Daily limit the total was compared against
    pub limit: f64,
    /// Outcome of the limit check
    pub status: LimitStatus,
    /// When the session was summarised
    pub recorded_at: DateTime<Local>,
}

impl Session {
    /// Build a session from collected meals and a limit, stamped with the current time
    #[must_use]
    pub fn new(meals: Vec<Meal>, limit: f64) -> Self {
        let totals = CalorieTotals::from_meals(&meals);
        let status = LimitStatus::compare(totals.total, limit);
        Self {
            meals,
            totals,
            limit,
            status,
            recorded_at: Local::now(),
        }
    }
}

/// Settings for one tracker run
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    /// Where an accepted save goes
    pub log_path: PathBuf,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Print the welcome banner
///
/// # Errors
/// Returns an error if the console cannot be written.
pub fn print_welcome(console: &mut Console<'_>) -> Result<()> {
    console.say("------------------------------------------")?;
    console.say("  Welcome to the Daily Calorie Tracker!   ")?;
    console.say("------------------------------------------")?;
    console.say("This tool helps you log your meals and track your total daily calorie intake.")?;
    console.say("\nLet's get started!\n")
}

/// Run the whole tracker flow against a console
///
/// Returns the session that was summarised, whether or not it was saved.
///
/// # Errors
/// Returns an error only when the console itself fails (closed input,
/// unwritable output). Save failures are reported and do not end the run.
pub fn run(console: &mut Console<'_>, options: &TrackerOptions) -> Result<Session> {
    print_welcome(console)?;

    let meals = collect_meals(console)?;
    let totals = CalorieTotals::from_meals(&meals);
    crate::info!(
        "Collected {} meals totalling {:.0} calories",
        meals.len(),
        totals.total
    );

    print_summary_report(console.out(), &meals, &totals)?;

    let (limit, _) = check_limit(console, totals.total)?;
    let session = Session::new(meals, limit);

    offer_save(console, &session, &options.log_path)?;

    console.say("\nThank you for using the Calorie Tracker!")?;
    Ok(session)
}

fn offer_save(console: &mut Console<'_>, session: &Session, log_path: &Path) -> Result<()> {
    let prompt = format!(
        "Would you like to save this session to '{}'? (yes/no): ",
        log_path.display()
    );
    let wants_save = console.confirm(&prompt, Some("Invalid input. Please enter 'yes' or 'no'."))?;

    if !wants_save {
        return console.say("\nReport not saved.");
    }

    match save_log(session, log_path) {
        Ok(()) => {
            crate::info!("Calorie log written to {}", log_path.display());
            console.say(format!(
                "\nSuccessfully saved report to '{}'",
                log_path.display()
            ))
        }
        Err(e) => {
            crate::error!("Saving calorie log to {} failed: {e}", log_path.display());
            console.say(format!("\nError: {e}"))
        }
    }
}
