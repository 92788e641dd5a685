//! Console report and session log for the calorie tracker

use super::{CalorieTotals, Meal, Session};
use crate::core::error::Result;
use crate::core::persist::replace_file;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

/// Print the meal table with total and average rows
///
/// # Errors
/// Returns an error if the writer fails.
pub fn print_summary_report(
    out: &mut dyn Write,
    meals: &[Meal],
    totals: &CalorieTotals,
) -> Result<()> {
    writeln!(out, "\n--- Your Daily Calorie Report ---")?;
    writeln!(out, "\nMeal Name\t\tCalories")?;
    writeln!(out, "---------------------------------")?;
    for meal in meals {
        writeln!(out, "{:<15}\t{:>8.0}", meal.name, meal.calories)?;
    }
    writeln!(out, "---------------------------------")?;
    writeln!(out, "{:<15}\t{:>8.0}", "Total:", totals.total)?;
    writeln!(out, "{:<15}\t{:>8.2}", "Average:", totals.average)?;
    writeln!(out, "\n")?;
    Ok(())
}

/// Render the session log text
#[must_use]
pub fn render_log(session: &Session) -> String {
    let mut doc = String::new();
    let timestamp = session.recorded_at.format("%Y-%m-%d %H:%M:%S");

    // Writing into a String cannot fail
    let _ = writeln!(doc, "--- Calorie Tracker Log ---");
    let _ = writeln!(doc, "Session Time: {timestamp}");
    let _ = writeln!(doc, "---------------------------\n");

    let _ = writeln!(doc, "Meal Details:");
    for meal in &session.meals {
        let _ = writeln!(doc, "- {}: {:.0} calories", meal.name, meal.calories);
    }

    let _ = writeln!(doc, "\nSummary:");
    let _ = writeln!(doc, "Total Calories: {:.0}", session.totals.total);
    let _ = writeln!(doc, "Average Calories: {:.2}", session.totals.average);
    let _ = writeln!(doc, "Daily Limit: {:.0}", session.limit);

    let _ = writeln!(doc, "\nStatus:");
    let _ = writeln!(doc, "{}", session.status);
    doc
}

/// Write the session log to `path`, replacing any earlier log
///
/// # Errors
/// Returns [`TallyError::Export`](crate::core::error::TallyError::Export) if
/// the file cannot be written; an earlier log at `path` is left intact.
pub fn save_log(session: &Session, path: &Path) -> Result<()> {
    replace_file(path, &render_log(session))
}
