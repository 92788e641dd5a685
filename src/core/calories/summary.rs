//! Calorie totals and the daily limit check

use super::input::parse_limit;
use super::Meal;
use crate::core::console::Console;
use crate::core::error::Result;
use std::fmt;

/// Sum and mean of a day's meals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieTotals {
    /// Sum of all meal calories
    pub total: f64,
    /// `total / count`, or 0 when there are no meals
    pub average: f64,
}

impl CalorieTotals {
    /// Total and average over `meals`
    #[must_use]
    pub fn from_meals(meals: &[Meal]) -> Self {
        Self::from_values(meals.iter().map(|m| m.calories))
    }

    /// Total and average over raw calorie values
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (total, count) = values
            .into_iter()
            .fold((0.0, 0_u32), |(sum, n), value| (sum + value, n + 1));
        let average = if count == 0 {
            0.0
        } else {
            total / f64::from(count)
        };
        Self { total, average }
    }
}

/// Where the day's total landed relative to the limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitStatus {
    /// Total exceeded the limit by `by` calories
    Over {
        /// `total - limit`
        by: f64,
        /// The limit that was checked
        limit: f64,
    },
    /// Total was at or below the limit, `by` calories to spare
    Under {
        /// `limit - total`
        by: f64,
        /// The limit that was checked
        limit: f64,
    },
}

impl LimitStatus {
    /// Compare a total with a limit; equal counts as under by 0
    #[must_use]
    pub fn compare(total: f64, limit: f64) -> Self {
        if total > limit {
            Self::Over {
                by: total - limit,
                limit,
            }
        } else {
            Self::Under {
                by: limit - total,
                limit,
            }
        }
    }

    /// Whether the limit was exceeded
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }

    /// Compact form, e.g. `over by 200`
    #[must_use]
    pub fn short(&self) -> String {
        match self {
            Self::Over { by, .. } => format!("over by {by:.0}"),
            Self::Under { by, .. } => format!("under by {by:.0}"),
        }
    }

    /// Banner border line for this outcome
    #[must_use]
    pub fn border(&self) -> String {
        let fill = if self.is_over() { "*" } else { "-" };
        fill.repeat(50)
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over { by, limit } => write!(
                f,
                "Warning: You went {by:.0} calories over your limit of {limit:.0}."
            ),
            Self::Under { by, limit } => write!(
                f,
                "Success! You are {by:.0} calories under your limit of {limit:.0}."
            ),
        }
    }
}

/// Ask for the daily limit, compare it with `total` and print the banner
///
/// # Errors
/// Returns an error if the console fails or input ends early.
pub fn check_limit(console: &mut Console<'_>, total: f64) -> Result<(f64, LimitStatus)> {
    let limit = console.ask_until("What is your daily calorie limit? ", parse_limit)?;
    console.blank()?;

    let status = LimitStatus::compare(total, limit);
    crate::info!("Daily limit {limit:.0}: {}", status.short());

    let border = status.border();
    console.say(&border)?;
    console.say(status.to_string())?;
    console.say(&border)?;

    Ok((limit, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_are_sum_and_mean() {
        let totals = CalorieTotals::from_values([300.0, 450.0, 750.0]);
        assert!((totals.total - 1500.0).abs() < f64::EPSILON);
        assert!((totals.average - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_totals_have_zero_average() {
        let totals = CalorieTotals::from_meals(&[]);
        assert!(totals.total.abs() < f64::EPSILON);
        assert!(totals.average.abs() < f64::EPSILON);
    }

    #[test]
    fn over_and_under_messages() {
        assert_eq!(LimitStatus::compare(2000.0, 1800.0).short(), "over by 200");
        assert_eq!(LimitStatus::compare(1500.0, 1800.0).short(), "under by 300");
        assert_eq!(
            LimitStatus::compare(2000.0, 1800.0).to_string(),
            "Warning: You went 200 calories over your limit of 1800."
        );
        assert_eq!(
            LimitStatus::compare(1500.0, 1800.0).to_string(),
            "Success! You are 300 calories under your limit of 1800."
        );
    }

    #[test]
    fn exact_limit_counts_as_under() {
        let status = LimitStatus::compare(1800.0, 1800.0);
        assert!(!status.is_over());
        assert_eq!(status.short(), "under by 0");
    }

    #[test]
    fn check_limit_prints_banner() {
        let mut out = Vec::new();
        let mut console = Console::new("-5\n1800\n".as_bytes(), &mut out);
        let (limit, status) = check_limit(&mut console, 2000.0).expect("check");
        drop(console);

        assert!((limit - 1800.0).abs() < f64::EPSILON);
        assert!(status.is_over());
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Please enter a positive number for your limit."));
        assert_eq!(text.matches(&"*".repeat(50)).count(), 2);
    }
}
