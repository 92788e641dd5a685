//! Console rendering for an analysis pass

use super::gradebook::Gradebook;
use super::grading::{join_names, GradeDistribution, GradeReport, PassFail};
use super::stats::{format_median, ClassStats};
use crate::core::error::Result;
use std::io::Write;

/// Width of the rule under the results table header
const TABLE_RULE: usize = 35;

/// Print the statistics block
///
/// # Errors
/// Returns an error if the writer fails.
pub fn print_stats(out: &mut dyn Write, stats: &ClassStats) -> Result<()> {
    let banner = "=".repeat(TABLE_RULE);
    writeln!(out, "\n{banner}")?;
    writeln!(out, "      STATISTICAL ANALYSIS")?;
    writeln!(out, "{banner}")?;
    writeln!(out, "Class Average: {:.2}", stats.average)?;
    writeln!(out, "Class Median: {}", format_median(stats.median))?;
    writeln!(
        out,
        "Highest Score: {} (by {})",
        stats.highest.mark, stats.highest.name
    )?;
    writeln!(
        out,
        "Lowest Score: {} (by {})",
        stats.lowest.mark, stats.lowest.name
    )?;
    Ok(())
}

/// Print students per grade, A to F
///
/// # Errors
/// Returns an error if the writer fails.
pub fn print_distribution(out: &mut dyn Write, distribution: &GradeDistribution) -> Result<()> {
    writeln!(out, "\n--- Grade Distribution ---")?;
    for (grade, count) in distribution.iter() {
        writeln!(out, "Grade {grade}: {count} student(s)")?;
    }
    Ok(())
}

/// Print the pass and fail lists
///
/// # Errors
/// Returns an error if the writer fails.
pub fn print_pass_fail(out: &mut dyn Write, split: &PassFail) -> Result<()> {
    writeln!(out, "\n--- Pass/Fail Analysis ---")?;
    writeln!(
        out,
        "Total Passed ({}): {}",
        split.passed.len(),
        join_names(&split.passed)
    )?;
    writeln!(
        out,
        "Total Failed ({}): {}",
        split.failed.len(),
        join_names(&split.failed)
    )?;
    Ok(())
}

/// Print the name/mark/grade table in gradebook order
///
/// `grades` must come from [`assign_grades`](super::grading::assign_grades) on `book`.
///
/// # Errors
/// Returns an error if the writer fails.
pub fn print_results_table(
    out: &mut dyn Write,
    book: &Gradebook,
    grades: &GradeReport,
) -> Result<()> {
    writeln!(out, "\n--- Full Grade Report ---")?;
    writeln!(out, "{:<20}\t{:<5}\t{:<5}", "Name", "Mark", "Grade")?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE))?;
    for ((name, mark), (_, grade)) in book.iter().zip(&grades.assignments) {
        writeln!(out, "{name:<20}\t{mark:<5}\t{grade:<5}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::grading::assign_grades;

    fn render(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut out = Vec::new();
        let writer: &mut dyn Write = &mut out;
        f(writer).expect("render");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn stats_block() {
        let book: Gradebook = [("Ann", 70), ("Bo", 80), ("Cal", 90), ("Di", 60)]
            .into_iter()
            .collect();
        let stats = ClassStats::compute(&book).expect("stats");
        let text = render(|out| print_stats(out, &stats));

        assert!(text.contains("Class Average: 75.00\n"));
        assert!(text.contains("Class Median: 75\n"));
        assert!(text.contains("Highest Score: 90 (by Cal)\n"));
        assert!(text.contains("Lowest Score: 60 (by Di)\n"));
    }

    #[test]
    fn distribution_lists_every_grade() {
        let book: Gradebook = [("Ann", 95)].into_iter().collect();
        let text = render(|out| print_distribution(out, &assign_grades(&book).distribution));

        assert!(text.contains("Grade A: 1 student(s)\n"));
        assert!(text.contains("Grade F: 0 student(s)\n"));
        assert_eq!(text.matches("student(s)").count(), 5);
    }

    #[test]
    fn pass_fail_with_empty_side() {
        let book: Gradebook = [("Ann", 95), ("Bo", 41)].into_iter().collect();
        let text = render(|out| print_pass_fail(out, &PassFail::partition(&book)));

        assert!(text.contains("Total Passed (2): Ann, Bo\n"));
        assert!(text.contains("Total Failed (0): None\n"));
    }

    #[test]
    fn results_table_rows() {
        let book: Gradebook = [("Ann", 95), ("Bo", 7)].into_iter().collect();
        let grades = assign_grades(&book);
        let text = render(|out| print_results_table(out, &book, &grades));

        assert!(text.contains(&format!("{:<20}\t{:<5}\t{:<5}\n", "Name", "Mark", "Grade")));
        assert!(text.contains(&format!("{:<20}\t{:<5}\t{:<5}\n", "Bo", 7, "F")));
        assert!(text.contains(&"-".repeat(35)));
    }
}
