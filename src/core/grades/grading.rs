//! Letter grades, grade distribution and the pass/fail split

use super::gradebook::Gradebook;
use std::fmt;

/// Lowest mark that passes
pub const PASS_MARK: u8 = 40;

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    /// 90 and above
    A,
    /// 80–89
    B,
    /// 70–79
    C,
    /// 60–69
    D,
    /// Below 60
    F,
}

impl Grade {
    /// All grades, best first
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    /// Grade for a mark; lower bounds are inclusive
    #[must_use]
    pub const fn for_mark(mark: u8) -> Self {
        match mark {
            90.. => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        // `pad` so width/alignment specs apply in tables
        f.pad(letter)
    }
}

/// Count of students per grade; every grade is present even at zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeDistribution {
    counts: [usize; 5],
}

impl GradeDistribution {
    /// Students holding `grade`
    #[must_use]
    pub const fn count(&self, grade: Grade) -> usize {
        self.counts[grade.index()]
    }

    /// `(grade, count)` from A to F
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.into_iter().map(move |g| (g, self.count(g)))
    }

    /// Sum over all grades
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    fn record(&mut self, grade: Grade) {
        self.counts[grade.index()] += 1;
    }
}

/// Grade for every student plus the distribution, in gradebook order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeReport {
    /// `(name, grade)` pairs
    pub assignments: Vec<(String, Grade)>,
    /// Students per grade
    pub distribution: GradeDistribution,
}

/// Assign grades to everyone in `book`
#[must_use]
pub fn assign_grades(book: &Gradebook) -> GradeReport {
    let mut report = GradeReport::default();
    for (name, mark) in book.iter() {
        let grade = Grade::for_mark(mark);
        report.distribution.record(grade);
        report.assignments.push((name.to_string(), grade));
    }
    report
}

/// Names that passed and failed, in gradebook order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassFail {
    /// Mark at or above [`PASS_MARK`]
    pub passed: Vec<String>,
    /// Mark below [`PASS_MARK`]
    pub failed: Vec<String>,
}

impl PassFail {
    /// Split `book` at [`PASS_MARK`]
    #[must_use]
    pub fn partition(book: &Gradebook) -> Self {
        let (passed, failed) = book
            .iter()
            .partition::<Vec<_>, _>(|(_, mark)| *mark >= PASS_MARK);
        let names = |v: Vec<(&str, u8)>| -> Vec<String> {
            v.into_iter().map(|(n, _)| n.to_string()).collect()
        };
        Self {
            passed: names(passed),
            failed: names(failed),
        }
    }
}

/// Names joined with `, `, or `None` for an empty list
#[must_use]
pub fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::for_mark(95), Grade::A);
        assert_eq!(Grade::for_mark(85), Grade::B);
        assert_eq!(Grade::for_mark(75), Grade::C);
        assert_eq!(Grade::for_mark(65), Grade::D);
        assert_eq!(Grade::for_mark(30), Grade::F);
    }

    #[test]
    fn grade_lower_bounds_are_inclusive() {
        assert_eq!(Grade::for_mark(100), Grade::A);
        assert_eq!(Grade::for_mark(90), Grade::A);
        assert_eq!(Grade::for_mark(89), Grade::B);
        assert_eq!(Grade::for_mark(80), Grade::B);
        assert_eq!(Grade::for_mark(70), Grade::C);
        assert_eq!(Grade::for_mark(60), Grade::D);
        assert_eq!(Grade::for_mark(59), Grade::F);
        assert_eq!(Grade::for_mark(0), Grade::F);
    }

    #[test]
    fn distribution_covers_all_grades() {
        let book: Gradebook = [("a", 91), ("b", 93), ("c", 42)].into_iter().collect();
        let report = assign_grades(&book);

        assert_eq!(report.distribution.count(Grade::A), 2);
        assert_eq!(report.distribution.count(Grade::B), 0);
        assert_eq!(report.distribution.count(Grade::F), 1);
        assert_eq!(report.distribution.iter().count(), 5);
        assert_eq!(report.distribution.total(), book.len());
        assert_eq!(report.assignments[2], ("c".to_string(), Grade::F));
    }

    #[test]
    fn pass_boundary_is_inclusive() {
        let book: Gradebook = [("Pat", 40), ("Sam", 39), ("Lee", 88)].into_iter().collect();
        let split = PassFail::partition(&book);
        assert_eq!(split.passed, ["Pat", "Lee"]);
        assert_eq!(split.failed, ["Sam"]);
    }

    #[test]
    fn empty_partition_renders_none() {
        assert_eq!(join_names(&[]), "None");
        assert_eq!(
            join_names(&["Pat".to_string(), "Lee".to_string()]),
            "Pat, Lee"
        );
    }

    #[test]
    fn grade_display_pads() {
        assert_eq!(format!("{:<3}|", Grade::B), "B  |");
    }
}
