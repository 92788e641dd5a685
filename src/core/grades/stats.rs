//! Class statistics over a gradebook

use super::gradebook::Gradebook;

/// A student holding an extreme mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkHolder {
    /// Student name
    pub name: String,
    /// Their mark
    pub mark: u8,
}

/// Summary statistics for one analysis pass
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStats {
    /// Arithmetic mean of all marks
    pub average: f64,
    /// Middle mark, or mean of the two middle marks
    pub median: f64,
    /// First student (in gradebook order) with the highest mark
    pub highest: MarkHolder,
    /// First student (in gradebook order) with the lowest mark
    pub lowest: MarkHolder,
}

impl ClassStats {
    /// Statistics for `book`, or `None` when it is empty
    #[must_use]
    pub fn compute(book: &Gradebook) -> Option<Self> {
        let marks: Vec<u8> = book.marks().collect();
        Some(Self {
            average: mean(&marks),
            median: median(&marks),
            highest: find_holder(book, |candidate, best| candidate > best)?,
            lowest: find_holder(book, |candidate, best| candidate < best)?,
        })
    }
}

/// Mean of `marks`; 0 for an empty slice
#[must_use]
pub fn mean(marks: &[u8]) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    let sum: u32 = marks.iter().map(|&m| u32::from(m)).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = marks.len() as f64;
    f64::from(sum) / count
}

/// Median of `marks`; 0 for an empty slice
#[must_use]
pub fn median(marks: &[u8]) -> f64 {
    let mut sorted = marks.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => f64::from(sorted[n / 2]),
        _ => (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0,
    }
}

/// Walk the gradebook keeping the first entry that `beats` every later one.
/// A strict comparison keeps the earliest holder on ties.
fn find_holder(book: &Gradebook, beats: impl Fn(u8, u8) -> bool) -> Option<MarkHolder> {
    let mut entries = book.iter();
    let (first_name, first_mark) = entries.next()?;
    let (name, mark) = entries.fold((first_name, first_mark), |best, candidate| {
        if beats(candidate.1, best.1) {
            candidate
        } else {
            best
        }
    });
    Some(MarkHolder {
        name: name.to_string(),
        mark,
    })
}

/// Format a median: whole values without decimals, fractional ones to 2 places
#[must_use]
pub fn format_median(median: f64) -> String {
    if median.fract().abs() < f64::EPSILON {
        format!("{median:.0}")
    } else {
        format!("{median:.2}")
    }
}
