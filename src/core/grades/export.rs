//! Results export to a delimited file

use super::csv::join_record;
use super::gradebook::Gradebook;
use super::grading::GradeReport;
use crate::core::error::Result;
use crate::core::persist::replace_file;
use std::path::Path;

/// Header row of an export
pub const EXPORT_HEADER: [&str; 3] = ["Name", "Mark", "Grade"];

/// Render the export: header row then one row per student
///
/// `grades` must come from [`assign_grades`](super::grading::assign_grades) on `book`.
#[must_use]
pub fn render_results_csv(book: &Gradebook, grades: &GradeReport) -> String {
    let mut doc = join_record(&EXPORT_HEADER);
    doc.push('\n');
    for ((name, mark), (_, grade)) in book.iter().zip(&grades.assignments) {
        doc.push_str(&join_record(&[
            name.to_string(),
            mark.to_string(),
            grade.to_string(),
        ]));
        doc.push('\n');
    }
    doc
}

/// Write the export to `path`, replacing any previous file
///
/// # Errors
/// Returns [`TallyError::Export`](crate::core::error::TallyError::Export) if
/// the file cannot be written; a previous file at `path` is left intact.
pub fn export_results(book: &Gradebook, grades: &GradeReport, path: &Path) -> Result<()> {
    replace_file(path, &render_results_csv(book, grades))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::grading::assign_grades;

    #[test]
    fn export_rows_follow_gradebook_order() {
        let book: Gradebook = [("Zed", 55), ("Smith, Jo", 91)].into_iter().collect();
        let doc = render_results_csv(&book, &assign_grades(&book));

        assert_eq!(doc, "Name,Mark,Grade\nZed,55,F\n\"Smith, Jo\",91,A\n");
    }

    #[test]
    fn every_row_keeps_its_own_grade() {
        let book: Gradebook = (0..=100u8).map(|m| (format!("S{m:03}"), m)).collect();
        let doc = render_results_csv(&book, &assign_grades(&book));
        let rows: Vec<&str> = doc.lines().skip(1).collect();

        assert_eq!(rows.len(), 101);
        assert_eq!(rows[0], "S000,0,F");
        assert_eq!(rows[59], "S059,59,F");
        assert_eq!(rows[60], "S060,60,D");
        assert_eq!(rows[89], "S089,89,B");
        assert_eq!(rows[100], "S100,100,A");
    }
}
