//! Gradebook analyzer
//!
//! Marks come from manual entry or a delimited file with a header row. Each
//! analysis pass prints class statistics, the grade distribution, the
//! pass/fail split and a results table, and can export the results.

pub mod csv;
pub mod export;
pub mod gradebook;
pub mod grading;
pub mod menu;
pub mod source;
pub mod stats;
pub mod table;

pub use export::{export_results, render_results_csv};
pub use gradebook::{parse_mark, Gradebook, MAX_MARK};
pub use grading::{assign_grades, Grade, GradeDistribution, GradeReport, PassFail, PASS_MARK};
pub use menu::{analysis_pass, run_menu, run_menu_with_import, MenuState, MenuSummary};
pub use source::{parse_marks, CsvImport, ImportOutcome, ManualEntry, MarkSource, SkippedRow};
pub use stats::{ClassStats, MarkHolder};
