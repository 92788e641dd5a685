//! Where a gradebook comes from: typed in, or imported from a mark file

use super::csv::split_record;
use super::gradebook::{parse_mark, Gradebook, MAX_MARK};
use crate::core::console::Console;
use crate::core::error::{Result, RowError, TallyError};
use std::fs;
use std::io;
use std::num::{IntErrorKind, ParseIntError};
use std::path::{Path, PathBuf};

/// A way of filling a gradebook for one analysis pass
pub trait MarkSource {
    /// Short label used in logs
    fn label(&self) -> &'static str;

    /// Produce the gradebook, reporting progress on the console
    ///
    /// A source that has nothing to offer returns an empty gradebook rather
    /// than an error; errors are reserved for console failures.
    ///
    /// # Errors
    /// Returns an error if the console fails or input ends early.
    fn load(&self, console: &mut Console<'_>) -> Result<Gradebook>;
}

/// Interactive entry: names and marks until the name `done`
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualEntry;

impl MarkSource for ManualEntry {
    fn label(&self) -> &'static str {
        "manual entry"
    }

    fn load(&self, console: &mut Console<'_>) -> Result<Gradebook> {
        console.say("\n--- Manual Mark Entry ---")?;
        console.say("Enter student name and mark. Type 'done' as the name to finish.")?;

        let mut book = Gradebook::new();
        loop {
            let name = console.ask("Enter student name: ")?;
            if name.trim().eq_ignore_ascii_case("done") {
                break;
            }
            let mark = console.ask_until(&format!("Enter mark for {name}: "), parse_mark)?;
            book.insert(name, mark);
        }

        console.say(format!(
            "Data entry complete. {} students recorded.",
            book.len()
        ))?;
        Ok(book)
    }
}

/// Import from a comma-separated file with a header row
#[derive(Debug, Clone)]
pub struct CsvImport {
    path: PathBuf,
}

/// A row that was left out of an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: usize,
    /// Fields as read
    pub fields: Vec<String>,
    /// Why it was skipped
    pub reason: RowError,
}

impl SkippedRow {
    /// Console warning for this row
    #[must_use]
    pub fn warning(&self) -> String {
        match &self.reason {
            RowError::MarkOutOfRange { name, mark } => {
                format!("Warning: Invalid score {mark} for {name}. Skipping.")
            }
            RowError::MissingField | RowError::InvalidMark(_) => {
                format!("Warning: Skipping invalid row: {}", bracket_list(&self.fields))
            }
        }
    }
}

/// Render fields as `['a', 'b']`, quoting each like a Python string literal
fn bracket_list(fields: &[String]) -> String {
    let quoted: Vec<String> = fields
        .iter()
        .map(|field| {
            let quote = if field.contains('\'') && !field.contains('"') {
                '"'
            } else {
                '\''
            };
            let mut literal = String::with_capacity(field.len() + 2);
            literal.push(quote);
            for c in field.chars() {
                if c == '\\' || c == quote {
                    literal.push('\\');
                }
                literal.push(c);
            }
            literal.push(quote);
            literal
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Result of reading a mark file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Header fields from the first line
    pub header: Vec<String>,
    /// Accepted marks
    pub gradebook: Gradebook,
    /// Number of accepted rows, duplicates included
    pub accepted: usize,
    /// Rows left out, in file order
    pub skipped: Vec<SkippedRow>,
}

impl CsvImport {
    /// Import from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this import reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file without touching the console
    ///
    /// # Errors
    /// [`TallyError::SourceNotFound`] when the path does not exist,
    /// [`TallyError::MalformedSource`] when the file is not text or has no header.
    pub fn read(&self) -> Result<ImportOutcome> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TallyError::SourceNotFound(self.path.clone()),
            io::ErrorKind::InvalidData => TallyError::MalformedSource {
                path: self.path.clone(),
                reason: "file is not valid UTF-8 text".to_string(),
            },
            _ => TallyError::Io(e),
        })?;
        parse_marks(&content).ok_or_else(|| TallyError::MalformedSource {
            path: self.path.clone(),
            reason: "file has no header row".to_string(),
        })
    }
}

impl MarkSource for CsvImport {
    fn label(&self) -> &'static str {
        "csv import"
    }

    fn load(&self, console: &mut Console<'_>) -> Result<Gradebook> {
        let outcome = match self.read() {
            Ok(outcome) => outcome,
            Err(TallyError::SourceNotFound(path)) => {
                crate::info!("Import file {} not found", path.display());
                console.say(format!("Error: File '{}' not found.", path.display()))?;
                return Ok(Gradebook::new());
            }
            Err(e) => {
                crate::error!("Import of {} failed: {e}", self.path.display());
                console.say(format!("An error occurred: {e}"))?;
                return Ok(Gradebook::new());
            }
        };

        console.say(format!(
            "Reading CSV with headers: {}",
            outcome.header.join(", ")
        ))?;
        for row in &outcome.skipped {
            crate::debug!("Skipped line {}: {}", row.line, row.reason);
            console.say(row.warning())?;
        }
        console.say(format!(
            "Successfully loaded {} students from {}.",
            outcome.accepted,
            self.path.display()
        ))?;
        crate::info!(
            "Imported {} rows ({} skipped) from {}",
            outcome.accepted,
            outcome.skipped.len(),
            self.path.display()
        );

        Ok(outcome.gradebook)
    }
}

/// Parse mark-file text. Returns `None` when there is no header line.
///
/// Blank lines are ignored. Columns after the second are ignored, so a
/// `Name,Mark,Grade` export imports cleanly.
#[must_use]
pub fn parse_marks(content: &str) -> Option<ImportOutcome> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next()?;
    let mut outcome = ImportOutcome {
        header: split_record(header_line.trim_start_matches('\u{feff}')),
        ..ImportOutcome::default()
    };

    for (index, line) in lines {
        let fields = split_record(line);
        match parse_row(&fields) {
            Ok((name, mark)) => {
                outcome.gradebook.insert(name, mark);
                outcome.accepted += 1;
            }
            Err(reason) => outcome.skipped.push(SkippedRow {
                line: index + 1,
                fields,
                reason,
            }),
        }
    }

    Some(outcome)
}

/// Parse the name and mark columns of one record
///
/// # Errors
/// Returns why the row cannot be used.
pub fn parse_row(fields: &[String]) -> std::result::Result<(String, u8), RowError> {
    let (name, raw_mark) = match fields {
        [name, mark, ..] => (name, mark.trim()),
        _ => return Err(RowError::MissingField),
    };
    let out_of_range = |mark: String| RowError::MarkOutOfRange {
        name: name.clone(),
        mark,
    };
    let mark: i64 = raw_mark.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            out_of_range(canonical_integer(raw_mark))
        }
        _ => RowError::InvalidMark(raw_mark.to_string()),
    })?;
    u8::try_from(mark)
        .ok()
        .filter(|m| *m <= MAX_MARK)
        .map(|m| (name.clone(), m))
        .ok_or_else(|| out_of_range(mark.to_string()))
}

/// Decimal integer text without a `+` sign or leading zeros
fn canonical_integer(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else {
        format!("{sign}{digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_bad_rows_with_reasons() {
        let outcome =
            parse_marks("Name,Mark\nAlice,95\nBob,notanumber\nCarol,150\n").expect("has header");

        assert_eq!(outcome.header, ["Name", "Mark"]);
        assert_eq!(outcome.gradebook.len(), 1);
        assert_eq!(outcome.gradebook.get("Alice"), Some(95));
        assert_eq!(outcome.accepted, 1);
        assert_eq!(outcome.skipped.len(), 2);
        assert_eq!(
            outcome.skipped[0].reason,
            RowError::InvalidMark("notanumber".to_string())
        );
        assert_eq!(outcome.skipped[0].line, 3);
        assert_eq!(
            outcome.skipped[1].warning(),
            "Warning: Invalid score 150 for Carol. Skipping."
        );
    }

    #[test]
    fn missing_column_is_reported() {
        let outcome = parse_marks("Name,Mark\nDan\n").expect("has header");
        assert!(outcome.gradebook.is_empty());
        assert_eq!(outcome.skipped[0].reason, RowError::MissingField);
        assert_eq!(
            outcome.skipped[0].warning(),
            "Warning: Skipping invalid row: ['Dan']"
        );
    }

    #[test]
    fn skipped_row_quoting() {
        let outcome =
            parse_marks("Name,Mark\nBob,notanumber\nO'Neil,abc\n\"say \"\"hi\"\"\",x\n")
                .expect("has header");

        let warnings: Vec<String> = outcome.skipped.iter().map(SkippedRow::warning).collect();
        assert_eq!(
            warnings,
            [
                "Warning: Skipping invalid row: ['Bob', 'notanumber']",
                "Warning: Skipping invalid row: [\"O'Neil\", 'abc']",
                "Warning: Skipping invalid row: ['say \"hi\"', 'x']",
            ]
        );
    }

    #[test]
    fn negative_marks_are_out_of_range() {
        let outcome = parse_marks("Name,Mark\nEve,-3\n").expect("has header");
        assert_eq!(
            outcome.skipped[0].reason,
            RowError::MarkOutOfRange {
                name: "Eve".to_string(),
                mark: "-3".to_string()
            }
        );
    }

    #[test]
    fn overflowing_marks_are_out_of_range() {
        let outcome =
            parse_marks("Name,Mark\nFay,99999999999999999999\nGus,-000099999999999999999999\n")
                .expect("has header");

        assert!(outcome.gradebook.is_empty());
        assert_eq!(
            outcome.skipped[0].warning(),
            "Warning: Invalid score 99999999999999999999 for Fay. Skipping."
        );
        assert_eq!(
            outcome.skipped[1].warning(),
            "Warning: Invalid score -99999999999999999999 for Gus. Skipping."
        );
    }

    #[test]
    fn header_only_and_empty_files() {
        let outcome = parse_marks("Name,Mark\n").expect("has header");
        assert!(outcome.gradebook.is_empty());
        assert!(outcome.skipped.is_empty());
        assert!(parse_marks("").is_none());
        assert!(parse_marks("\n  \n").is_none());
    }

    #[test]
    fn extra_columns_and_duplicates() {
        let outcome =
            parse_marks("Name,Mark,Grade\nAmy,91,A\nRaj,55,F\nAmy,72,C\n").expect("has header");
        assert_eq!(outcome.accepted, 3);
        assert_eq!(outcome.gradebook.len(), 2);
        assert_eq!(outcome.gradebook.get("Amy"), Some(72));
    }

    #[test]
    fn missing_file_is_distinct() {
        let import = CsvImport::new("definitely/not/here.csv");
        assert!(matches!(import.read(), Err(TallyError::SourceNotFound(_))));
    }
}
