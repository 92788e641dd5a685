//! Gradebook menu loop and the analysis pass

use super::export::export_results;
use super::gradebook::Gradebook;
use super::grading::{assign_grades, PassFail};
use super::source::{CsvImport, ManualEntry, MarkSource};
use super::stats::ClassStats;
use super::table::{print_distribution, print_pass_fail, print_results_table, print_stats};
use crate::core::console::Console;
use crate::core::error::{Result, TallyError};
use std::path::Path;

/// Where the menu loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Showing the menu and waiting for a choice
    AwaitingChoice,
    /// Typing marks in by hand
    ManualEntry,
    /// Loading marks from a file
    FileImport,
    /// Leaving the program
    Exit,
}

impl MenuState {
    /// State reached from `AwaitingChoice` by answering `choice`.
    /// Returns `None` for an unrecognised answer.
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::ManualEntry),
            "2" => Some(Self::FileImport),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What happened during a menu session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuSummary {
    /// Analysis passes that ran on a non-empty gradebook
    pub analyses: usize,
    /// Unrecognised menu answers
    pub invalid_choices: usize,
}

fn print_welcome(console: &mut Console<'_>) -> Result<()> {
    let banner = "=".repeat(40);
    console.say(&banner)?;
    console.say("  Welcome to the GradeBook Analyzer CLI")?;
    console.say(&banner)
}

fn print_menu(console: &mut Console<'_>) -> Result<()> {
    console.say("\n--- MAIN MENU ---")?;
    console.say("1. Enter Marks Manually")?;
    console.say("2. Load Marks from CSV File")?;
    console.say("3. Exit Program")
}

/// Run the menu until the user exits or input ends
///
/// Each pass starts from an empty gradebook; nothing carries over between passes.
///
/// # Errors
/// Returns an error if the console fails mid-pass. End of input at the menu
/// prompt is a normal exit.
pub fn run_menu(console: &mut Console<'_>) -> Result<MenuSummary> {
    print_welcome(console)?;
    run_passes(console, MenuSummary::default())
}

/// Run one import-and-analyse pass for `path`, then the menu
///
/// # Errors
/// Same as [`run_menu`].
pub fn run_menu_with_import(console: &mut Console<'_>, path: &Path) -> Result<MenuSummary> {
    print_welcome(console)?;
    let mut summary = MenuSummary::default();
    let import = CsvImport::new(path);
    let book = import.load(console)?;
    if book.is_empty() {
        console.say("\nReturning to main menu...")?;
    } else {
        run_pass(console, &import, &book, &mut summary)?;
    }
    run_passes(console, summary)
}

fn run_passes(console: &mut Console<'_>, mut summary: MenuSummary) -> Result<MenuSummary> {
    let mut state = MenuState::AwaitingChoice;
    loop {
        state = match state {
            MenuState::AwaitingChoice => {
                print_menu(console)?;
                match console.ask("Please select an option (1-3): ") {
                    Ok(choice) => match MenuState::from_choice(&choice) {
                        Some(next) => {
                            crate::debug!("Menu choice {choice:?} -> {next:?}");
                            next
                        }
                        None => {
                            summary.invalid_choices += 1;
                            console.say("Invalid choice. Please enter 1, 2, or 3.")?;
                            console.say("\nReturning to main menu...")?;
                            MenuState::AwaitingChoice
                        }
                    },
                    Err(TallyError::InputClosed) => {
                        crate::info!("Input closed at the menu; exiting");
                        MenuState::Exit
                    }
                    Err(e) => return Err(e),
                }
            }
            MenuState::ManualEntry => {
                let book = ManualEntry.load(console)?;
                run_pass(console, &ManualEntry, &book, &mut summary)?;
                MenuState::AwaitingChoice
            }
            MenuState::FileImport => {
                console.say("\n--- CSV File Import ---")?;
                let path = console.ask("Enter the CSV file name (e.g., marks.csv): ")?;
                let import = CsvImport::new(path.trim());
                let book = import.load(console)?;
                // Failed or empty imports go straight back to the menu
                if book.is_empty() {
                    console.say("\nReturning to main menu...")?;
                } else {
                    run_pass(console, &import, &book, &mut summary)?;
                }
                MenuState::AwaitingChoice
            }
            MenuState::Exit => {
                console.say("Exiting program. Goodbye!")?;
                return Ok(summary);
            }
        };
    }
}

fn run_pass(
    console: &mut Console<'_>,
    source: &dyn MarkSource,
    book: &Gradebook,
    summary: &mut MenuSummary,
) -> Result<()> {
    crate::info!("{} produced {} students", source.label(), book.len());
    if analysis_pass(console, book)? {
        summary.analyses += 1;
    }
    console.say("\nReturning to main menu...")
}

/// Print statistics, distribution, pass/fail and the results table for
/// `book`, then offer to export it. Returns whether anything was analysed.
///
/// # Errors
/// Returns an error if the console fails. Export failures are reported on
/// the console and do not end the pass.
pub fn analysis_pass(console: &mut Console<'_>, book: &Gradebook) -> Result<bool> {
    let Some(stats) = ClassStats::compute(book) else {
        console.say("No student data to analyze.")?;
        return Ok(false);
    };

    let grades = assign_grades(book);
    let split = PassFail::partition(book);

    print_stats(console.out(), &stats)?;
    print_distribution(console.out(), &grades.distribution)?;
    print_pass_fail(console.out(), &split)?;
    print_results_table(console.out(), book, &grades)?;

    if console.confirm("\n[Bonus] Save results to CSV? (y/n): ", None)? {
        let target = console.ask("\nEnter filename to save results (e.g., results.csv): ")?;
        let target = Path::new(target.trim());
        match export_results(book, &grades, target) {
            Ok(()) => {
                crate::info!("Exported {} results to {}", book.len(), target.display());
                console.say(format!("Successfully saved results to {}", target.display()))?;
            }
            Err(e) => {
                crate::error!("Export to {} failed: {e}", target.display());
                console.say(format!("Error: {e}"))?;
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_map_to_states() {
        assert_eq!(MenuState::from_choice("1"), Some(MenuState::ManualEntry));
        assert_eq!(MenuState::from_choice(" 2 "), Some(MenuState::FileImport));
        assert_eq!(MenuState::from_choice("3"), Some(MenuState::Exit));
        assert_eq!(MenuState::from_choice("4"), None);
        assert_eq!(MenuState::from_choice(""), None);
        assert_eq!(MenuState::from_choice("exit"), None);
    }

    #[test]
    fn empty_book_is_not_analysed() {
        let mut out = Vec::new();
        let mut console = Console::new(&b""[..], &mut out);
        assert!(!analysis_pass(&mut console, &Gradebook::new()).expect("pass"));
        drop(console);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "No student data to analyze.\n"
        );
    }

    #[test]
    fn closed_input_exits_menu() {
        let mut out = Vec::new();
        let mut console = Console::new(&b""[..], &mut out);
        let summary = run_menu(&mut console).expect("menu");
        drop(console);

        assert_eq!(summary, MenuSummary::default());
        assert!(String::from_utf8(out)
            .expect("utf8")
            .ends_with("Exiting program. Goodbye!\n"));
    }
}
