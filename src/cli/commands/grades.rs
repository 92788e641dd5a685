//! Gradebook analyzer command handler

use std::path::Path;
use tally::core::console::Console;
use tally::core::grades::{run_menu, run_menu_with_import};
use tally::{error, info};

/// Run the gradebook menu on stdin/stdout, optionally importing `import` first
pub fn run(import: Option<&Path>) {
    let mut console = Console::stdio();
    let outcome = match import {
        Some(path) => run_menu_with_import(&mut console, path),
        None => run_menu(&mut console),
    };

    match outcome {
        Ok(summary) => info!(
            "Gradebook session ended after {} analyses ({} invalid choices)",
            summary.analyses, summary.invalid_choices
        ),
        Err(e) => {
            error!("Gradebook analyzer stopped: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
