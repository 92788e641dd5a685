//! Calorie tracker command handler

use std::path::PathBuf;
use tally::config::Config;
use tally::core::calories::{self, TrackerOptions};
use tally::core::console::Console;
use tally::{error, verbose};

/// Run the tracker on stdin/stdout, saving to the configured log file
pub fn run(config: &Config) {
    let options = TrackerOptions {
        log_path: PathBuf::from(&config.paths.calorie_log),
    };
    verbose!("Calorie sessions are saved to {}", options.log_path.display());

    let mut console = Console::stdio();
    if let Err(e) = calories::run(&mut console, &options) {
        error!("Calorie tracker stopped: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}
