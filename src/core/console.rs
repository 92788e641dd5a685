//! Line-oriented console used by both pipelines
//!
//! Every prompt is written to the output, flushed, and answered by one line
//! of input. Validation is an explicit `Result` from a caller-supplied closure:
//! on `Err(message)` the message is printed and the prompt repeats.

use crate::core::error::{Result, TallyError};
use std::io::{self, BufRead, Write};

/// Prompt/answer channel over any reader and writer
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl<'a> Console<'a> {
    /// Create a console over an arbitrary reader and writer
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Console<'static> {
        Console::new(io::stdin().lock(), io::stdout())
    }

    /// Writer for report output
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Write one line of output
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Write an empty line
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Show `prompt` and read one line, without the trailing newline
    ///
    /// # Errors
    /// Returns [`TallyError::InputClosed`] at end of input, or an I/O error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Terminate the dangling prompt so later output starts cleanly
            writeln!(self.output)?;
            return Err(TallyError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prompt until `validate` accepts the answer
    ///
    /// # Errors
    /// Returns [`TallyError::InputClosed`] at end of input, or an I/O error.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut validate: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    crate::debug!("Rejected answer {answer:?} to {prompt:?}: {message}");
                    self.say(message)?;
                }
            }
        }
    }

    /// Ask a yes/no question until the answer is one of yes, y, no, n
    ///
    /// `retry` is printed after any other answer; `None` re-asks silently.
    ///
    /// # Errors
    /// Returns [`TallyError::InputClosed`] at end of input, or an I/O error.
    pub fn confirm(&mut self, prompt: &str, retry: Option<&str>) -> Result<bool> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_yes_no(&answer) {
                Some(choice) => return Ok(choice),
                None => {
                    if let Some(message) = retry {
                        self.say(message)?;
                    }
                }
            }
        }
    }
}

/// Interpret a yes/no answer (case-insensitive, surrounding whitespace ignored)
#[must_use]
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_strips_line_endings() {
        let mut out = Vec::new();
        let mut console = Console::new("Breakfast\r\n".as_bytes(), &mut out);
        assert_eq!(console.ask("Name: ").unwrap(), "Breakfast");
        drop(console);
        assert_eq!(String::from_utf8(out).unwrap(), "Name: ");
    }

    #[test]
    fn ask_reports_closed_input() {
        let mut out = Vec::new();
        let mut console = Console::new(&b""[..], &mut out);
        assert!(matches!(console.ask("Name: "), Err(TallyError::InputClosed)));
    }

    #[test]
    fn ask_until_repeats_with_message() {
        let mut out = Vec::new();
        let mut console = Console::new("abc\n-1\n7\n".as_bytes(), &mut out);
        let value = console
            .ask_until("N: ", |s| match s.trim().parse::<i32>() {
                Ok(n) if n > 0 => Ok(n),
                Ok(_) => Err("positive please".to_string()),
                Err(_) => Err("number please".to_string()),
            })
            .unwrap();
        drop(console);

        assert_eq!(value, 7);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("N: ").count(), 3);
        assert!(text.contains("number please\n"));
        assert!(text.contains("positive please\n"));
    }

    #[test]
    fn confirm_accepts_short_and_long_forms() {
        assert_eq!(parse_yes_no("YES"), Some(true));
        assert_eq!(parse_yes_no(" y "), Some(true));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);

        let mut out = Vec::new();
        let mut console = Console::new("maybe\nn\n".as_bytes(), &mut out);
        assert!(!console.confirm("Save? ", Some("yes or no")).unwrap());
        drop(console);
        assert!(String::from_utf8(out).unwrap().contains("yes or no"));
    }
}
