//! Insertion-ordered student → mark store

/// Highest mark a student can hold
pub const MAX_MARK: u8 = 100;

/// Student marks in the order names were first entered.
///
/// Re-entering a name replaces the mark but keeps the student's original
/// position, so "first student with the top mark" and the pass/fail lists
/// follow first-entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gradebook {
    entries: Vec<(String, u8)>,
}

impl Gradebook {
    /// Empty gradebook
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record `mark` for `name`. Returns the previous mark if the name was already present.
    ///
    /// Callers validate the range first; marks above [`MAX_MARK`] are a logic error.
    pub fn insert(&mut self, name: impl Into<String>, mark: u8) -> Option<u8> {
        debug_assert!(mark <= MAX_MARK, "mark {mark} outside 0-100");
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            let previous = entry.1;
            entry.1 = mark;
            crate::debug!("Replaced mark for {name}: {previous} -> {mark}");
            return Some(previous);
        }
        self.entries.push((name, mark));
        None
    }

    /// Mark for `name`, if recorded
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, mark)| *mark)
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no students are recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, mark)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(name, mark)| (name.as_str(), *mark))
    }

    /// Marks in order
    pub fn marks(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|(_, mark)| *mark)
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for Gradebook {
    fn from_iter<I: IntoIterator<Item = (S, u8)>>(iter: I) -> Self {
        let mut book = Self::new();
        for (name, mark) in iter {
            book.insert(name, mark);
        }
        book
    }
}

/// Parse a mark typed at a prompt
///
/// # Errors
/// Returns the message to show when the answer is rejected.
pub fn parse_mark(answer: &str) -> Result<u8, String> {
    let value: i64 = answer
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Mark must be a number. Please try again.".to_string())?;
    u8::try_from(value)
        .ok()
        .filter(|mark| *mark <= MAX_MARK)
        .ok_or_else(|| "Invalid mark. Please enter a value between 0 and 100.".to_string())
}
