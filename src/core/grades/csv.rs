//! Minimal comma-separated record handling for mark files
//!
//! Fields are split on commas outside double quotes; `""` inside a quoted
//! field is a literal quote. Unquoted fields are trimmed.

/// Split one line into fields
#[must_use]
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    quoted = false;
                }
            }
            '"' if !was_quoted && current.trim().is_empty() => {
                current.clear();
                quoted = true;
                was_quoted = true;
            }
            ',' if !quoted => {
                fields.push(finish_field(&mut current, was_quoted));
                was_quoted = false;
            }
            // Whitespace between a closing quote and the next comma
            c if was_quoted && !quoted && c.is_whitespace() => {}
            _ => current.push(c),
        }
    }
    fields.push(finish_field(&mut current, was_quoted));
    fields
}

fn finish_field(current: &mut String, was_quoted: bool) -> String {
    let field = std::mem::take(current);
    if was_quoted {
        field
    } else {
        field.trim().to_string()
    }
}

/// Quote a field when it contains a delimiter, a quote or a line break
#[must_use]
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) || field != field.trim() {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Join fields into one line
#[must_use]
pub fn join_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_plain_fields() {
        assert_eq!(split_record("Alice, 95"), ["Alice", "95"]);
        assert_eq!(split_record("Name,Mark,Grade"), ["Name", "Mark", "Grade"]);
        assert_eq!(split_record("lonely"), ["lonely"]);
        assert_eq!(split_record("a,,b"), ["a", "", "b"]);
    }

    #[test]
    fn honours_quotes() {
        assert_eq!(
            split_record("\"Smith, Jo\",72,C"),
            ["Smith, Jo", "72", "C"]
        );
        assert_eq!(split_record("\"say \"\"hi\"\"\",5"), ["say \"hi\"", "5"]);
    }

    #[test]
    fn escapes_only_when_needed() {
        assert_eq!(escape_field("Alice"), "Alice");
        assert_eq!(escape_field("Smith, Jo"), "\"Smith, Jo\"");
        assert_eq!(escape_field("O\"Neil"), "\"O\"\"Neil\"");
        assert_eq!(escape_field(" padded"), "\" padded\"");
    }

    #[test]
    fn joined_fields_split_back() {
        let fields = ["Smith, Jo", "say \"hi\"", " padded ", "plain"];
        assert_eq!(split_record(&join_record(&fields)), fields);
    }
}
