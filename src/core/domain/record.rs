//! SecretRecord type.
//!
//! A decrypted record as read from the store. The body is wiped on drop.

use zeroize::Zeroize;

use crate::core::types::{Line, RecordName};

/// A decrypted secret record: its logical name plus its body lines
#[derive(Clone, PartialEq, Eq)]
pub struct SecretRecord {
    name: RecordName,
    lines: Vec<Line>,
}

impl SecretRecord {
    /// Create a record from a name and its decrypted lines
    pub fn new(name: impl Into<RecordName>, lines: Vec<Line>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Parse a decrypted body into lines
    pub fn from_plaintext(name: impl Into<RecordName>, plaintext: &str) -> Self {
        Self::new(name, split_lines(plaintext))
    }

    /// Logical name, e.g. `Email/example.com`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All body lines
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// First body line, or `""` when the body is empty
    pub fn first_line(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    /// Body lines after the first
    pub fn rest(&self) -> &[Line] {
        self.lines.get(1..).unwrap_or(&[])
    }
}

/// Characters that end a body line: `\n`, `\r`, vertical tab, form feed,
/// the file/group/record separators, NEL and the Unicode line and paragraph
/// separators. `\r\n` counts as one break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split a decrypted body into lines without their terminators.
///
/// A trailing break does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some((pos, brk)) = rest.char_indices().find(|(_, c)| is_line_break(*c)) else {
            lines.push(rest.to_string());
            break;
        };
        lines.push(rest[..pos].to_string());

        let mut end = pos + brk.len_utf8();
        if brk == '\r' && rest[end..].starts_with('\n') {
            end += 1;
        }
        rest = &rest[end..];
    }

    lines
}

impl Drop for SecretRecord {
    fn drop(&mut self) {
        self.lines.zeroize();
    }
}

impl std::fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretRecord")
            .field("name", &self.name)
            .field("lines", &self.lines.len())
            .finish()
    }
}

impl std::fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
