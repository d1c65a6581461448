//! Entry types.
//!
//! An [`EntryBuilder`] accumulates what the classifier and extractor learn
//! about one record, and [`EntryBuilder::build`] reconciles it into a frozen
//! [`Entry`] ready to be written as a CSV row.

use serde::Serialize;

use crate::core::types::RecordName;

/// Kind of item created on import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Site credentials: the first line becomes the password
    Login,
    /// Secure note
    #[default]
    Note,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Login => write!(f, "login"),
            EntryKind::Note => write!(f, "note"),
        }
    }
}

/// One output row.
///
/// Field order matches the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    folder: String,
    favorite: String,
    #[serde(rename = "type")]
    kind: EntryKind,
    name: RecordName,
    notes: String,
    fields: String,
    login_uri: String,
    login_username: String,
    login_password: String,
    login_totp: String,
}

impl Entry {
    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn fields(&self) -> &str {
        &self.fields
    }

    pub fn login_uri(&self) -> &str {
        &self.login_uri
    }

    pub fn login_username(&self) -> &str {
        &self.login_username
    }

    pub fn login_password(&self) -> &str {
        &self.login_password
    }

    /// Always empty; present for the importer's column layout
    pub fn login_totp(&self) -> &str {
        &self.login_totp
    }

    /// Always empty; present for the importer's column layout
    pub fn favorite(&self) -> &str {
        &self.favorite
    }
}

/// Mutable accumulator for one record
#[derive(Debug, Default)]
pub struct EntryBuilder {
    name: RecordName,
    folder: String,
    kind: Option<EntryKind>,
    notes: String,
    fields: String,
    login_uri: String,
    login_username: String,
}

impl EntryBuilder {
    /// Start an empty entry for the named record
    pub fn new(name: impl Into<RecordName>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Mark the entry as a login
    pub fn mark_login(&mut self) {
        self.kind = Some(EntryKind::Login);
    }

    /// Tentative kind, `None` until something marks it
    pub fn kind(&self) -> Option<EntryKind> {
        self.kind
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Set the folder unless one is already set
    pub fn set_folder(&mut self, folder: impl Into<String>) {
        if self.folder.is_empty() {
            self.folder = folder.into();
        }
    }

    pub fn login_uri(&self) -> &str {
        &self.login_uri
    }

    pub fn set_login_uri(&mut self, uri: impl Into<String>) {
        self.login_uri = uri.into();
    }

    pub fn set_login_username(&mut self, username: impl Into<String>) {
        self.login_username = username.into();
    }

    /// Append a `name: value` attribute line
    pub fn push_field(&mut self, name: &str, value: &str) {
        self.fields.push_str(name);
        self.fields.push_str(": ");
        self.fields.push_str(value);
        self.fields.push('\n');
    }

    /// Append raw text to the notes, with no separator
    pub fn push_note(&mut self, text: &str) {
        self.notes.push_str(text);
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn fields(&self) -> &str {
        &self.fields
    }

    /// Reconcile and freeze.
    ///
    /// An unmarked entry becomes a note. A login takes `first_line` verbatim
    /// as its password; a note gets `first_line` prepended to its notes unless
    /// the notes already contain it. Notes and fields are trimmed last.
    pub fn build(self, first_line: &str) -> Entry {
        let kind = self.kind.unwrap_or_default();
        let mut notes = self.notes;
        let mut login_password = String::new();

        match kind {
            EntryKind::Login => login_password = first_line.to_string(),
            EntryKind::Note => {
                if !notes.contains(first_line) {
                    notes = format!("{}\n{}", first_line, notes);
                }
            }
        }

        Entry {
            folder: self.folder,
            favorite: String::new(),
            kind,
            name: self.name,
            notes: notes.trim_matches(is_strip_char).to_string(),
            fields: self.fields.trim_matches(is_strip_char).to_string(),
            login_uri: self.login_uri,
            login_username: self.login_username,
            login_password,
            login_totp: String::new(),
        }
    }
}

/// Whitespace for trimming: Unicode whitespace plus the ASCII file, group,
/// record and unit separators.
pub fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
