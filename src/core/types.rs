//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A record's logical name: its store path without root or extension
/// (e.g., `Email/example.com`).
pub type RecordName = String;

/// One decrypted body line, without its newline terminator.
pub type Line = String;
