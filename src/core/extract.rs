//! Attribute extraction from a decrypted body.
//!
//! A line with exactly one `:` is a `name: value` attribute. Username
//! attributes are promoted to the login username; every other attribute is
//! kept as a custom field. Lines that are not attributes accumulate into the
//! notes as-is, with no separator between them.

use tracing::trace;

use crate::core::constants::USERNAME_KEYS;
use crate::core::domain::{is_strip_char, EntryBuilder};

/// Split a line into `(name, value)` when it contains exactly one colon.
///
/// The name is kept verbatim; the value is trimmed.
pub fn parse_attribute(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    if value.contains(':') {
        return None;
    }
    Some((name, value.trim_matches(is_strip_char)))
}

/// Whether an attribute name denotes the login username.
pub fn is_username_key(name: &str) -> bool {
    USERNAME_KEYS
        .iter()
        .any(|key| name.eq_ignore_ascii_case(key))
}

/// Feed body lines (without the first line) into `entry`.
pub fn extract<S: AsRef<str>>(lines: &[S], entry: &mut EntryBuilder) {
    for line in lines {
        let line = line.as_ref();
        match parse_attribute(line) {
            Some((name, value)) if is_username_key(name) => {
                trace!("username attribute found");
                entry.mark_login();
                entry.set_login_username(value);
            }
            Some((name, value)) => entry.push_field(name, value),
            None => entry.push_note(line),
        }
    }
}
