//! Domain types.

mod entry;
mod record;

pub use entry::{is_strip_char, Entry, EntryBuilder, EntryKind};
pub use record::{split_lines, SecretRecord};
