//! Record to entry conversion.

use tracing::debug;

use crate::core::classify;
use crate::core::domain::{Entry, EntryBuilder, SecretRecord};
use crate::core::extract;

/// Convert one decrypted record into an output entry.
///
/// The body after the first line is scanned for attributes, the path is
/// classified, and the first line is resolved last as either the password
/// or leading note text.
pub fn convert(record: &SecretRecord) -> Entry {
    let mut builder = EntryBuilder::new(record.name());

    extract::extract(record.rest(), &mut builder);
    classify::classify(record.name(), &mut builder);

    let entry = builder.build(record.first_line());
    debug!(name = %record, kind = %entry.kind(), "converted record");
    entry
}
