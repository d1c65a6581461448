//! Whole-store migration.

use std::io::Write;
use tracing::{debug, info};

use crate::core::cipher::Decrypt;
use crate::core::convert::convert;
use crate::core::export::CsvExporter;
use crate::core::store::PasswordStore;
use crate::error::Result;

/// Convert every record of `store` and write the CSV to `out`.
///
/// Records are processed one at a time in name order. The listing happens
/// before anything is written, and the first record that fails to decrypt
/// aborts the run.
///
/// Returns the number of rows written.
pub fn migrate<D, W>(store: &PasswordStore, decryptor: &D, out: W) -> Result<usize>
where
    D: Decrypt + ?Sized,
    W: Write,
{
    let names = store.list()?;
    debug!(backend = decryptor.name(), records = names.len(), "starting migration");

    let mut exporter = CsvExporter::new(out)?;
    for name in &names {
        let record = decryptor.record(name)?;
        exporter.write(&convert(&record))?;
    }

    let rows = exporter.rows();
    exporter.finish()?;

    info!(rows, "migration complete");
    Ok(rows)
}
