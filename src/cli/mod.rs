//! Command-line interface.

pub mod output;

use clap::Parser;
use std::io;
use tracing::debug;

use crate::core::cipher::Backend;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::migrate::migrate;
use crate::core::store::PasswordStore;
use crate::error::{ConfigError, DecryptError, Error, Result, StoreError};

/// passmigrate - Convert a pass password store into an import CSV.
///
/// Reads the store named by PASSWORD_STORE_DIR (default ~/.password-store),
/// decrypts every record and writes one CSV row per record to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "passmigrate",
    about = "Convert a pass password store into a password-manager import CSV",
    version,
    after_help = "Environment:\n  PASSWORD_STORE_DIR    store location (default ~/.password-store)\n  PASSMIGRATE_BACKEND   pass (default) or gpg\n  PASSMIGRATE_PASS      pass program\n  PASSMIGRATE_GPG       gpg program\n  PASSMIGRATE_LOG       log filter, e.g. passmigrate=debug"
)]
pub struct Cli {}

/// Run a full migration to stdout.
pub fn execute() -> Result<()> {
    let config = Config::from_env()?;
    let store = PasswordStore::open(&config.store_dir)?;
    let backend = Backend::from_config(&config, &store)?;

    let stdout = io::stdout();
    let rows = migrate(&store, &backend, stdout.lock())?;

    debug!(rows, "wrote csv");
    if rows == 0 {
        output::warn(&format!(
            "no records found in {}",
            store.root().display()
        ));
    }
    Ok(())
}

/// Follow-up advice for errors the user can fix.
pub fn suggestion(error: &Error) -> Option<String> {
    match error {
        Error::Store(StoreError::NotFound(_)) => Some(format!(
            "set {} to your password store",
            constants::STORE_DIR_ENV
        )),
        Error::Decrypt(DecryptError::ProgramNotFound(program)) => Some(format!(
            "install {} or point {} / {} at it",
            program,
            constants::PASS_PROGRAM_ENV,
            constants::GPG_PROGRAM_ENV
        )),
        Error::Config(ConfigError::UnknownBackend(_)) => Some(format!(
            "set {} to pass or gpg",
            constants::BACKEND_ENV
        )),
        Error::Config(ConfigError::NoHomeDir) => Some(format!(
            "set {} explicitly",
            constants::STORE_DIR_ENV
        )),
        _ => None,
    }
}
