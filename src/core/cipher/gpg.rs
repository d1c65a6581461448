//! GPG backend.
//!
//! Decrypts record files with GnuPG directly, for machines where the
//! store was copied over but `pass` is not installed.
//!
//! ## Requirements
//!
//! - `gpg` CLI must be installed
//! - Private key must be available in the keyring

use std::path::PathBuf;
use std::process::Command;

use super::{run_tool, Decrypt};
use crate::core::store::PasswordStore;
use crate::error::Result;

/// Decrypts record files through the `gpg` CLI
#[derive(Debug, Clone)]
pub struct Gpg {
    program: PathBuf,
    store: PasswordStore,
}

impl Gpg {
    /// Create a backend running `program` on files of `store`.
    pub fn new(program: impl Into<PathBuf>, store: PasswordStore) -> Self {
        Self {
            program: program.into(),
            store,
        }
    }

    fn command(&self, name: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([
            "--decrypt",
            "--batch", // Non-interactive mode
            "--yes",   // Assume yes to all questions
            "--quiet", // Minimize output
        ])
        .arg(self.store.record_path(name));
        cmd
    }
}

impl Decrypt for Gpg {
    fn decrypt(&self, name: &str) -> Result<Vec<String>> {
        let program = self.program.display().to_string();
        run_tool(self.command(name), &program, name)
    }

    fn name(&self) -> &'static str {
        "gpg"
    }
}
