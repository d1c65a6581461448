//! `pass` backend.
//!
//! Runs `pass show <name>` against the store, exactly as a user would.
//!
//! ## Requirements
//!
//! - `pass` must be installed
//! - the GPG agent must be able to decrypt the store without prompting on
//!   stdin (pinentry is fine)

use std::path::PathBuf;
use std::process::Command;

use super::{run_tool, Decrypt};
use crate::core::constants;
use crate::error::Result;

/// Decrypts records through the `pass` CLI
#[derive(Debug, Clone)]
pub struct Pass {
    program: PathBuf,
    store_dir: PathBuf,
}

impl Pass {
    /// Create a backend running `program` against the store at `store_dir`.
    pub fn new(program: impl Into<PathBuf>, store_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            store_dir: store_dir.into(),
        }
    }

    fn command(&self, name: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.env(constants::STORE_DIR_ENV, &self.store_dir)
            .arg("show")
            .arg(name);
        cmd
    }
}

impl Decrypt for Pass {
    fn decrypt(&self, name: &str) -> Result<Vec<String>> {
        let program = self.program.display().to_string();
        run_tool(self.command(name), &program, name)
    }

    fn name(&self) -> &'static str {
        "pass"
    }
}
