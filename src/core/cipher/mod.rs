//! Record decryption.
//!
//! passmigrate never decrypts anything itself: it drives an external tool
//! and reads the plaintext from its stdout.
//!
//! ## Backends
//!
//! - **pass**: Default. Runs `pass show <name>`.
//! - **gpg**: Runs `gpg --decrypt` on the record file directly.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Decrypt` trait
//! 2. Add the implementation in a new file
//! 3. Add a variant to `Backend` and `BackendKind`

use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::trace;
use zeroize::Zeroize;

use crate::core::domain::{split_lines, SecretRecord};
use crate::error::{DecryptError, Result};

mod backend;
mod gpg;
mod pass;

pub use backend::Backend;
pub use gpg::Gpg;
pub use pass::Pass;

/// Decryption backend trait.
pub trait Decrypt {
    /// Decrypt the record `name` into its body lines.
    ///
    /// # Errors
    ///
    /// Returns `DecryptError` if the tool cannot be run, exits non-zero, or
    /// prints something other than UTF-8.
    fn decrypt(&self, name: &str) -> Result<Vec<String>>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;

    /// Decrypt `name` into a full record.
    fn record(&self, name: &str) -> Result<SecretRecord> {
        Ok(SecretRecord::new(name, self.decrypt(name)?))
    }
}

/// Resolve `program` on PATH (or as a path) so a missing tool is reported
/// before any output is produced.
pub fn locate(program: &str) -> Result<PathBuf> {
    let path = which::which(program)
        .map_err(|_| DecryptError::ProgramNotFound(program.to_string()))?;
    trace!(program, path = %path.display(), "located tool");
    Ok(path)
}

/// Run `cmd` to completion and return its stdout split into lines.
pub(crate) fn run_tool(mut cmd: Command, program: &str, name: &str) -> Result<Vec<String>> {
    trace!(program, name, "running decryption tool");

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = cmd.output().map_err(|source| DecryptError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(DecryptError::Failed {
            name: name.to_string(),
            status: output.status,
            stderr,
        }
        .into());
    }

    let mut plaintext =
        String::from_utf8(output.stdout).map_err(|_| DecryptError::InvalidUtf8(name.to_string()))?;
    let lines = split_lines(&plaintext);
    plaintext.zeroize();

    Ok(lines)
}
