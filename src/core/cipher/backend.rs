//! Backend selection and dispatch.

use tracing::debug;

use super::{locate, Decrypt, Gpg, Pass};
use crate::core::config::{BackendKind, Config};
use crate::core::store::PasswordStore;
use crate::error::Result;

/// Decryption backend for a run.
#[derive(Debug)]
pub enum Backend {
    /// `pass show`
    Pass(Pass),
    /// `gpg --decrypt`
    Gpg(Gpg),
}

impl Backend {
    /// Create the backend named by `config`.
    ///
    /// The backend's program is resolved up front, so a missing tool fails
    /// before the store is read.
    pub fn from_config(config: &Config, store: &PasswordStore) -> Result<Self> {
        match config.backend {
            BackendKind::Pass => {
                let program = locate(&config.pass_program)?;
                debug!(program = %program.display(), "creating pass backend");
                Ok(Self::Pass(Pass::new(program, store.root())))
            }
            BackendKind::Gpg => {
                let program = locate(&config.gpg_program)?;
                debug!(program = %program.display(), "creating gpg backend");
                Ok(Self::Gpg(Gpg::new(program, store.clone())))
            }
        }
    }
}

impl Decrypt for Backend {
    fn decrypt(&self, name: &str) -> Result<Vec<String>> {
        match self {
            Self::Pass(pass) => pass.decrypt(name),
            Self::Gpg(gpg) => gpg.decrypt(name),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Pass(pass) => pass.name(),
            Self::Gpg(gpg) => gpg.name(),
        }
    }
}
