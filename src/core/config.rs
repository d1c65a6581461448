//! Runtime configuration.
//!
//! There is no configuration file: everything comes from the environment,
//! following the conventions of `pass` itself.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Decryption backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// `pass show <name>`
    #[default]
    Pass,
    /// `gpg --decrypt <file>`
    Gpg,
}

impl std::str::FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass" => Ok(Self::Pass),
            "gpg" => Ok(Self::Gpg),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the password store
    pub store_dir: PathBuf,
    /// Which tool decrypts records
    pub backend: BackendKind,
    /// Program used by the pass backend
    pub pass_program: String,
    /// Program used by the gpg backend
    pub gpg_program: String,
}

impl Config {
    /// Build the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` when the store location must be
    /// derived from a home directory that cannot be found, or
    /// `ConfigError::UnknownBackend` for an unsupported backend name.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = dirs::home_dir();
        let store_dir = match lookup(constants::STORE_DIR_ENV).filter(|v| !v.is_empty()) {
            Some(dir) => expand_home(&dir, home.as_deref())?,
            None => home
                .ok_or(ConfigError::NoHomeDir)?
                .join(constants::DEFAULT_STORE_DIR),
        };

        let backend = match lookup(constants::BACKEND_ENV).filter(|v| !v.is_empty()) {
            Some(name) => name.parse()?,
            None => BackendKind::default(),
        };

        let pass_program = lookup(constants::PASS_PROGRAM_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "pass".to_string());
        let gpg_program = lookup(constants::GPG_PROGRAM_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "gpg".to_string());

        debug!(store = %store_dir.display(), ?backend, "config resolved");

        Ok(Self {
            store_dir,
            backend,
            pass_program,
            gpg_program,
        })
    }
}

/// Expand a leading `~/` (or a bare `~`) against `home`.
fn expand_home(dir: &str, home: Option<&Path>) -> Result<PathBuf> {
    if dir == "~" {
        return Ok(home.ok_or(ConfigError::NoHomeDir)?.to_path_buf());
    }
    match dir.strip_prefix("~/") {
        Some(rest) => Ok(home.ok_or(ConfigError::NoHomeDir)?.join(rest)),
        None => Ok(PathBuf::from(dir)),
    }
}
