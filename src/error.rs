//! Error types.
//!
//! Every failure here is fatal to a run: the converter never skips a record.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Decrypt(#[from] DecryptError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Environment configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("unknown backend: {0}. Supported: pass, gpg")]
    UnknownBackend(String),
}

/// Password store enumeration errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("password store not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a record under {}", path.display(), store.display())]
    InvalidRecordPath { path: PathBuf, store: PathBuf },
}

/// Record decryption errors.
#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("{0} not found in PATH")]
    ProgramNotFound(String),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decrypt {name} ({status}): {stderr}")]
    Failed {
        name: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("decrypted contents of {0} are not valid UTF-8")]
    InvalidUtf8(String),
}

/// CSV output errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
