//! passmigrate - Move a `pass` password store into a password manager.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   └── output        # Styled stderr messages
//! └── core/             # Core library components
//!     ├── config        # Environment configuration
//!     ├── store/        # Record enumeration
//!     ├── cipher/       # Decryption backends
//!     │   ├── mod       # Decrypt trait
//!     │   ├── pass      # pass show
//!     │   └── gpg       # gpg --decrypt
//!     ├── classify      # Path -> folder, URI, login
//!     ├── extract       # Body -> username, fields, notes
//!     ├── convert       # Record -> entry
//!     ├── migrate       # Store -> CSV
//!     └── export        # Entries -> CSV
//! ```
//!
//! # Conversion
//!
//! Every record becomes one entry. A path segment that looks like a domain
//! (`example.com`) becomes the login URI; a `username:` or `user:` line
//! becomes the login username. Either one makes the entry a login whose
//! password is the first body line. Everything else is a note.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::cipher::{Backend, Decrypt};
pub use crate::core::config::Config;
pub use crate::core::convert::convert;
pub use crate::core::domain::{Entry, EntryBuilder, EntryKind, SecretRecord};
pub use crate::core::export::CsvExporter;
pub use crate::core::migrate::migrate;
pub use crate::core::store::PasswordStore;
pub use crate::error::{Error, Result};
