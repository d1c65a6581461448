//! Constants used throughout passmigrate.
//!
//! Centralizes magic strings and configuration values.

/// Default store directory relative to HOME (~/.password-store).
pub const DEFAULT_STORE_DIR: &str = ".password-store";

/// Extension of encrypted record files.
pub const RECORD_EXTENSION: &str = "gpg";

/// Version-control directory skipped while enumerating the store.
pub const GIT_DIR: &str = ".git";

/// Environment variable overriding the store location.
pub const STORE_DIR_ENV: &str = "PASSWORD_STORE_DIR";

/// Environment variable selecting the decryption backend.
pub const BACKEND_ENV: &str = "PASSMIGRATE_BACKEND";

/// Environment variable overriding the `pass` program.
pub const PASS_PROGRAM_ENV: &str = "PASSMIGRATE_PASS";

/// Environment variable overriding the `gpg` program.
pub const GPG_PROGRAM_ENV: &str = "PASSMIGRATE_GPG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PASSMIGRATE_LOG";

/// Output columns, in header order.
pub const FIELD_NAMES: [&str; 10] = [
    "folder",
    "favorite",
    "type",
    "name",
    "notes",
    "fields",
    "login_uri",
    "login_username",
    "login_password",
    "login_totp",
];

/// Attribute names promoted to the login username (compared case-insensitively).
pub const USERNAME_KEYS: &[&str] = &["username", "user"];

/// Separator used when joining folder segments.
pub const FOLDER_SEPARATOR: &str = "_";
