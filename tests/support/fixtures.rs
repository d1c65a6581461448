//! Test fixtures and constants.

/// Stand-in for `pass show`: prints the record file as-is.
pub const FAKE_PASS: &str = r#"#!/bin/sh
[ "$1" = "show" ] || { echo "usage: pass show <name>" >&2; exit 64; }
f="$PASSWORD_STORE_DIR/$2.gpg"
if [ ! -f "$f" ]; then
    echo "Error: $2 is not in the password store." >&2
    exit 1
fi
cat "$f"
"#;

/// Stand-in for `gpg --decrypt`: prints the last argument's file.
pub const FAKE_GPG: &str = r#"#!/bin/sh
[ "$1" = "--decrypt" ] || exit 2
for last; do :; done
cat "$last"
"#;

/// A `pass` that always fails, like a missing private key.
pub const FAILING_PASS: &str = r#"#!/bin/sh
echo "gpg: decryption failed: No secret key" >&2
exit 2
"#;

/// Expected CSV header line.
pub const HEADER: &str =
    "folder,favorite,type,name,notes,fields,login_uri,login_username,login_password,login_totp";

/// A small store covering logins, notes and custom fields.
pub const SAMPLE_RECORDS: &[(&str, &str)] = &[
    ("Email/example.com", "hunter2\nusername: alice\nrecovery info here\n"),
    ("Notes/Wifi/home", "some passphrase\nSSID: HomeNet\n"),
    ("Work/vpn", "t0ps3cret\nuser: bob\nserver: vpn.corp\n"),
];
