//! Record classification from the store path.
//!
//! A path segment that ends like a domain (`.com`, `.io`, ...) is taken as
//! the login URI and makes the entry a login. The remaining non-leaf
//! segments become the folder.

use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

use crate::core::constants::FOLDER_SEPARATOR;
use crate::core::domain::EntryBuilder;

fn uri_ish() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.[a-z]{2,3}$").unwrap())
}

/// Whether a single path segment looks like a domain name.
pub fn is_uri_ish(segment: &str) -> bool {
    uri_ish().is_match(segment)
}

/// First segment of `name` that looks like a domain name.
pub fn uri_segment(name: &str) -> Option<&str> {
    name.split('/').find(|segment| is_uri_ish(segment))
}

/// Folder for `name`: non-leaf segments joined with `_`, minus the first
/// occurrence of `login_uri`. Without a URI the first empty segment is
/// dropped instead.
pub fn folder_for(name: &str, login_uri: Option<&str>) -> String {
    let segments: Vec<&str> = name.split('/').collect();
    let mut folders = segments[..segments.len() - 1].to_vec();

    let uri = login_uri.unwrap_or("");
    if let Some(pos) = folders.iter().position(|s| *s == uri) {
        folders.remove(pos);
    }

    folders.join(FOLDER_SEPARATOR)
}

/// Fill in URI, kind and folder for the record named `name`.
pub fn classify(name: &str, entry: &mut EntryBuilder) {
    let uri = uri_segment(name);

    if let Some(uri) = uri {
        trace!(uri, "path segment looks like a site");
        entry.mark_login();
        entry.set_login_uri(uri);
    }

    let folder = folder_for(name, uri);
    if !folder.is_empty() {
        entry.set_folder(folder);
    }
}
