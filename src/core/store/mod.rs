//! Password store enumeration.
//!
//! Walks a `pass` store directory and yields the logical names of its
//! records: `Email/example.com` for `<root>/Email/example.com.gpg`.
//! The `.git` directory, symlinks and files without the `.gpg` extension
//! are skipped.

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

use crate::core::constants;
use crate::core::types::RecordName;
use crate::error::{Result, StoreError};

/// A password store rooted at a directory
#[derive(Debug, Clone)]
pub struct PasswordStore {
    root: PathBuf,
}

impl PasswordStore {
    /// Open the store at `root`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::NotFound(root).into());
        }
        debug!(root = %root.display(), "opened password store");
        Ok(Self { root })
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Encrypted file backing the record `name`
    pub fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, constants::RECORD_EXTENSION))
    }

    /// Logical names of every record in the store, sorted.
    ///
    /// # Errors
    ///
    /// Any directory that cannot be read aborts the listing.
    pub fn list(&self) -> Result<Vec<RecordName>> {
        let mut files = Vec::new();
        walk(&self.root, &mut files)?;

        let mut names = files
            .iter()
            .map(|path| self.record_name(path))
            .collect::<Result<Vec<_>>>()?;
        names.sort();

        debug!(count = names.len(), "enumerated records");
        Ok(names)
    }

    /// Turn a record file path into its logical name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidRecordPath` if `path` is not inside the
    /// store or does not carry the record extension.
    pub fn record_name(&self, path: &Path) -> Result<RecordName> {
        let invalid = || StoreError::InvalidRecordPath {
            path: path.to_path_buf(),
            store: self.root.clone(),
        };

        if !is_record_file(path) {
            return Err(invalid().into());
        }

        let relative = path.strip_prefix(&self.root).map_err(|_| invalid())?;
        let stem = relative.with_extension("");

        let mut segments = Vec::new();
        for component in stem.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                _ => return Err(invalid().into()),
            }
        }
        if segments.is_empty() {
            return Err(invalid().into());
        }

        Ok(segments.join("/"))
    }
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext == constants::RECORD_EXTENSION)
        && path.file_stem().map_or(false, |stem| !stem.is_empty())
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let read_err = |source: std::io::Error| StoreError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(read_err)?;

        if file_type.is_dir() {
            if entry.file_name() == constants::GIT_DIR {
                trace!(path = %path.display(), "skipping git directory");
                continue;
            }
            walk(&path, files)?;
        } else if file_type.is_file() && is_record_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "ciphertext").unwrap();
    }

    #[test]
    fn test_open_missing_store() {
        let dir = TempDir::new().unwrap();
        let result = PasswordStore::open(dir.path().join("nope"));
        assert!(matches!(
            result,
            Err(crate::error::Error::Store(StoreError::NotFound(_)))
        ));
    }

    #[test]
    fn test_list_strips_root_and_extension() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Email/example.com.gpg");
        touch(dir.path(), "Notes/Wifi/home.gpg");
        touch(dir.path(), "top.gpg");

        let store = PasswordStore::open(dir.path()).unwrap();
        assert_eq!(
            store.list().unwrap(),
            vec!["Email/example.com", "Notes/Wifi/home", "top"]
        );
    }

    #[test]
    fn test_list_skips_git_and_other_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".git/objects/ab.gpg");
        touch(dir.path(), ".gpg-id");
        touch(dir.path(), "Notes/readme.txt");
        touch(dir.path(), "Notes/kept.gpg");

        let store = PasswordStore::open(dir.path()).unwrap();
        assert_eq!(store.list().unwrap(), vec!["Notes/kept"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_skips_symlinked_records() {
        let outside = TempDir::new().unwrap();
        touch(outside.path(), "real.gpg");
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "kept.gpg");
        std::os::unix::fs::symlink(outside.path().join("real.gpg"), dir.path().join("link.gpg"))
            .unwrap();

        let store = PasswordStore::open(dir.path()).unwrap();
        assert_eq!(store.list().unwrap(), vec!["kept"]);
    }

    #[test]
    fn test_list_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = PasswordStore::open(dir.path()).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_record_name_outside_store_is_error() {
        let dir = TempDir::new().unwrap();
        let store = PasswordStore::open(dir.path()).unwrap();

        assert!(store.record_name(Path::new("/elsewhere/a.gpg")).is_err());
        assert!(store.record_name(&dir.path().join("a.txt")).is_err());
    }

    #[test]
    fn test_record_path_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = PasswordStore::open(dir.path()).unwrap();

        let path = store.record_path("Email/example.com");
        assert_eq!(path, dir.path().join("Email/example.com.gpg"));
        assert_eq!(store.record_name(&path).unwrap(), "Email/example.com");
    }
}
