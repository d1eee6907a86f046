//! File-backed token store for the CLI.
//!
//! The token file holds the raw token string and nothing else, mirroring the
//! browser's single `accessToken` entry.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use accounts::{StoreError, TokenStore};

const TOKEN_FILE_NAME: &str = ".access-manager-token";

/// Default token location: `$HOME/.access-manager-token`, or the working
/// directory when `HOME` is unset.
pub fn default_token_path() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(PathBuf::new, PathBuf::from)
        .join(TOKEN_FILE_NAME)
}

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn store_error(path: &Path, err: &io::Error) -> StoreError {
    StoreError(format!("{}: {err}", path.display()))
}

#[cfg(unix)]
fn open_private(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new().write(true).create(true).truncate(true).mode(0o600).open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        Some(raw.trim().to_owned())
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| store_error(parent, &e))?;
        }
        let mut file = open_private(&self.path).map_err(|e| store_error(&self.path, &e))?;
        file.write_all(token.as_bytes()).map_err(|e| store_error(&self.path, &e))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(store_error(&self.path, &e)),
            _ => Ok(()),
        }
    }
}
