use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use error_stack::{Result, ResultExt};

use super::{ApiKey, CredentialError, CredentialSource, CredentialStore};

/// API key kept in a plain text file next to the binary.
#[derive(Debug, Clone)]
pub struct CachedFileCredentials {
    path: PathBuf,
}

impl CachedFileCredentials {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CredentialSource for CachedFileCredentials {
    fn name(&self) -> &'static str {
        "cached file"
    }

    fn load(&mut self) -> Result<Option<ApiKey>, CredentialError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(ApiKey::new(&contents))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No cached API key at {}", self.path.display());
                Ok(None)
            }
            Err(e) => Err(e)
                .change_context(CredentialError::ReadCache)
                .attach_printable_lazy(|| format!("Path: {}", self.path.display())),
        }
    }
}

impl CredentialStore for CachedFileCredentials {
    fn save(&mut self, key: &ApiKey) -> Result<(), CredentialError> {
        std::fs::write(&self.path, key.expose())
            .change_context(CredentialError::WriteCache)
            .attach_printable_lazy(|| format!("Path: {}", self.path.display()))
    }
}
