use error_stack::Result;

use super::{ApiKey, CredentialError, CredentialSource, CredentialStore};

/// Test double standing in for both the cache file and the prompt.
#[derive(Debug, Default)]
pub struct InMemoryCredentials {
    pub key: Option<ApiKey>,
    pub saved: Vec<ApiKey>,
    pub loads: usize,
    pub fail_saves: bool,
}

impl InMemoryCredentials {
    pub fn with_key(key: &str) -> Self {
        Self {
            key: Some(ApiKey::new(key)),
            ..Default::default()
        }
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }
}

impl CredentialSource for InMemoryCredentials {
    fn name(&self) -> &'static str {
        "in memory"
    }

    fn load(&mut self) -> Result<Option<ApiKey>, CredentialError> {
        self.loads += 1;
        Ok(self.key.clone())
    }
}

impl CredentialStore for InMemoryCredentials {
    fn save(&mut self, key: &ApiKey) -> Result<(), CredentialError> {
        if self.fail_saves {
            return Err(CredentialError::WriteCache.into());
        }
        self.saved.push(key.clone());
        self.key = Some(key.clone());
        Ok(())
    }
}
