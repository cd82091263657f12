use error_stack::{Report, Result};

use super::{ApiKey, CredentialError, CredentialSource, CredentialStore};

/// Cached keys this short are considered garbage and the user is asked again.
const MIN_CACHED_KEY_LEN: usize = 10;

#[derive(Debug)]
pub enum KeyOrigin {
    Cached,
    Entered,
    /// Entered by the user but could not be cached; the key is still usable for this run.
    EnteredNotSaved(Report<CredentialError>),
}

#[derive(Debug)]
pub struct AcquiredKey {
    pub key: ApiKey,
    pub origin: KeyOrigin,
}

/// Looks for a cached key first and falls back to asking the user, caching whatever they enter.
pub struct CredentialProvider<C, P> {
    cache: C,
    prompt: P,
}

impl<C, P> CredentialProvider<C, P>
where
    C: CredentialSource + CredentialStore,
    P: CredentialSource,
{
    pub fn new(cache: C, prompt: P) -> Self {
        Self { cache, prompt }
    }

    pub fn get_api_key(&mut self) -> Result<AcquiredKey, CredentialError> {
        match self.cache.load() {
            Ok(Some(key)) if key.len() > MIN_CACHED_KEY_LEN => {
                log::info!("Using API key from {}", self.cache.name());
                return Ok(AcquiredKey {
                    key,
                    origin: KeyOrigin::Cached,
                });
            }
            Ok(Some(key)) => {
                log::debug!(
                    "Ignoring {} chars long key from {}",
                    key.len(),
                    self.cache.name()
                );
            }
            Ok(None) => {}
            Err(report) => {
                log::warn!("Could not read API key from {}: {report:?}", self.cache.name());
            }
        }

        let key = self
            .prompt
            .load()?
            .ok_or_else(|| Report::new(CredentialError::PromptClosed))?;
        log::info!("Using API key from {}", self.prompt.name());
        if key.is_empty() {
            log::warn!("An empty API key was entered, every request will be rejected");
        }

        let origin = match self.cache.save(&key) {
            Ok(()) => KeyOrigin::Entered,
            Err(report) => {
                log::warn!("Could not cache API key: {report:?}");
                KeyOrigin::EnteredNotSaved(report)
            }
        };

        Ok(AcquiredKey { key, origin })
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (C, P) {
        (self.cache, self.prompt)
    }
}
