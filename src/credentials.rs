use thiserror::Error;

pub mod api_key;
pub mod cached_file;
#[cfg(test)]
pub mod in_memory;
pub mod interactive_prompt;
pub mod provider;

pub use api_key::ApiKey;
pub use cached_file::CachedFileCredentials;
pub use interactive_prompt::InteractivePrompt;
pub use provider::{CredentialProvider, KeyOrigin};

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Failed to read cached API key")]
    ReadCache,
    #[error("Failed to write cached API key")]
    WriteCache,
    #[error("Failed to read API key from prompt")]
    Prompt,
    #[error("Input closed before an API key was entered")]
    PromptClosed,
}

/// Somewhere an API key can come from.
pub trait CredentialSource {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the source has no key, which is not an error.
    fn load(&mut self) -> error_stack::Result<Option<ApiKey>, CredentialError>;
}

/// Somewhere an API key can be kept for the next run.
pub trait CredentialStore {
    fn save(&mut self, key: &ApiKey) -> error_stack::Result<(), CredentialError>;
}
