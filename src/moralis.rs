pub mod api;
pub mod api_client;
pub mod entities;
#[cfg(test)]
pub mod fake;

pub use api::{ApiError, MoralisApi};
pub use api_client::MoralisApiClient;
