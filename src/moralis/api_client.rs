use std::time::Duration;

use async_trait::async_trait;
use error_stack::{Result, ResultExt};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::api::{ApiError, MoralisApi};
use super::entities::{Erc20Balance, NativeBalance, SolanaPortfolio};
use crate::config::app_config::MoralisConfig;
use crate::credentials::ApiKey;

const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug)]
pub struct MoralisApiClient {
    client: Client,
    api_key: ApiKey,
    evm_base_url: String,
    solana_base_url: String,
}

impl MoralisApiClient {
    pub fn new(api_key: ApiKey, config: &MoralisConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .change_context(ApiError::HttpError)
            .attach_printable("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            evm_base_url: config.evm_base_url.trim_end_matches('/').to_owned(),
            solana_base_url: config.solana_base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        log::debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .query(query)
            .send()
            .await
            .change_context(ApiError::HttpError)
            .attach_printable("Failed to make GET request")
            .attach_printable_lazy(|| format!("URL: {url}"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .change_context(ApiError::HttpError)
            .attach_printable("Failed to get response text")
            .attach_printable_lazy(|| format!("URL: {url}"))?;

        if !status.is_success() {
            return Err(ApiError::HttpStatusError(format!("HTTP error {status}: {text}")).into());
        }

        log::debug!("Response OK {status}, {} bytes", text.len());

        serde_json::from_str(&text)
            .change_context(ApiError::JsonError)
            .attach_printable_lazy(|| format!("Response: {text}"))
    }
}

#[async_trait]
impl MoralisApi for MoralisApiClient {
    async fn native_balance(&self, chain: &str, address: &str) -> Result<NativeBalance, ApiError> {
        let url = format!("{}/{address}/balance", self.evm_base_url);
        self.get_json(&url, &[("chain", chain)]).await
    }

    async fn wallet_token_balances(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Vec<Erc20Balance>, ApiError> {
        let url = format!("{}/{address}/erc20", self.evm_base_url);
        self.get_json(&url, &[("chain", chain)]).await
    }

    async fn solana_portfolio(
        &self,
        network: &str,
        address: &str,
    ) -> Result<SolanaPortfolio, ApiError> {
        let url = format!(
            "{}/account/{network}/{address}/portfolio",
            self.solana_base_url
        );
        self.get_json(&url, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MoralisConfig {
        MoralisConfig {
            evm_base_url: "https://deep-index.moralis.io/api/v2.2/".to_string(),
            solana_base_url: "https://solana-gateway.moralis.io".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = MoralisApiClient::new(ApiKey::new("test-key-0123456789"), &config()).unwrap();
        assert_eq!(client.evm_base_url, "https://deep-index.moralis.io/api/v2.2");
        assert_eq!(client.solana_base_url, "https://solana-gateway.moralis.io");
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let client = MoralisApiClient::new(ApiKey::new("test-key-0123456789"), &config()).unwrap();
        assert!(!format!("{client:?}").contains("test-key-0123456789"));
    }
}
