use std::sync::Mutex;

use async_trait::async_trait;
use error_stack::{Report, Result, ResultExt};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{ApiError, MoralisApi};
use super::entities::{Erc20Balance, NativeBalance, SolanaPortfolio};

/// Canned Moralis responses, given as raw JSON so deserialization is exercised too.
#[derive(Debug, Default)]
pub struct FakeMoralisApi {
    native_balance: Option<Value>,
    token_balances: Option<Value>,
    portfolio: Option<Value>,
    failing_addresses: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeMoralisApi {
    pub fn with_native_balance(mut self, value: Value) -> Self {
        self.native_balance = Some(value);
        self
    }

    pub fn with_token_balances(mut self, value: Value) -> Self {
        self.token_balances = Some(value);
        self
    }

    pub fn with_portfolio(mut self, value: Value) -> Self {
        self.portfolio = Some(value);
        self
    }

    /// Every call for this address answers with a 500.
    pub fn failing_for(mut self, address: &str) -> Self {
        self.failing_addresses.push(address.to_string());
        self
    }

    /// `"<endpoint>:<address>"` for every call made so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        address: &str,
        value: &Option<Value>,
    ) -> Result<T, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{endpoint}:{address}"));

        if self.failing_addresses.iter().any(|a| a == address) {
            return Err(Report::new(ApiError::HttpStatusError(
                "HTTP error 500 Internal Server Error: boom".to_string(),
            )));
        }

        let value = value.clone().ok_or_else(|| {
            Report::new(ApiError::HttpStatusError(
                "HTTP error 404 Not Found".to_string(),
            ))
        })?;
        serde_json::from_value(value).change_context(ApiError::JsonError)
    }
}

#[async_trait]
impl MoralisApi for FakeMoralisApi {
    async fn native_balance(&self, chain: &str, address: &str) -> Result<NativeBalance, ApiError> {
        assert_eq!(chain, "eth");
        self.respond("native_balance", address, &self.native_balance)
    }

    async fn wallet_token_balances(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Vec<Erc20Balance>, ApiError> {
        assert_eq!(chain, "eth");
        self.respond("wallet_token_balances", address, &self.token_balances)
    }

    async fn solana_portfolio(
        &self,
        network: &str,
        address: &str,
    ) -> Result<SolanaPortfolio, ApiError> {
        assert_eq!(network, "mainnet");
        self.respond("solana_portfolio", address, &self.portfolio)
    }
}
