use async_trait::async_trait;
use thiserror::Error;

use super::entities::{Erc20Balance, NativeBalance, SolanaPortfolio};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed")]
    HttpError,

    #[error("HTTP status error: {0}")]
    HttpStatusError(String),

    #[error("JSON parsing failed")]
    JsonError,
}

/// The subset of the Moralis Web3 Data API the scanner consumes.
#[async_trait]
pub trait MoralisApi: Send + Sync {
    /// Native balance of an EVM address, in wei.
    async fn native_balance(
        &self,
        chain: &str,
        address: &str,
    ) -> error_stack::Result<NativeBalance, ApiError>;

    /// ERC-20 balances of an EVM address, in API order.
    async fn wallet_token_balances(
        &self,
        chain: &str,
        address: &str,
    ) -> error_stack::Result<Vec<Erc20Balance>, ApiError>;

    /// Native balance and SPL tokens of a Solana address.
    async fn solana_portfolio(
        &self,
        network: &str,
        address: &str,
    ) -> error_stack::Result<SolanaPortfolio, ApiError>;
}
