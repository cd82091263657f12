use thiserror::Error;

pub mod blockchain;
pub mod scan_wallets;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch native balance")]
    NativeBalance,
    #[error("Failed to fetch token balances")]
    TokenBalances,
    #[error("Failed to fetch portfolio")]
    Portfolio,
    #[error("Invalid amount in response")]
    InvalidAmount,
}
