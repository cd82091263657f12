use serde::Serialize;

use super::address::{ChainKind, WalletAddress};
use super::token::TokenHoldings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum WalletStatus {
    Active,
    Error,
    #[serde(rename = "Invalid Key")]
    #[strum(serialize = "Invalid Key")]
    InvalidKey,
}

/// What a successful fetch knows about a wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSummary {
    /// Native currency amount, already in human scale (ETH, SOL)
    pub balance: f64,
    pub holdings: TokenHoldings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResult {
    pub kind: ChainKind,
    pub balance: f64,
    /// Listed symbols, the error description on failure or "-" for unknown addresses
    pub tokens: String,
    /// Absent when nothing was fetched
    pub token_count: Option<usize>,
    pub status: WalletStatus,
}

impl BalanceResult {
    pub fn active(kind: ChainKind, summary: WalletSummary) -> Self {
        Self {
            kind,
            balance: summary.balance,
            tokens: summary.holdings.listed,
            token_count: Some(summary.holdings.count),
            status: WalletStatus::Active,
        }
    }

    pub fn failed(kind: ChainKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            balance: 0.0,
            tokens: description.into(),
            token_count: None,
            status: WalletStatus::Error,
        }
    }

    pub fn invalid_address() -> Self {
        Self {
            kind: ChainKind::Unknown,
            balance: 0.0,
            tokens: "-".to_string(),
            token_count: None,
            status: WalletStatus::InvalidKey,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub address: WalletAddress,
    pub result: BalanceResult,
}
