use error_stack::{Result, ResultExt};

use crate::blockchain::prelude::*;
use crate::moralis::MoralisApi;
use crate::routines::FetchError;

pub const SOLANA_NETWORK: &str = "mainnet";

pub struct FetchSolanaWalletRoutine;

impl FetchSolanaWalletRoutine {
    pub async fn run(
        &self,
        api: &dyn MoralisApi,
        address: &WalletAddress,
    ) -> Result<WalletSummary, FetchError> {
        log::debug!("Fetching portfolio for {address}");
        let portfolio = api
            .solana_portfolio(SOLANA_NETWORK, address.as_str())
            .await
            .change_context(FetchError::Portfolio)?;

        // Already in SOL, not lamports. A null or missing nativeBalance counts as zero
        // instead of failing the wallet
        let balance = match portfolio.native_balance.and_then(|native| native.solana) {
            Some(amount) => amount
                .to_f64()
                .change_context(FetchError::InvalidAmount)
                .attach_printable("Native balance is not a number")?,
            None => 0.0,
        };

        // Unlike EVM, zero balance tokens are kept
        let symbols = portfolio
            .tokens
            .unwrap_or_default()
            .into_iter()
            .filter_map(|token| token.symbol)
            .filter(|symbol| !symbol.is_empty());

        Ok(WalletSummary {
            balance,
            holdings: TokenHoldings::from_symbols(symbols),
        })
    }
}
