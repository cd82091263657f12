use error_stack::{Result, ResultExt};

use crate::blockchain::prelude::*;
use crate::moralis::MoralisApi;
use crate::routines::FetchError;

/// Only Ethereum mainnet is scanned, so the native amount is always 18 decimals.
pub const EVM_CHAIN: &str = "eth";

pub struct FetchEvmWalletRoutine;

impl FetchEvmWalletRoutine {
    pub async fn run(
        &self,
        api: &dyn MoralisApi,
        address: &WalletAddress,
    ) -> Result<WalletSummary, FetchError> {
        log::debug!("Fetching native balance for {address}");
        let native = api
            .native_balance(EVM_CHAIN, address.as_str())
            .await
            .change_context(FetchError::NativeBalance)?;
        let balance = native
            .balance
            .to_f64()
            .change_context(FetchError::InvalidAmount)
            .attach_printable("Native balance is not a number")?
            / WEI_CONVERSION;

        log::debug!("Fetching ERC20 balances for {address}");
        let tokens = api
            .wallet_token_balances(EVM_CHAIN, address.as_str())
            .await
            .change_context(FetchError::TokenBalances)?;

        // Keep tokens with a symbol and a positive balance
        let mut held = Vec::new();
        for token in tokens {
            let Some(symbol) = token.symbol.filter(|symbol| !symbol.is_empty()) else {
                continue;
            };
            let amount = match &token.balance {
                Some(amount) => amount
                    .to_f64()
                    .change_context(FetchError::InvalidAmount)
                    .attach_printable_lazy(|| format!("Balance of token {symbol}"))?,
                // A null balance counts as zero instead of failing the wallet
                None => 0.0,
            };
            if amount > 0.0 {
                held.push(symbol);
            }
        }

        Ok(WalletSummary {
            balance,
            holdings: TokenHoldings::from_symbols(held),
        })
    }
}
