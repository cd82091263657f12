use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use error_stack::{Report, Result, ResultExt};
use thiserror::Error;

use crate::blockchain::prelude::*;
use crate::moralis::MoralisApi;
use crate::routines::blockchain::{FetchEvmWalletRoutine, FetchSolanaWalletRoutine};

/// Courtesy pause before every address, whatever happened to the previous one.
pub const REQUEST_DELAY: Duration = Duration::from_millis(200);

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("'{}' not found", .0.display())]
    MissingInputFile(PathBuf),
    #[error("Failed to read '{}'", .0.display())]
    ReadInput(PathBuf),
}

/// Reads one address per line, skipping blank lines.
pub fn read_wallets(path: &Path) -> Result<Vec<WalletAddress>, ScanError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Report::new(ScanError::MissingInputFile(path.to_path_buf())));
        }
        Err(e) => return Err(e).change_context(ScanError::ReadInput(path.to_path_buf())),
    };

    Ok(contents.lines().filter_map(WalletAddress::parse).collect())
}

pub struct ScanWalletsRoutine<'a> {
    api: &'a dyn MoralisApi,
}

impl<'a> ScanWalletsRoutine<'a> {
    pub fn new(api: &'a dyn MoralisApi) -> Self {
        Self { api }
    }

    /// Never fails: fetch errors end up in the returned result.
    pub async fn check_wallet(&self, address: &WalletAddress) -> BalanceResult {
        let kind = address.kind();
        tokio::time::sleep(REQUEST_DELAY).await;

        let fetched = match kind {
            ChainKind::Evm => FetchEvmWalletRoutine.run(self.api, address).await,
            ChainKind::Solana => FetchSolanaWalletRoutine.run(self.api, address).await,
            ChainKind::Unknown => {
                log::info!("Skipping {address}: not an EVM or Solana address");
                return BalanceResult::invalid_address();
            }
        };

        match fetched {
            Ok(summary) => BalanceResult::active(kind, summary),
            Err(report) => {
                log::warn!("Failed to fetch {kind} wallet {address}: {report:?}");
                BalanceResult::failed(kind, format!("{report:#}"))
            }
        }
    }

    /// Checks every address in order, handing each row to `on_row` as soon as it is ready.
    pub async fn run(
        &self,
        wallets: Vec<WalletAddress>,
        mut on_row: impl FnMut(&ReportRow),
    ) -> Vec<ReportRow> {
        log::info!("Scanning {} wallets", wallets.len());

        let mut rows = Vec::with_capacity(wallets.len());
        for address in wallets {
            let result = self.check_wallet(&address).await;
            let row = ReportRow { address, result };
            on_row(&row);
            rows.push(row);
        }

        log::info!("Scanned {} wallets", rows.len());
        rows
    }
}
