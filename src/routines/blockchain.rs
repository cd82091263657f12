pub mod fetch_evm_wallet;
pub mod fetch_solana_wallet;

pub use fetch_evm_wallet::FetchEvmWalletRoutine;
pub use fetch_solana_wallet::FetchSolanaWalletRoutine;
