use std::path::PathBuf;

use config::{Config, Environment, File};
use error_stack::{Result, ResultExt};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "Config";
const ENV_PREFIX: &str = "WALLET_SCANNER";

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Failed to build configuration")]
    Build,
    #[error("Failed to deserialize configuration")]
    Deserialize,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub files: FilesConfig,
    pub moralis: MoralisConfig,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct FilesConfig {
    pub wallets: PathBuf,
    pub api_key: PathBuf,
    pub report: PathBuf,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct MoralisConfig {
    pub evm_base_url: String,
    pub solana_base_url: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Loads defaults, then the optional `Config` file (or `CONFIG_PATH`), then
    /// `WALLET_SCANNER_*` environment variables.
    pub fn load() -> Result<Self, AppConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .set_default("files.wallets", "wallets.txt")
            .and_then(|b| b.set_default("files.api_key", "api_key.secret"))
            .and_then(|b| b.set_default("files.report", "premium_report.csv"))
            .and_then(|b| {
                b.set_default(
                    "moralis.evm_base_url",
                    "https://deep-index.moralis.io/api/v2.2",
                )
            })
            .and_then(|b| {
                b.set_default(
                    "moralis.solana_base_url",
                    "https://solana-gateway.moralis.io",
                )
            })
            .and_then(|b| b.set_default("moralis.timeout_secs", 30_i64))
            .change_context(AppConfigError::Build)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .change_context(AppConfigError::Build)
            .attach_printable_lazy(|| format!("Config path: {config_path}"))?;

        config
            .try_deserialize()
            .change_context(AppConfigError::Deserialize)
            .attach_printable_lazy(|| format!("Config path: {config_path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Config");
        let config = AppConfig::load_from(missing.to_str().unwrap()).unwrap();

        assert_eq!(config.files.wallets, PathBuf::from("wallets.txt"));
        assert_eq!(config.files.api_key, PathBuf::from("api_key.secret"));
        assert_eq!(config.files.report, PathBuf::from("premium_report.csv"));
        assert_eq!(config.moralis.timeout_secs, 30);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");
        std::fs::write(
            &path,
            "[files]\nreport = \"out/report.csv\"\n\n[moralis]\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = AppConfig::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(config.files.report, PathBuf::from("out/report.csv"));
        assert_eq!(config.files.wallets, PathBuf::from("wallets.txt"));
        assert_eq!(config.moralis.timeout_secs, 5);
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");
        std::fs::write(&path, "[moralis]\ntimeout_secs = \"soon\"\n").unwrap();

        let report = AppConfig::load_from(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(
            report.current_context(),
            AppConfigError::Deserialize
        ));
    }
}
