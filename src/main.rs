mod blockchain;
mod cli;
mod config;
mod credentials;
mod moralis;
mod report;
mod routines;

use error_stack::Result;

use crate::cli::terminal;
use crate::config::app_config::{AppConfig, FilesConfig};
use crate::credentials::{
    ApiKey, CachedFileCredentials, CredentialProvider, CredentialSource, CredentialStore,
    InteractivePrompt,
};
use crate::moralis::{ApiError, MoralisApi, MoralisApiClient};
use crate::report::write_report;
use crate::routines::scan_wallets::{read_wallets, ScanError, ScanWalletsRoutine};

const CLOSE_PROMPT: &str = "\nPress Enter to close...";
const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Key, wallets, scan, report. Every exit path ends in `pause`.
async fn run<C, P, F>(
    files: &FilesConfig,
    provider: CredentialProvider<C, P>,
    connect: F,
    pause: &mut dyn FnMut(&str),
) where
    C: CredentialSource + CredentialStore,
    P: CredentialSource,
    F: FnOnce(ApiKey) -> Result<Box<dyn MoralisApi>, ApiError>,
{
    terminal::print_banner();

    // The provider owns the prompt, so it goes away before the first pause
    let acquired = {
        let mut provider = provider;
        provider.get_api_key()
    };
    let api_key = match acquired {
        Ok(acquired) => {
            terminal::print_key_origin(&acquired.origin);
            acquired.key
        }
        Err(report) => {
            log::error!("{report:?}");
            terminal::print_error(&format!("❌ Could not get an API Key: {report:#}"));
            pause(EXIT_PROMPT);
            return;
        }
    };

    let wallets = match read_wallets(&files.wallets) {
        Ok(wallets) => wallets,
        Err(report) => {
            log::error!("{report:?}");
            match report.current_context() {
                ScanError::MissingInputFile(path) => terminal::print_error(&format!(
                    "❌ '{}' not found! Please create it.",
                    path.display()
                )),
                ScanError::ReadInput(_) => terminal::print_error(&format!("❌ {report:#}")),
            }
            pause(EXIT_PROMPT);
            return;
        }
    };

    let api = match connect(api_key) {
        Ok(api) => api,
        Err(report) => {
            log::error!("{report:?}");
            terminal::print_error(&format!("❌ {report:#}"));
            pause(EXIT_PROMPT);
            return;
        }
    };

    terminal::print_scan_start(wallets.len());
    let rows = ScanWalletsRoutine::new(api.as_ref())
        .run(wallets, terminal::print_row)
        .await;

    match write_report(&files.report, &rows) {
        Ok(()) => terminal::print_success(&format!(
            "\n✅ Scan Complete! Saved to '{}'",
            files.report.display()
        )),
        Err(report) => {
            log::error!("{report:?}");
            terminal::print_error(&format!("❌ Could not save CSV: {report:#}"));
        }
    }

    pause(CLOSE_PROMPT);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(report) => {
            log::error!("{report:?}");
            terminal::print_error(&format!("❌ Invalid configuration: {report:#}"));
            terminal::wait_for_enter(EXIT_PROMPT);
            return;
        }
    };

    log::debug!("Loaded config: {config:?}");
    let provider = CredentialProvider::new(
        CachedFileCredentials::new(&config.files.api_key),
        InteractivePrompt::stdio(),
    );
    let connect = |key| {
        MoralisApiClient::new(key, &config.moralis).map(|api| Box::new(api) as Box<dyn MoralisApi>)
    };
    run(&config.files, provider, connect, &mut terminal::wait_for_enter).await;
}
