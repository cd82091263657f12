use std::io::{self, BufRead, Write};

use colored::{Color, Colorize};

use crate::blockchain::prelude::*;
use crate::credentials::KeyOrigin;

const API_KEY_URL: &str = "https://admin.moralis.io/web3apis";

pub fn print_banner() {
    println!("{}", "--- Crypto Universal Checker v3 ---".yellow());
    println!("{}", "To use this tool, you need a free Moralis API Key.".cyan());
    println!("{}", format!("Get it here: {API_KEY_URL}").cyan());
    println!("{}", "-".repeat(40));
}

pub fn print_key_origin(origin: &KeyOrigin) {
    match origin {
        KeyOrigin::Cached => println!("{}", "✅ Found saved API Key!".green()),
        KeyOrigin::Entered => println!("{}", "✅ Key saved for future use.".green()),
        KeyOrigin::EnteredNotSaved(report) => print_error(&format!(
            "⚠️ Could not save the API Key, it will be asked again next time: {report:#}"
        )),
    }
}

pub fn print_scan_start(wallet_count: usize) {
    println!("{}", format!("\n🚀 Scanning {wallet_count} wallets...\n").cyan());
}

pub fn print_success(message: &str) {
    println!("{}", message.green());
}

pub fn print_error(message: &str) {
    println!("{}", message.red());
}

pub fn row_color(kind: ChainKind) -> Color {
    match kind {
        ChainKind::Evm => Color::Blue,
        ChainKind::Solana => Color::Magenta,
        ChainKind::Unknown => Color::Red,
    }
}

/// Four decimals, or `0.0000` for values that cannot be shown.
pub fn format_balance(balance: f64) -> String {
    if balance.is_finite() {
        format!("{balance:.4}")
    } else {
        "0.0000".to_string()
    }
}

/// Uncolored progress line for a scanned wallet.
pub fn row_line(row: &ReportRow) -> String {
    let result = &row.result;
    format!(
        "[{}] {}... | Bal: {} | Memes: {} ({})",
        result.kind.type_tag(),
        row.address.short(),
        format_balance(result.balance),
        result.token_count.unwrap_or(0),
        result.tokens,
    )
}

pub fn print_row(row: &ReportRow) {
    println!("{}", row_line(row).color(row_color(row.result.kind)));
}

/// Blocks until the user presses Enter. A closed stdin counts as Enter.
pub fn wait_for_enter(prompt: &str) {
    print!("{}", prompt.white());
    if let Err(e) = io::stdout().flush() {
        log::debug!("Failed to flush stdout: {e}");
    }

    let mut line = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut line) {
        log::debug!("Failed to read from stdin: {e}");
    }
}
