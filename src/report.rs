use std::path::Path;

use error_stack::{Result, ResultExt};
use serde::Serialize;
use thiserror::Error;

use crate::blockchain::prelude::*;

pub const REPORT_COLUMNS: [&str; 6] = [
    "Address",
    "Type",
    "Balance",
    "Tokens",
    "Token_Count",
    "Status",
];

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to create report file")]
    Create,
    #[error("Failed to write report")]
    Write,
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    address: &'a str,
    kind: &'static str,
    balance: f64,
    tokens: &'a str,
    token_count: Option<usize>,
    status: WalletStatus,
}

impl<'a> From<&'a ReportRow> for ReportRecord<'a> {
    fn from(row: &'a ReportRow) -> Self {
        Self {
            address: row.address.as_str(),
            kind: row.result.kind.type_tag(),
            balance: row.result.balance,
            tokens: &row.result.tokens,
            token_count: row.result.token_count,
            status: row.result.status,
        }
    }
}

/// Writes every row as CSV, overwriting `path`. The header is written even when there are no rows.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .change_context(ReportError::Create)
        .attach_printable_lazy(|| format!("Path: {}", path.display()))?;

    writer
        .write_record(REPORT_COLUMNS)
        .change_context(ReportError::Write)?;

    for row in rows {
        writer
            .serialize(ReportRecord::from(row))
            .change_context(ReportError::Write)
            .attach_printable_lazy(|| format!("Address: {}", row.address))?;
    }

    writer
        .flush()
        .change_context(ReportError::Write)
        .attach_printable_lazy(|| format!("Path: {}", path.display()))?;

    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
