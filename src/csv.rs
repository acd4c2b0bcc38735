use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::bank::Account;
use crate::{AccountKind, Amount, Operation};

/// Errors that can occur when parsing csv rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open operations file: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized operation type '{op_type}'")]
    UnrecognizedType { line: usize, op_type: String },

    #[error("line {line}: {op_type} missing amount")]
    MissingAmount { line: usize, op_type: String },

    #[error("line {line}: amount {value} is not a representable taka value")]
    InvalidAmount { line: usize, value: f64 },

    #[error("line {line}: unrecognized account kind '{kind}'")]
    UnrecognizedKind { line: usize, kind: String },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    r#type: String,
    owner: String,
    kind: Option<String>,
    amount: Option<f64>,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    owner: &'a str,
    kind: &'static str,
    balance: String,
}

/// Read operations from a csv file
pub fn read_operations(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Operation, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            parse_row(line, row)
        }))
}

fn parse_row(line: usize, row: InputRow) -> Result<Operation, CsvError> {
    let op_type = row.r#type.as_str();
    if !matches!(op_type, "open" | "deposit" | "withdraw") {
        return Err(CsvError::UnrecognizedType {
            line,
            op_type: op_type.to_string(),
        });
    }

    let value = row.amount.ok_or_else(|| CsvError::MissingAmount {
        line,
        op_type: op_type.to_string(),
    })?;
    let amount = Amount::try_from_float(value).ok_or(CsvError::InvalidAmount { line, value })?;

    let op = match op_type {
        "open" => {
            let tag = row.kind.unwrap_or_default();
            let kind = AccountKind::from_tag(&tag)
                .ok_or(CsvError::UnrecognizedKind { line, kind: tag })?;
            Operation::Open {
                owner: row.owner,
                kind,
                amount,
            }
        }
        "deposit" => Operation::Deposit {
            owner: row.owner,
            amount,
        },
        _ => Operation::Withdraw {
            owner: row.owner,
            amount,
        },
    };
    Ok(op)
}

/// Write account balances to stdout in csv format
pub fn write_balances<'a>(
    accounts: impl IntoIterator<Item = &'a dyn Account>,
) -> csv::Result<()> {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    for account in accounts {
        let row = OutputRow {
            owner: account.owner(),
            kind: account.account_type().tag(),
            balance: account.balance().to_string(),
        };
        writer.serialize(&row)?;
    }

    writer.flush()?;
    Ok(())
}
