// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Expense;

/// Category used when the submitted category is blank.
pub const FALLBACK_CATEGORY: &str = "Miscellaneous";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount '{0}', expected a positive number")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("No expense at position {index} (ledger holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Budget limit must be greater than zero, got {0}")]
    NonPositiveBudget(Decimal),
}

/// Validates the raw form fields and appends exactly one record.
/// On any rejection the sequence is left untouched.
pub fn add<'a>(
    records: &'a mut Vec<Expense>,
    raw_amount: &str,
    raw_category: &str,
    raw_date: &str,
    description: &str,
) -> Result<&'a Expense, LedgerError> {
    let amount = parse_amount(raw_amount)?;
    let date = parse_entry_date(raw_date)?;
    let category = raw_category.trim();
    let category = if category.is_empty() {
        FALLBACK_CATEGORY
    } else {
        category
    };
    records.push(Expense {
        amount,
        category: category.to_string(),
        date,
        description: description.to_string(),
    });
    Ok(&records[records.len() - 1])
}

/// Removes the record at the 0-based position. Survivors keep their
/// original relative order.
pub fn remove_at(records: &mut Vec<Expense>, index: usize) -> Result<Expense, LedgerError> {
    if index >= records.len() {
        return Err(LedgerError::IndexOutOfRange {
            index,
            len: records.len(),
        });
    }
    Ok(records.remove(index))
}

fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let raw = raw.trim();
    let amount = raw
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

fn parse_entry_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}
